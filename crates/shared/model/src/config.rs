use crate::ObjectId;
use serde::Deserialize;

/// Top-level client configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: EndpointConfig,
    pub device: DeviceConfig,
    pub objects: ObjectsConfig,
    pub logging: LoggingConfig,
}

/// Identity the client registers under.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub name: String,
}

/// Identity published through the Device object.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub firmware_version: String,
}

/// Which objects are enabled at bootstrap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObjectsConfig {
    /// Instantiate every mandatory object of the model.
    pub mandatory: bool,
    /// Additional object ids, created in the listed order.
    pub enable: Vec<ObjectId>,
}

/// Console logging knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Module directives such as `lwm2m_client=debug`. When set, `RUST_LOG` is ignored.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { name: "lwm2m-client".to_owned() }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            manufacturer: "Unknown".to_owned(),
            model_number: String::new(),
            serial_number: String::new(),
            firmware_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl Default for ObjectsConfig {
    fn default() -> Self {
        Self { mandatory: true, enable: Vec::new() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, filter: None }
    }
}
