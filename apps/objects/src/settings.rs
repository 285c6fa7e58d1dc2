use config::{Config, ConfigError, Environment, File};
use lwm2m_model::config::ClientConfig;
use std::path::Path;

/// Prefix of the environment variables overriding the configuration.
pub const ENV_PREFIX: &str = "LWM2M";

/// Loads the client configuration.
///
/// Layers, lowest priority first:
/// 1. **Defaults** of [`ClientConfig`].
/// 2. **File** at `path`, when given. Its format follows the extension.
/// 3. **Environment** variables prefixed with `LWM2M__`. Nested keys use double
///    underscores (`LWM2M__LOGGING__LEVEL=debug`); `LWM2M__OBJECTS__ENABLE` takes a
///    comma separated list, a single id included.
///
/// # Errors
/// Returns an error if the file is missing or malformed, or if a value does not
/// fit its field.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    load_config_from(path, environment())
}

/// The environment layer read by [`load_config`].
///
/// Values stay strings; they are converted to the field types on deserialization.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("objects.enable")
}

/// [`load_config`] with an explicit environment layer.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_from(
    path: Option<&Path>,
    environment: Environment,
) -> Result<ClientConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder.add_source(environment).build()?.try_deserialize()
}
