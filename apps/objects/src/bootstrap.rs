use lwm2m_client::node::{LwM2mResource, Value};
use lwm2m_client::{InitializerErrorExt, ObjectEnabler, ObjectsInitializer, SimpleInstanceEnabler};
use lwm2m_model::catalog::DEVICE;
use lwm2m_model::config::{ClientConfig, DeviceConfig};
use lwm2m_model::{LwM2mModel, ObjectId, ResourceId};
use tracing::info;

const MANUFACTURER: ResourceId = 0;
const MODEL_NUMBER: ResourceId = 1;
const SERIAL_NUMBER: ResourceId = 2;
const FIRMWARE_VERSION: ResourceId = 3;

/// Builds the enablers the client exposes, following `config.objects`.
///
/// Mandatory objects come first, then each configured extra id not created yet,
/// in the configured order. The Device object publishes the configured identity.
///
/// # Errors
/// Fails on an unknown object id or an instance that cannot be built.
pub fn bootstrap(config: &ClientConfig) -> lwm2m_client::Result<Vec<ObjectEnabler>> {
    let mut builder = ObjectsInitializer::builder(LwM2mModel::core());
    builder.register_instance(DEVICE, device_instance(&config.device)).context("device identity")?;
    let initializer = builder.build();

    let mut enablers =
        if config.objects.mandatory { initializer.create_mandatory()? } else { Vec::new() };

    let mut extra: Vec<ObjectId> = Vec::new();
    for &object_id in &config.objects.enable {
        if !extra.contains(&object_id) && !enablers.iter().any(|e| e.id() == object_id) {
            extra.push(object_id);
        }
    }
    enablers.extend(initializer.create(&extra).context("configured objects")?);

    for enabler in &enablers {
        info!(
            object_id = enabler.id(),
            name = %enabler.model().name,
            instances = ?enabler.instance_ids(),
            behavior = %enabler.behavior_type(),
            "Object enabled"
        );
    }
    Ok(enablers)
}

fn device_instance(device: &DeviceConfig) -> SimpleInstanceEnabler {
    let mut instance = SimpleInstanceEnabler::new();
    for (id, value) in [
        (MANUFACTURER, &device.manufacturer),
        (MODEL_NUMBER, &device.model_number),
        (SERIAL_NUMBER, &device.serial_number),
        (FIRMWARE_VERSION, &device.firmware_version),
    ] {
        instance.set_resource(LwM2mResource::single(id, Value::String(value.clone())));
    }
    instance
}
