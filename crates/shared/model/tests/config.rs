use lwm2m_model::config::{ClientConfig, LoggingConfig, ObjectsConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let objects = ObjectsConfig::default();
    assert!(objects.mandatory);
    assert!(objects.enable.is_empty());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
    assert!(logging.filter.is_none());

    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint.name, "lwm2m-client");
}

#[test]
fn client_config_deserializes() {
    let raw = json!({
        "endpoint": { "name": "urn:imei:0000" },
        "objects": { "mandatory": false, "enable": [6, 3, 4] },
        "logging": { "level": "debug", "filter": "lwm2m_client=trace" }
    });

    let cfg: ClientConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.endpoint.name, "urn:imei:0000");
    assert!(!cfg.objects.mandatory);
    assert_eq!(cfg.objects.enable, vec![6, 3, 4]);
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.json);
    assert_eq!(cfg.logging.filter.as_deref(), Some("lwm2m_client=trace"));
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg: ClientConfig =
        serde_json::from_value(json!({ "objects": { "enable": [5] } })).expect("config");
    assert!(cfg.objects.mandatory);
    assert_eq!(cfg.objects.enable, vec![5]);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn device_identity_is_partially_overridable() {
    let cfg: ClientConfig =
        serde_json::from_value(json!({ "device": { "manufacturer": "ACME", "serial_number": "SN-1" } }))
            .expect("config");
    assert_eq!(cfg.device.manufacturer, "ACME");
    assert_eq!(cfg.device.serial_number, "SN-1");
    assert!(cfg.device.model_number.is_empty());
    assert!(!cfg.device.firmware_version.is_empty());
}
