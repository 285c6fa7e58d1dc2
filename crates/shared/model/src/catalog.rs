//! Built-in definitions of the OMA LwM2M core objects (ids 0 to 7).
//!
//! The models are assembled in code; no schema file is read.

use crate::object::{ObjectModel, ResourceModel, ResourceType as T};
use crate::operations::Operations;
use crate::registry::LwM2mModel;
use crate::ObjectId;

pub const SECURITY: ObjectId = 0;
pub const SERVER: ObjectId = 1;
pub const ACCESS_CONTROL: ObjectId = 2;
pub const DEVICE: ObjectId = 3;
pub const CONNECTIVITY_MONITORING: ObjectId = 4;
pub const FIRMWARE_UPDATE: ObjectId = 5;
pub const LOCATION: ObjectId = 6;
pub const CONNECTIVITY_STATISTICS: ObjectId = 7;

const NONE: Operations = Operations::empty();
const R: Operations = Operations::READ;
const W: Operations = Operations::WRITE;
const RW: Operations = Operations::RW;
const E: Operations = Operations::EXECUTE;

fn res(id: u16, name: &str, ops: Operations, kind: T) -> ResourceModel {
    ResourceModel::new(id, name, ops, kind)
}

fn exec(id: u16, name: &str) -> ResourceModel {
    ResourceModel::new(id, name, E, T::None)
}

impl LwM2mModel {
    /// Registry holding every core object of [`core_objects`].
    #[must_use]
    pub fn core() -> Self {
        Self::new(core_objects())
    }
}

/// All core object models, in ascending id order.
#[must_use]
pub fn core_objects() -> Vec<ObjectModel> {
    vec![
        security(),
        server(),
        access_control(),
        device(),
        connectivity_monitoring(),
        firmware_update(),
        location(),
        connectivity_statistics(),
    ]
}

#[must_use]
pub fn security() -> ObjectModel {
    ObjectModel::new(SECURITY, "LWM2M Security")
        .multiple(true)
        .mandatory(true)
        .description("Keying material of a LwM2M client to access a LwM2M server")
        .resource(res(0, "LWM2M Server URI", NONE, T::String).mandatory(true))
        .resource(res(1, "Bootstrap Server", NONE, T::Boolean).mandatory(true))
        .resource(res(2, "Security Mode", NONE, T::Integer).mandatory(true).range_enumeration("0-3"))
        .resource(res(3, "Public Key or Identity", NONE, T::Opaque).mandatory(true))
        .resource(res(4, "Server Public Key or Identity", NONE, T::Opaque).mandatory(true))
        .resource(res(5, "Secret Key", NONE, T::Opaque).mandatory(true))
        .resource(res(10, "Short Server ID", NONE, T::Integer).range_enumeration("1-65535"))
        .resource(res(11, "Client Hold Off Time", NONE, T::Integer).units("s"))
}

#[must_use]
pub fn server() -> ObjectModel {
    ObjectModel::new(SERVER, "LWM2M Server")
        .multiple(true)
        .mandatory(true)
        .description("Data related to a LwM2M server")
        .resource(res(0, "Short Server ID", R, T::Integer).mandatory(true).range_enumeration("1-65535"))
        .resource(res(1, "Lifetime", RW, T::Integer).mandatory(true).units("s"))
        .resource(res(2, "Default Minimum Period", RW, T::Integer).units("s"))
        .resource(res(3, "Default Maximum Period", RW, T::Integer).units("s"))
        .resource(exec(4, "Disable"))
        .resource(res(5, "Disable Timeout", RW, T::Integer).units("s"))
        .resource(res(6, "Notification Storing When Disabled or Offline", RW, T::Boolean).mandatory(true))
        .resource(res(7, "Binding", RW, T::String).mandatory(true))
        .resource(exec(8, "Registration Update Trigger").mandatory(true))
}

#[must_use]
pub fn access_control() -> ObjectModel {
    ObjectModel::new(ACCESS_CONTROL, "LWM2M Access Control")
        .multiple(true)
        .description("Access control rights of LwM2M servers on object instances")
        .resource(res(0, "Object ID", R, T::Integer).mandatory(true).range_enumeration("1-65534"))
        .resource(res(1, "Object Instance ID", R, T::Integer).mandatory(true).range_enumeration("0-65535"))
        .resource(res(2, "ACL", RW, T::Integer).multiple(true).range_enumeration("16-bit"))
        .resource(res(3, "Access Control Owner", RW, T::Integer).mandatory(true).range_enumeration("0-65535"))
}

#[must_use]
pub fn device() -> ObjectModel {
    ObjectModel::new(DEVICE, "Device")
        .mandatory(true)
        .description("Device related information which can be queried by the LwM2M server")
        .resource(res(0, "Manufacturer", R, T::String))
        .resource(res(1, "Model Number", R, T::String))
        .resource(res(2, "Serial Number", R, T::String))
        .resource(res(3, "Firmware Version", R, T::String))
        .resource(exec(4, "Reboot").mandatory(true))
        .resource(exec(5, "Factory Reset"))
        .resource(res(6, "Available Power Sources", R, T::Integer).multiple(true).range_enumeration("0-7"))
        .resource(res(7, "Power Source Voltage", R, T::Integer).multiple(true).units("mV"))
        .resource(res(8, "Power Source Current", R, T::Integer).multiple(true).units("mA"))
        .resource(res(9, "Battery Level", R, T::Integer).range_enumeration("0-100").units("%"))
        .resource(res(10, "Memory Free", R, T::Integer).units("KB"))
        .resource(res(11, "Error Code", R, T::Integer).multiple(true).mandatory(true))
        .resource(exec(12, "Reset Error Code"))
        .resource(res(13, "Current Time", RW, T::Time))
        .resource(res(14, "UTC Offset", RW, T::String))
        .resource(res(15, "Timezone", RW, T::String))
        .resource(res(16, "Supported Binding and Modes", R, T::String).mandatory(true))
}

#[must_use]
pub fn connectivity_monitoring() -> ObjectModel {
    ObjectModel::new(CONNECTIVITY_MONITORING, "Connectivity Monitoring")
        .description("Network parameters of the device")
        .resource(res(0, "Network Bearer", R, T::Integer).mandatory(true))
        .resource(res(1, "Available Network Bearer", R, T::Integer).multiple(true).mandatory(true))
        .resource(res(2, "Radio Signal Strength", R, T::Integer).mandatory(true).units("dBm"))
        .resource(res(3, "Link Quality", R, T::Integer))
        .resource(res(4, "IP Addresses", R, T::String).multiple(true).mandatory(true))
        .resource(res(5, "Router IP Addresses", R, T::String).multiple(true))
        .resource(res(6, "Link Utilization", R, T::Integer).range_enumeration("0-100").units("%"))
        .resource(res(7, "APN", R, T::String).multiple(true))
        .resource(res(8, "Cell ID", R, T::Integer))
        .resource(res(9, "SMNC", R, T::Integer))
        .resource(res(10, "SMCC", R, T::Integer))
}

#[must_use]
pub fn firmware_update() -> ObjectModel {
    ObjectModel::new(FIRMWARE_UPDATE, "Firmware Update")
        .description("Firmware package delivery and update process")
        .resource(res(0, "Package", W, T::Opaque).mandatory(true))
        .resource(res(1, "Package URI", W, T::String).mandatory(true))
        .resource(exec(2, "Update").mandatory(true))
        .resource(res(3, "State", R, T::Integer).mandatory(true).range_enumeration("0-3"))
        .resource(res(4, "Update Supported Objects", RW, T::Boolean))
        .resource(res(5, "Update Result", R, T::Integer).mandatory(true).range_enumeration("0-8"))
}

#[must_use]
pub fn location() -> ObjectModel {
    ObjectModel::new(LOCATION, "Location")
        .description("Location information of the device")
        .resource(res(0, "Latitude", R, T::String).mandatory(true).units("Deg"))
        .resource(res(1, "Longitude", R, T::String).mandatory(true).units("Deg"))
        .resource(res(2, "Altitude", R, T::String).units("m"))
        .resource(res(3, "Uncertainty", R, T::String).units("m"))
        .resource(res(4, "Velocity", R, T::Opaque))
        .resource(res(5, "Timestamp", R, T::Time).mandatory(true))
}

#[must_use]
pub fn connectivity_statistics() -> ObjectModel {
    ObjectModel::new(CONNECTIVITY_STATISTICS, "Connectivity Statistics")
        .description("Statistics collected while a collection period is active")
        .resource(res(0, "SMS Tx Counter", R, T::Integer))
        .resource(res(1, "SMS Rx Counter", R, T::Integer))
        .resource(res(2, "Tx Data", R, T::Integer).units("Kilo-Bytes"))
        .resource(res(3, "Rx Data", R, T::Integer).units("Kilo-Bytes"))
        .resource(res(4, "Max Message Size", R, T::Integer).units("Byte"))
        .resource(res(5, "Average Message Size", R, T::Integer).units("Byte"))
        .resource(exec(6, "StartOrReset").mandatory(true))
}
