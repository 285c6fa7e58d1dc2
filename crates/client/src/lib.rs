//! # LwM2M Client Objects
//!
//! Turns a registry of LwM2M object models into the object enablers a client
//! runtime exposes to its servers.
//!
//! ## Overview
//!
//! Bootstrap code registers, per object id, either a behavior type (a factory for
//! fresh instances) or a ready-made instance on an [`ObjectsInitializerBuilder`],
//! freezes it with [`ObjectsInitializerBuilder::build`] and asks the resulting
//! [`ObjectsInitializer`] for enablers:
//!
//! * [`ObjectsInitializer::create_mandatory`] builds every mandatory object.
//! * [`ObjectsInitializer::create`] builds the requested objects in the given order.
//!
//! Single-instance objects come with their instance `0`; multiple-instance objects
//! start empty. Objects without a registration use [`SimpleInstanceEnabler`].
//!
//! # Example
//!
//! ```rust
//! use lwm2m_client::{InitializerError, ObjectsInitializer, SimpleInstanceEnabler};
//! use lwm2m_client::node::{LwM2mResource, Value};
//! use lwm2m_model::LwM2mModel;
//!
//! # fn main() -> Result<(), InitializerError> {
//! let mut device = SimpleInstanceEnabler::new();
//! device.set_resource(LwM2mResource::single(0, Value::String("ACME".into())));
//!
//! let mut builder = ObjectsInitializer::builder(LwM2mModel::core());
//! builder.register_instance(3, device)?;
//! let initializer = builder.build();
//!
//! let enablers = initializer.create_mandatory()?;
//! let ids: Vec<u16> = enablers.iter().map(|e| e.id()).collect();
//! assert_eq!(ids, vec![0, 1, 3]);
//! # Ok(())
//! # }
//! ```

mod behavior;
mod enabler;
mod error;
mod initializer;
pub mod node;

pub use behavior::BehaviorType;
pub use enabler::{
    InstanceEnabler, ObjectEnabler, ObjectListener, SharedInstance, SimpleInstanceEnabler,
};
pub use error::{BoxError, InitializerError, InitializerErrorExt, Result};
pub use initializer::{
    ObjectsInitializer, ObjectsInitializerBuilder, ObjectsInitializerInner, SINGLE_INSTANCE_ID,
};

pub mod prelude {
    pub use crate::behavior::BehaviorType;
    pub use crate::enabler::{InstanceEnabler, ObjectEnabler, SimpleInstanceEnabler};
    pub use crate::error::{InitializerError, InitializerErrorExt};
    pub use crate::initializer::{ObjectsInitializer, ObjectsInitializerBuilder};
    pub use crate::node::{LwM2mResource, ReadResponse, ResponseCode, StatusResponse, Value};
}
