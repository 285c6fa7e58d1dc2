//! # LwM2M Models
//!
//! This crate contains the pure object-model types the client consumes: object and
//! resource definitions, the immutable [`LwM2mModel`] registry and the client
//! configuration. Keep it lean: no I/O, no schema parsing, no runtime behavior.

pub mod catalog;
pub mod config;
mod error;
mod object;
mod operations;
mod registry;

pub use error::ModelError;
pub use object::{ObjectModel, ResourceModel, ResourceType};
pub use operations::Operations;
pub use registry::LwM2mModel;

/// Identifier of an object model (e.g. `3` for Device).
pub type ObjectId = u16;
/// Identifier of an object instance within its object.
pub type InstanceId = u16;
/// Identifier of a resource within an object model.
pub type ResourceId = u16;
