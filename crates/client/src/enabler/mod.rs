//! Runtime containers for object instances.

mod instance;
mod object;
mod simple;

pub use instance::{InstanceEnabler, SharedInstance};
pub use object::{ObjectEnabler, ObjectListener};
pub use simple::SimpleInstanceEnabler;
