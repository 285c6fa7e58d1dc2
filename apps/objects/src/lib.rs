//! # LwM2M Objects
//!
//! Bootstrap of the object enablers of an LwM2M client: configuration loading,
//! console logging and enabler creation over the core object catalog.

mod args;
mod bootstrap;
mod settings;
pub mod telemetry;

pub use args::Cli;
pub use bootstrap::bootstrap;
pub use settings::{ENV_PREFIX, environment, load_config, load_config_from};
