use clap::Parser;
use lwm2m_model::ObjectId;
use lwm2m_model::config::ClientConfig;
use std::path::PathBuf;

/// Command-line arguments of the objects bootstrap.
#[derive(Debug, Parser)]
#[command(name = "lwm2m-objects")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Builds the LwM2M object enablers of a client from its configuration")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML), overlaid by `LWM2M__*` variables
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Extra object ids to enable, in order
    #[arg(short = 'o', long = "object", value_name = "ID", value_delimiter = ',')]
    pub objects: Vec<ObjectId>,
    /// Skip the mandatory objects
    #[arg(long)]
    pub no_mandatory: bool,
    /// Emit logs as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Overrides the loaded configuration with the flags given on the command line.
    pub fn apply(&self, config: &mut ClientConfig) {
        config.objects.enable.extend_from_slice(&self.objects);
        if self.no_mandatory {
            config.objects.mandatory = false;
        }
        if self.json {
            config.logging.json = true;
        }
    }
}
