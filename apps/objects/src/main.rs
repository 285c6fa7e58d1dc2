use anyhow::Context;
use clap::Parser;
use lwm2m_objects::{Cli, bootstrap, load_config, telemetry};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    cli.apply(&mut cfg);

    telemetry::init(&cfg.logging)?;
    info!(endpoint = %cfg.endpoint.name, "Bootstrapping LwM2M objects");

    let enablers = bootstrap(&cfg)?;
    info!(count = enablers.len(), "Object enablers ready");

    Ok(())
}
