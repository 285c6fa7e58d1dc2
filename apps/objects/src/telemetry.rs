use anyhow::{Context, Result};
use lwm2m_model::config::LoggingConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Installs the global console subscriber.
///
/// # Errors
/// Fails on an invalid level or filter, or if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let console = if config.json {
        layer().json().boxed()
    } else {
        layer().compact().with_ansi(true).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init()
        .context("Failed to install the tracing subscriber")
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let level: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let builder = EnvFilter::builder().with_default_directive(level.into());
    config.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| builder.parse(filter).with_context(|| format!("Invalid env filter '{filter}'")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str, filter: Option<&str>) -> LoggingConfig {
        LoggingConfig { level: level.to_owned(), json: false, filter: filter.map(str::to_owned) }
    }

    #[test]
    fn explicit_filter_is_parsed() {
        let filter = env_filter(&logging("warn", Some("lwm2m_client=trace"))).expect("filter");
        assert!(filter.to_string().contains("lwm2m_client=trace"));
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err = env_filter(&logging("loud", None)).unwrap_err();
        assert!(err.to_string().contains("Invalid log level 'loud'"));
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err = env_filter(&logging("info", Some("lwm2m_client=loud"))).unwrap_err();
        assert!(err.to_string().contains("Invalid env filter"));
    }
}
