use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`, which
/// wins over `[log] level` from the config.
pub fn init(cli_level: Option<LogLevel>, config_level: &str) {
    let fallback = cli_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config_level.to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests driving `run` twice) keeps the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
