use dnsdiff_domain::Config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so `dnsdiff lookup` output stays pipeable.
///
/// `RUST_LOG` takes precedence over `[logging] level`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
