use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level`; without either only this crate's `info`
/// events are shown. Calling it twice is a no-op.
pub fn enable_logging(level: Option<LevelFilter>) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| {
            let level = level.unwrap_or(LevelFilter::INFO);
            EnvFilter::new(format!(
                "{}={level}",
                env!("CARGO_PKG_NAME").replace('-', "_")
            ))
        });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
