use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; defaults to `info` otherwise.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
