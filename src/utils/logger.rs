use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber
///
/// The level is read from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`) and defaults to `INFO`.
/// Calling it more than once is harmless.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL")
            .ok()
            .and_then(|raw| raw.to_uppercase().parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}
