use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global `tracing` subscriber. Output goes to stderr so stdout
/// only carries the completion line; `RUST_LOG` overrides the `warn` default.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );
        // A subscriber may already be installed (e.g. by a test harness).
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
