use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global fmt subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_logging(default_level: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", default_level)));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    });
}
