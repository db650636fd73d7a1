use tracing_subscriber::{filter::*, fmt::*, prelude::*};

/// Initialize tracing with a default of DEBUG for our crate.
///
/// Can be overridden via the `RUST_LOG` environment variable.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("tower_http_etag=debug".parse().expect("directive"))
        .add_directive("tower_http=debug".parse().expect("directive"));

    tracing_subscriber::registry()
        .with(layer().with_timer(time::LocalTime::rfc_3339()))
        .with(filter)
        .init();
}
