use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
