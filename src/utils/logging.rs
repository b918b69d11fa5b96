use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber that honors `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
