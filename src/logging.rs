use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only status lines. `RUST_LOG`
/// overrides the default `warn` filter.
pub(crate) fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}
