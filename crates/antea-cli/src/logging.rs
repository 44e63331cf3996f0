use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins; otherwise `-v` flags pick the level, then the config
/// file's `log_level`, then `warn`.
pub fn init_logging(verbosity: u8, configured: Option<&str>) {
    let filter = match (verbosity, configured) {
        (0, Some(level)) => level,
        (0, None) => "warn",
        (1, _) => "info",
        _ => "debug",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
