use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
///
/// Library events (method fallback, per-day debug, raw solar-time traces) all live under
/// the `praytimes` target; at `-vv` and above the per-day solver traces stay behind until
/// `-vvv` asks for them.
fn filter_directive(verbosity: u8) -> String {
    match verbosity {
        0 => "praytimes=warn".to_string(),
        1 => "praytimes=info".to_string(),
        2 => "praytimes=debug,praytimes::solver=info".to_string(),
        _ => "praytimes=trace".to_string(),
    }
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` env var overrides the CLI flag if set. Targets are shown from `-vv` on.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}
