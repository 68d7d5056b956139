use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the workspace crates.
///
/// When `quiet` is true, only error-level events pass; otherwise info-level
/// and above. `RUST_LOG` still overrides this per the usual env-filter
/// precedence, so operators can turn on `glance=debug` without a code
/// change.
pub fn log_directive(quiet: bool) -> &'static str {
    if quiet { "glance=error" } else { "glance=info" }
}

/// Initialize logging with optional quiet mode.
///
/// Installs a JSON layer writing to stderr. Call once per process; a second
/// call panics because the global subscriber is already set.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env().add_directive(
                log_directive(quiet)
                    .parse()
                    .expect("Invalid log directive"),
            ),
        )
        .init();
}
