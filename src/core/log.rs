//! Tracing setup for the binary.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = env!("CARGO_PKG_NAME");

fn app_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    }
}

/// Directive used when `RUST_LOG` is unset: our own events only.
fn default_directive(verbose: bool) -> String {
    format!("{APP_TARGET}={}", app_level(verbose))
}

/// Installs the global subscriber. Events go to stderr; stdout is reserved
/// for the report.
pub fn init_logging(verbose: bool) {
    let app_filter = Targets::new().with_target(APP_TARGET, app_level(verbose));
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter)
        .init();
}
