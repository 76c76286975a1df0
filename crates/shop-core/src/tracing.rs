use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// JSON events to stdout, filtered by `RUST_LOG` (falling back to
/// [`DEFAULT_FILTER`]). Returns `false` if a global subscriber was already set.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(filter_from(std::env::var("RUST_LOG").ok().as_deref()))
        .with(fmt::layer().json().with_current_span(false))
        .try_init()
        .is_ok()
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
