use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable. Keeps probe events at
/// `info` and the MySQL driver stack at `warn`, so a failing readiness check
/// logs once per request instead of once per pool retry.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

fn probe_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON stdout subscriber for a probes process.
/// Repeated calls are no-ops.
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(probe_filter(directives.as_deref()))
        .with(fmt::layer().json().with_current_span(false))
        .try_init();
}
