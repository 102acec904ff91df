use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::anyhow;

use vigil_probes::config::DatabaseConfig;
use vigil_probes::domain::repository::Datastore;
use vigil_probes::error::ReadinessError;
use vigil_probes::state::AppState;

/// Short bound so refused/unresolvable hosts fail fast in tests.
pub const TEST_TIMEOUT: Duration = Duration::from_millis(500);

// ── MockDatastore ────────────────────────────────────────────────────────────

pub struct MockDatastore {
    pub reachable: bool,
    pub delay: Duration,
    pub calls: Arc<AtomicUsize>,
}

impl MockDatastore {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::reachable()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::reachable()
        }
    }

    /// Returns a shared handle to the call counter for post-execution inspection.
    pub fn calls_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Datastore for MockDatastore {
    async fn check(&self) -> Result<(), ReadinessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.reachable {
            Ok(())
        } else {
            Err(anyhow!("Access denied for user 'app'@'10.0.0.1'").into())
        }
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn database(host: &str) -> DatabaseConfig {
    DatabaseConfig {
        host: host.to_owned(),
        user: "app".to_owned(),
        password: "secret".to_owned(),
        name: "app".to_owned(),
    }
}

pub fn test_state(database: DatabaseConfig) -> AppState {
    AppState {
        database,
        readiness_timeout: TEST_TIMEOUT,
    }
}
