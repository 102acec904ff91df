use std::time::Duration;

use anyhow::anyhow;
use vigil_core::health::HealthStatus;

use crate::domain::repository::Datastore;
use crate::error::ReadinessError;

/// Upper bound on a single readiness check.
pub const READINESS_TIMEOUT: Duration = Duration::from_secs(3);

// ── CheckReadiness ───────────────────────────────────────────────────────────

pub struct CheckReadinessUseCase<D: Datastore> {
    pub datastore: D,
    pub timeout: Duration,
}

impl<D: Datastore> CheckReadinessUseCase<D> {
    /// Run the dependency check once, bounded by `timeout`.
    pub async fn execute(&self) -> Result<(), ReadinessError> {
        match tokio::time::timeout(self.timeout, self.datastore.check()).await {
            Ok(result) => result,
            Err(_) => Err(anyhow!("datastore check timed out after {:?}", self.timeout).into()),
        }
    }

    /// Run the check and fold the outcome into a probe status.
    pub async fn status(&self) -> HealthStatus {
        match self.execute().await {
            Ok(()) => HealthStatus::Ok,
            Err(e) => {
                let ReadinessError::DependencyUnavailable(ref cause) = e;
                tracing::warn!(
                    error = %format!("{cause:#}"),
                    kind = e.kind(),
                    "readiness check failed"
                );
                HealthStatus::NotReady
            }
        }
    }
}
