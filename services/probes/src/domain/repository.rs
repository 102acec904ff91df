#![allow(async_fn_in_trait)]

use crate::error::ReadinessError;

/// Port for the single datastore the readiness probe depends on.
pub trait Datastore: Send + Sync {
    /// Open a connection, confirm it answers, and release it again.
    async fn check(&self) -> Result<(), ReadinessError>;
}
