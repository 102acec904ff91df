/// Failure of the readiness dependency check.
///
/// Every cause (refused connection, bad credentials, unknown database,
/// unusable configuration, timeout) collapses into the single
/// `DependencyUnavailable` kind. The inner error is kept for logs only and
/// never reaches the response body.
#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error("dependency unavailable")]
    DependencyUnavailable(#[from] anyhow::Error),
}

impl ReadinessError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DependencyUnavailable(_) => "DEPENDENCY_UNAVAILABLE",
        }
    }
}
