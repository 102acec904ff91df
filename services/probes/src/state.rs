use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::infra::db::MySqlDatastore;
use crate::usecase::readiness::{CheckReadinessUseCase, READINESS_TIMEOUT};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseConfig,
    pub readiness_timeout: Duration,
}

impl AppState {
    pub fn new(database: DatabaseConfig) -> Self {
        Self {
            database,
            readiness_timeout: READINESS_TIMEOUT,
        }
    }

    pub fn datastore(&self) -> MySqlDatastore {
        MySqlDatastore {
            config: self.database.clone(),
            connect_timeout: self.readiness_timeout,
        }
    }

    pub fn readiness_usecase(&self) -> CheckReadinessUseCase<MySqlDatastore> {
        CheckReadinessUseCase {
            datastore: self.datastore(),
            timeout: self.readiness_timeout,
        }
    }
}
