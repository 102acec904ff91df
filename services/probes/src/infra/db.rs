use std::time::Duration;

use anyhow::{Context as _, anyhow, bail};
use sea_orm::{ConnectOptions, Database};
use url::Url;

use crate::config::DatabaseConfig;
use crate::domain::repository::Datastore;
use crate::error::ReadinessError;

// ── MySQL datastore ──────────────────────────────────────────────────────────

/// Readiness datastore backed by a fresh, single-connection MySQL pool per check.
#[derive(Clone)]
pub struct MySqlDatastore {
    pub config: DatabaseConfig,
    /// Bounds both establishing the connection and acquiring it from the pool.
    pub connect_timeout: Duration,
}

impl Datastore for MySqlDatastore {
    async fn check(&self) -> Result<(), ReadinessError> {
        let url = connection_url(&self.config)?;

        let mut options = ConnectOptions::new(url);
        options
            .max_connections(1)
            .min_connections(0)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .context("connect to datastore")?;
        let ping = db.ping().await.context("ping datastore");

        // The pool is per-check; release it whatever the ping said.
        if let Err(e) = db.close().await {
            tracing::debug!(error = %e, "failed to close readiness connection");
        }
        ping?;
        Ok(())
    }
}

/// Build a `mysql://` URL from the four connection parameters, percent-encoding
/// credentials. `host` may include a `:port` suffix; a bare IPv6 address is
/// taken as the whole host.
pub fn connection_url(config: &DatabaseConfig) -> anyhow::Result<String> {
    if config.host.is_empty() {
        bail!("DB_HOST is not set");
    }
    let authority = if config.host.matches(':').count() > 1 && !config.host.starts_with('[') {
        format!("[{}]", config.host)
    } else {
        config.host.clone()
    };
    let mut url = Url::parse(&format!("mysql://{authority}"))
        .with_context(|| format!("invalid DB_HOST {:?}", config.host))?;
    let host_only = url.host_str().is_some_and(|h| !h.is_empty())
        && url.username().is_empty()
        && url.password().is_none()
        && url.path().is_empty()
        && url.query().is_none()
        && url.fragment().is_none();
    if !host_only {
        bail!("invalid DB_HOST {:?}", config.host);
    }

    url.set_username(&config.user)
        .map_err(|()| anyhow!("invalid DB_USER"))?;
    if !config.password.is_empty() {
        url.set_password(Some(&config.password))
            .map_err(|()| anyhow!("invalid DB_PASSWORD"))?;
    }
    url.set_path(&config.name);
    Ok(url.into())
}
