use std::fmt;

/// Probes service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ProbesConfig {
    /// TCP port for the HTTP server (default 8080). Env var: `PROBES_PORT`.
    pub probes_port: u16,
    /// Datastore checked by the readiness probe.
    pub database: DatabaseConfig,
}

/// Connection parameters for the readiness datastore.
///
/// Unset variables are kept as empty strings and handed to the connection
/// attempt as-is; there are no defaults.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `DB_HOST`, optionally with a `:port` suffix.
    pub host: String,
    /// `DB_USER`.
    pub user: String,
    /// `DB_PASSWORD`.
    pub password: String,
    /// `DB_NAME`.
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

impl ProbesConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            probes_port: var("PROBES_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            database: DatabaseConfig {
                host: var("DB_HOST").unwrap_or_default(),
                user: var("DB_USER").unwrap_or_default(),
                password: var("DB_PASSWORD").unwrap_or_default(),
                name: var("DB_NAME").unwrap_or_default(),
            },
        }
    }
}
