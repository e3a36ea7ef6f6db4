//! Environment-driven application configuration.

use crate::error::config::ConfigError;

/// Runtime configuration read from environment variables.
pub struct Config {
    /// Connection string passed to SeaORM, e.g. `postgres://...` or `sqlite::memory:`.
    pub database_url: String,
    /// Number of users the seeder creates on startup.
    pub seed_users: usize,
}

impl Config {
    /// Build a [`Config`] from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `SEED_USERS` is not an unsigned integer that fits in `usize`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let seed_users = match lookup("SEED_USERS") {
            Some(value) => {
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "SEED_USERS".to_string(),
                        reason: e.to_string(),
                    })?
            }
            None => 0,
        };

        Ok(Self {
            database_url,
            seed_users,
        })
    }
}
