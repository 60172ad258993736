mod models;

pub use models::{Config, DOMAIN_VAR, TOKEN_VAR, ZONE_VAR};

use crate::error::{DdnsError, Result};
use log::debug;
use std::{env, path::Path};

pub const DEFAULT_ENV_FILE: &str = ".env";

impl Config {
    /// Loads `path` into the process environment, then validates it.
    ///
    /// Variables already present in the environment win over the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|source| DdnsError::EnvFile {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Loaded environment from {}", path.display());

        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. The first absent or empty
    /// variable is reported, in the order token, zone, domain.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(DdnsError::MissingVar(key))
        };

        Ok(Self {
            api_token: require(TOKEN_VAR)?,
            zone_id: require(ZONE_VAR)?,
            domain: require(DOMAIN_VAR)?,
        })
    }
}
