//! Configuration management.

use anyhow::Result;
use certcall::{StoreLocations, TlsFloor};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "CERTCALL_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory backing the user scope.
    pub user_store: Option<PathBuf>,

    /// Directory backing the machine scope.
    pub machine_store: Option<PathBuf>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Minimum TLS version ("1.2" or "1.3").
    pub min_tls: Option<TlsFloor>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("io", "certcall", "certcall")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Store locations from this file layered over the environment defaults.
    #[must_use]
    pub fn store_locations(&self) -> StoreLocations {
        let mut locations = StoreLocations::from_env();
        if std::env::var_os(certcall::locations::USER_STORE_ENV).is_none() {
            if let Some(user) = &self.user_store {
                locations.user.clone_from(user);
            }
        }
        if std::env::var_os(certcall::locations::MACHINE_STORE_ENV).is_none() {
            if let Some(machine) = &self.machine_store {
                locations.machine.clone_from(machine);
            }
        }
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_toml() {
        let config = Config {
            user_store: Some(PathBuf::from("/srv/certs/user")),
            machine_store: None,
            timeout_secs: Some(30),
            min_tls: Some(TlsFloor::Tls13),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("min_tls = \"1.3\""));
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(toml::from_str::<Config>("").unwrap(), Config::default());
    }
}
