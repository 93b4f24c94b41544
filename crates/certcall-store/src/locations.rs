//! Backing locations for each trust scope.

use certcall_core::TrustScope;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the user store directory
pub const USER_STORE_ENV: &str = "CERTCALL_USER_STORE";

/// Environment variable overriding the machine store directory
pub const MACHINE_STORE_ENV: &str = "CERTCALL_MACHINE_STORE";

/// Default machine store directory
pub const DEFAULT_MACHINE_STORE: &str = "/etc/certcall/my";

/// Directory backing each trust scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLocations {
    /// Directory backing [`TrustScope::User`]
    pub user: PathBuf,
    /// Directory backing [`TrustScope::Machine`]
    pub machine: PathBuf,
}

impl Default for StoreLocations {
    fn default() -> Self {
        let user = ProjectDirs::from("io", "certcall", "certcall").map_or_else(
            || PathBuf::from("certcall").join("my"),
            |dirs| dirs.config_dir().join("my"),
        );

        Self {
            user,
            machine: PathBuf::from(DEFAULT_MACHINE_STORE),
        }
    }
}

impl StoreLocations {
    /// Use explicit directories for both scopes
    pub fn new(user: impl Into<PathBuf>, machine: impl Into<PathBuf>) -> Self {
        Self {
            user: user.into(),
            machine: machine.into(),
        }
    }

    /// Defaults, overridden by `CERTCALL_USER_STORE` / `CERTCALL_MACHINE_STORE`
    #[must_use]
    pub fn from_env() -> Self {
        let mut locations = Self::default();
        if let Some(user) = std::env::var_os(USER_STORE_ENV).filter(|v| !v.is_empty()) {
            locations.user = PathBuf::from(user);
        }
        if let Some(machine) = std::env::var_os(MACHINE_STORE_ENV).filter(|v| !v.is_empty()) {
            locations.machine = PathBuf::from(machine);
        }
        locations
    }

    /// Directory backing `scope`
    #[must_use]
    pub fn path(&self, scope: TrustScope) -> &Path {
        match scope {
            TrustScope::User => &self.user,
            TrustScope::Machine => &self.machine,
        }
    }
}
