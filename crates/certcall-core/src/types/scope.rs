use serde::{Deserialize, Serialize};
use std::fmt;

/// A partition of the certificate store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustScope {
    /// Certificates owned by the calling account
    User,
    /// Certificates shared by every account on the machine
    Machine,
}

impl TrustScope {
    /// Search order: the calling account's own store wins over the shared one.
    pub const SEARCH_ORDER: [Self; 2] = [Self::User, Self::Machine];

    /// Short lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Machine => "machine",
        }
    }
}

impl fmt::Display for TrustScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
