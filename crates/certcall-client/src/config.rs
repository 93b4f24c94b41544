//! Transport configuration.

use certcall_core::CertcallError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lowest TLS version the transport will negotiate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TlsFloor {
    /// TLS 1.2 or 1.3
    #[default]
    #[serde(rename = "1.2")]
    Tls12,
    /// TLS 1.3 only
    #[serde(rename = "1.3")]
    Tls13,
}

impl TlsFloor {
    pub(crate) const fn as_reqwest(self) -> reqwest::tls::Version {
        match self {
            Self::Tls12 => reqwest::tls::Version::TLS_1_2,
            Self::Tls13 => reqwest::tls::Version::TLS_1_3,
        }
    }
}

impl std::fmt::Display for TlsFloor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tls12 => f.write_str("1.2"),
            Self::Tls13 => f.write_str("1.3"),
        }
    }
}

impl std::str::FromStr for TlsFloor {
    type Err = CertcallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().trim_start_matches("tls").trim() {
            "1.2" | "12" => Ok(Self::Tls12),
            "1.3" | "13" => Ok(Self::Tls13),
            _ => Err(CertcallError::Config(format!(
                "unsupported minimum TLS version '{s}'; valid: 1.2, 1.3"
            ))),
        }
    }
}

/// Settings applied to the transport built for every call.
///
/// Passed explicitly to each request rather than set process-wide, so
/// concurrent calls never observe each other's settings.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Minimum negotiated TLS version
    pub min_tls_version: TlsFloor,

    /// Total request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,

    /// Connect timeout; `None` keeps the transport default
    pub connect_timeout: Option<Duration>,

    /// User-Agent header
    pub user_agent: String,

    /// Extra trust anchors (DER) for server verification, on top of the
    /// built-in roots
    pub root_certificates: Vec<Vec<u8>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_tls_version: TlsFloor::Tls12,
            timeout: None,
            connect_timeout: None,
            user_agent: format!("certcall/{}", env!("CARGO_PKG_VERSION")),
            root_certificates: Vec::new(),
        }
    }

    /// Set the minimum TLS version
    #[must_use]
    pub const fn min_tls_version(mut self, floor: TlsFloor) -> Self {
        self.min_tls_version = floor;
        self
    }

    /// Set the total request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Also trust servers chaining to `der`, e.g. a partner's private CA
    #[must_use]
    pub fn add_root_certificate(mut self, der: impl Into<Vec<u8>>) -> Self {
        self.root_certificates.push(der.into());
        self
    }
}
