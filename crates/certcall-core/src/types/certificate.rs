//! Resolved certificate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{CertificateIdentifier, TrustScope};

/// Where a certificate's private key lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyLocation {
    /// Key block stored in the same PEM file as the certificate
    Embedded {
        /// File holding both certificate and key
        path: PathBuf,
        /// PEM block label, e.g. `PRIVATE KEY`
        label: String,
        /// Raw key block contents (DER)
        der: Vec<u8>,
    },
    /// Key stored in a sibling file next to the certificate
    File(PathBuf),
}

impl KeyLocation {
    /// Path of the file holding the key
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Embedded { path, .. } | Self::File(path) => path,
        }
    }
}

/// A certificate found in a store scope.
///
/// Produced fresh for each lookup; stores may change between calls so
/// these are never cached.
#[derive(Debug, Clone)]
pub struct ResolvedCertificate {
    /// Scope the certificate was found in
    pub scope: TrustScope,
    /// File the certificate was read from
    pub source: PathBuf,
    /// Subject distinguished name
    pub subject: String,
    /// Issuer distinguished name
    pub issuer: String,
    /// SHA-1 thumbprint of the DER encoding (upper-case hex)
    pub thumbprint: String,
    /// SHA-256 fingerprint of the DER encoding (upper-case hex)
    pub sha256_fingerprint: String,
    /// Not valid before
    pub not_before: DateTime<Utc>,
    /// Not valid after
    pub not_after: DateTime<Utc>,
    /// DER encoding of the leaf certificate
    pub der: Vec<u8>,
    /// Raw subject public key bits, for matching against the private key
    pub public_key: Vec<u8>,
    /// Associated private key, if any
    pub private_key: Option<KeyLocation>,
}

impl ResolvedCertificate {
    /// Whether metadata associates a private key with this certificate
    #[must_use]
    pub const fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Whether `id` names this certificate (SHA-1 or SHA-256)
    #[must_use]
    pub fn is_identified_by(&self, id: &CertificateIdentifier) -> bool {
        id.matches(&self.thumbprint) || id.matches(&self.sha256_fingerprint)
    }

    /// Observable attributes, for listings
    #[must_use]
    pub fn summary(&self) -> CertificateSummary {
        CertificateSummary {
            scope: self.scope,
            subject: self.subject.clone(),
            issuer: self.issuer.clone(),
            thumbprint: self.thumbprint.clone(),
            not_before: self.not_before,
            not_after: self.not_after,
            has_private_key: self.has_private_key(),
            source: self.source.display().to_string(),
        }
    }
}

/// Serializable view of a certificate for diagnostics output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSummary {
    /// Scope the certificate was found in
    pub scope: TrustScope,
    /// Subject distinguished name
    pub subject: String,
    /// Issuer distinguished name
    pub issuer: String,
    /// SHA-1 thumbprint
    pub thumbprint: String,
    /// Not valid before
    pub not_before: DateTime<Utc>,
    /// Not valid after
    pub not_after: DateTime<Utc>,
    /// Whether a private key is associated
    pub has_private_key: bool,
    /// File the certificate was read from
    pub source: String,
}
