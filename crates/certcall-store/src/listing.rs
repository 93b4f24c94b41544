//! Diagnostics listing of every visible certificate.

use certcall_core::{CertificateSummary, Result, TrustScope};
use serde::Serialize;
use std::fmt;

use crate::store::{list_all, CertificateStore};

/// Timestamp format used in the text report.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Certificates found in one scope.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeListing {
    /// Scope listed
    pub scope: TrustScope,
    /// Description of the scope's backing location
    pub location: String,
    /// Certificates in the scope
    pub certificates: Vec<CertificateSummary>,
}

/// Certificates across all scopes, in search order.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateReport {
    /// Total across all scopes
    pub total: usize,
    /// Per-scope listings
    pub scopes: Vec<ScopeListing>,
}

/// List every certificate in every scope.
///
/// An empty scope is reported as such. Failure to open any scope fails
/// the whole listing.
pub fn list_certificates<S>(store: &S) -> Result<CertificateReport>
where
    S: CertificateStore + ?Sized,
{
    let mut scopes = Vec::with_capacity(TrustScope::SEARCH_ORDER.len());
    for scope in TrustScope::SEARCH_ORDER {
        let certificates = list_all(store, scope)?
            .iter()
            .map(certcall_core::ResolvedCertificate::summary)
            .collect();
        scopes.push(ScopeListing {
            scope,
            location: store.describe(scope),
            certificates,
        });
    }

    Ok(CertificateReport {
        total: scopes.iter().map(|s| s.certificates.len()).sum(),
        scopes,
    })
}

impl fmt::Display for CertificateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total certificates found: {}", self.total)?;
        writeln!(f)?;

        for listing in &self.scopes {
            writeln!(f, "=== {} ===", listing.location)?;
            if listing.certificates.is_empty() {
                writeln!(f, "No certificates found")?;
                writeln!(f)?;
                continue;
            }

            writeln!(f, "Found {} certificate(s):", listing.certificates.len())?;
            writeln!(f)?;
            for cert in &listing.certificates {
                writeln!(f, "Subject: {}", cert.subject)?;
                writeln!(f, "Thumbprint: {}", cert.thumbprint)?;
                writeln!(f, "Issuer: {}", cert.issuer)?;
                writeln!(f, "Valid From: {}", cert.not_before.format(TIME_FORMAT))?;
                writeln!(f, "Valid To: {}", cert.not_after.format(TIME_FORMAT))?;
                writeln!(f, "Has Private Key: {}", cert.has_private_key)?;
                writeln!(f, "---")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
