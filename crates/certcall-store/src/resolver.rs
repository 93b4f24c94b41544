//! Certificate resolution across trust scopes.

use certcall_core::{CertcallError, CertificateIdentifier, ResolvedCertificate, Result, TrustScope};
use tracing::debug;

use crate::store::{find, CertificateStore};

/// Find the certificate named by `raw_identifier`.
///
/// Scopes are searched in [`TrustScope::SEARCH_ORDER`] and the first match
/// wins. Each scope is opened and released within this call.
pub fn resolve<S>(store: &S, raw_identifier: &str) -> Result<ResolvedCertificate>
where
    S: CertificateStore + ?Sized,
{
    let id = CertificateIdentifier::new(raw_identifier);

    for scope in TrustScope::SEARCH_ORDER {
        if let Some(cert) = find(store, scope, &id)? {
            debug!(
                %scope,
                thumbprint = %cert.thumbprint,
                subject = %cert.subject,
                "certificate resolved"
            );
            return Ok(cert);
        }
    }

    Err(CertcallError::CertificateNotFound {
        thumbprint: raw_identifier.to_string(),
        searched: TrustScope::SEARCH_ORDER
            .iter()
            .map(|scope| store.describe(*scope))
            .collect(),
    })
}
