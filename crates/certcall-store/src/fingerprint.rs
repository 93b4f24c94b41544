//! Certificate fingerprints via `ring::digest`.

use ring::digest::{digest, SHA1_FOR_LEGACY_USE_ONLY, SHA256};

/// SHA-1 thumbprint of DER bytes, upper-case hex.
///
/// SHA-1 here is an identifier, not a security boundary: it is the
/// conventional certificate-store thumbprint.
#[must_use]
pub fn thumbprint(der: &[u8]) -> String {
    hex::encode_upper(digest(&SHA1_FOR_LEGACY_USE_ONLY, der).as_ref())
}

/// SHA-256 fingerprint of DER bytes, upper-case hex.
#[must_use]
pub fn sha256_fingerprint(der: &[u8]) -> String {
    hex::encode_upper(digest(&SHA256, der).as_ref())
}
