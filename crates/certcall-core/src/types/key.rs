use std::fmt;

/// Why a certificate's private key could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAccessFailure {
    /// No private key is associated with the certificate
    NoKeyPresent,
    /// A key is associated but could not be retrieved
    KeyUnretrievable,
    /// The calling account lacks permission to read the key
    PermissionDenied,
    /// Anything else that went wrong while probing the key
    UnexpectedError,
}

/// A classified private key access failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAccessError {
    /// Failure classification
    pub failure: KeyAccessFailure,
    /// Human-readable explanation, including remediation where known
    pub detail: String,
}

impl KeyAccessError {
    /// Create a new key access error
    pub fn new(failure: KeyAccessFailure, detail: impl Into<String>) -> Self {
        Self {
            failure,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for KeyAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

impl std::error::Error for KeyAccessError {}

/// Private key algorithm, as discovered by probing the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    /// RSA
    Rsa,
    /// ECDSA over P-256
    EcdsaP256,
    /// ECDSA over P-384
    EcdsaP384,
    /// Ed25519
    Ed25519,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rsa => write!(f, "RSA"),
            Self::EcdsaP256 => write!(f, "ECDSA P-256"),
            Self::EcdsaP384 => write!(f, "ECDSA P-384"),
            Self::Ed25519 => write!(f, "Ed25519"),
        }
    }
}

/// A private key proven usable by the calling process.
#[derive(Clone)]
pub struct UsableKey {
    /// Key algorithm
    pub algorithm: KeyAlgorithm,
    /// Key size in bits
    pub bits: usize,
    /// PEM encoding of the key, ready to hand to the transport
    pub pem: String,
}

impl fmt::Debug for UsableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsableKey")
            .field("algorithm", &self.algorithm)
            .field("bits", &self.bits)
            .finish_non_exhaustive()
    }
}
