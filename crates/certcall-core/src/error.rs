use thiserror::Error;

use crate::types::{KeyAccessError, TrustScope, SUPPORTED_METHODS};

/// Result type alias for certcall operations
pub type Result<T> = std::result::Result<T, CertcallError>;

/// Errors that can occur while resolving a certificate or executing a request.
///
/// A non-success HTTP status is not an error: it is returned as
/// [`ExecutionOutcome::RemoteError`](crate::ExecutionOutcome::RemoteError).
#[derive(Error, Debug)]
pub enum CertcallError {
    /// URL or certificate thumbprint was not supplied
    #[error("URL and certificate thumbprint are required")]
    MissingArguments,

    /// HTTP method was not supplied to the generic request operation
    #[error("HTTP method is required")]
    MissingMethod,

    /// HTTP method string is not one of the supported verbs
    #[error("Invalid HTTP method '{method}'. Supported: {}", SUPPORTED_METHODS.join(", "))]
    BadMethod {
        /// The method string as supplied by the caller
        method: String,
    },

    /// URL could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller
        url: String,
        /// Parser diagnostic
        reason: String,
    },

    /// No certificate with the requested thumbprint exists in any scope
    #[error(
        "Certificate with thumbprint '{thumbprint}' not found in {}.\n\n\
         Use ListCertificates to see available certificates.",
        searched.join(" or ")
    )]
    CertificateNotFound {
        /// The identifier as supplied by the caller
        thumbprint: String,
        /// Descriptions of the stores that were searched, in search order
        searched: Vec<String>,
    },

    /// The certificate was found but its private key cannot be used
    #[error(
        "Certificate with thumbprint '{thumbprint}' found, but private key is not accessible.\n\n{source}"
    )]
    PrivateKeyInaccessible {
        /// The identifier as supplied by the caller
        thumbprint: String,
        /// Classified key access failure
        source: KeyAccessError,
    },

    /// A certificate store scope could not be opened
    #[error("Cannot open {scope} certificate store at {location}: {source}")]
    StoreAccess {
        /// Scope that failed to open
        scope: TrustScope,
        /// Backing location of the scope
        location: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Connection, handshake, send or receive failed
    #[error("{message}")]
    Transport {
        /// Top-level failure message
        message: String,
        /// Error source chain, outermost first
        trace: Vec<String>,
    },

    /// A configuration value could not be understood
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse error category, one per failure family callers act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed required argument
    InputValidation,
    /// No certificate matched the identifier
    CertificateNotFound,
    /// Certificate found but its private key is unusable
    PrivateKeyAccess,
    /// Store, transport or other local failure
    LocalError,
}

impl CertcallError {
    /// Build a transport error from any error, capturing its source chain.
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut trace = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push(cause.to_string());
            source = cause.source();
        }
        Self::Transport {
            message: err.to_string(),
            trace,
        }
    }

    /// Returns the category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArguments
            | Self::MissingMethod
            | Self::BadMethod { .. }
            | Self::InvalidUrl { .. } => ErrorKind::InputValidation,
            Self::CertificateNotFound { .. } => ErrorKind::CertificateNotFound,
            Self::PrivateKeyInaccessible { .. } => ErrorKind::PrivateKeyAccess,
            Self::StoreAccess { .. }
            | Self::Transport { .. }
            | Self::Config(_)
            | Self::Internal(_) => ErrorKind::LocalError,
        }
    }

    /// Render as the single result string returned across the call boundary.
    #[must_use]
    pub fn to_result_string(&self) -> String {
        match self {
            Self::Transport { message, trace } if !trace.is_empty() => {
                let trace = trace
                    .iter()
                    .map(|cause| format!("  caused by: {cause}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("ERROR: {message}\n{trace}")
            }
            _ => format!("ERROR: {self}"),
        }
    }
}
