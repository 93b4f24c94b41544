//! Execution outcomes and flattening to the single result string.

use crate::error::Result;

/// Result of executing one request that reached the remote endpoint.
///
/// Local failures (input validation, certificate lookup, key access,
/// transport) travel as `Err(CertcallError)` beside this type; [`render`]
/// flattens both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Success-family status; carries the response body
    Success(String),
    /// Any other status; carries status, reason phrase and body
    RemoteError {
        /// HTTP status code
        status: u16,
        /// Reason phrase
        status_text: String,
        /// Response body
        body: String,
    },
}

impl ExecutionOutcome {
    /// Render as the single result string returned across the call boundary.
    #[must_use]
    pub fn into_result_string(self) -> String {
        match self {
            Self::Success(body) => body,
            Self::RemoteError {
                status,
                status_text,
                body,
            } => format!("ERROR: HTTP {status} - {status_text}\n{body}"),
        }
    }
}

/// Flatten an outcome or error into the caller-facing string.
#[must_use]
pub fn render(result: Result<ExecutionOutcome>) -> String {
    match result {
        Ok(outcome) => outcome.into_result_string(),
        Err(err) => err.to_result_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CertcallError;

    #[test]
    fn test_success_verbatim() {
        let out = ExecutionOutcome::Success("{\"ok\":true}".into());
        assert_eq!(render(Ok(out)), "{\"ok\":true}");
        assert_eq!(render(Ok(ExecutionOutcome::Success(String::new()))), "");
    }

    #[test]
    fn test_remote_error_format() {
        let out = ExecutionOutcome::RemoteError {
            status: 404,
            status_text: "Not Found".into(),
            body: "not found".into(),
        };
        assert_eq!(render(Ok(out)), "ERROR: HTTP 404 - Not Found\nnot found");
    }

    #[test]
    fn test_error_prefix() {
        let s = render(Err(CertcallError::MissingMethod));
        assert_eq!(s, "ERROR: HTTP method is required");
    }
}
