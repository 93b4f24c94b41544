//! Request specification and the pure request builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{CertcallError, Result};

/// Content type attached to a body when the caller gives none
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Verbs accepted by the generic request operation, in display order
pub const SUPPORTED_METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
}

impl HttpMethod {
    /// Upper-case verb
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = CertcallError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(CertcallError::BadMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name
    pub name: String,
    /// Header value
    pub value: String,
}

impl Header {
    /// Create a header
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parse a `Name1:Value1;Name2:Value2` header string.
///
/// Segments are split on `;`, then on the first `:` only, so values may
/// contain colons. Names and values are trimmed. Segments without a colon
/// are dropped.
#[must_use]
pub fn parse_headers(raw: &str) -> Vec<Header> {
    raw.split(';')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| segment.split_once(':'))
        .map(|(name, value)| Header::new(name.trim(), value.trim()))
        .collect()
}

/// Everything needed to issue one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Target URL
    pub url: Url,
    /// HTTP method
    pub method: HttpMethod,
    /// Request body; `None` when the caller gave none or an empty one
    pub body: Option<String>,
    /// Content type of `body`; only set when a body is present
    pub content_type: Option<String>,
    /// Extra headers, in caller order
    pub headers: Vec<Header>,
}

impl RequestSpec {
    /// Build a request specification. Performs no I/O.
    ///
    /// The content type is attached only alongside a non-empty body, and
    /// defaults to [`DEFAULT_CONTENT_TYPE`] when absent or empty.
    pub fn build(
        method: HttpMethod,
        url: &str,
        body: Option<&str>,
        content_type: Option<&str>,
        headers: Option<&str>,
    ) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| CertcallError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let body = body.filter(|b| !b.is_empty()).map(str::to_string);
        let content_type = body.as_ref().map(|_| {
            content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or(DEFAULT_CONTENT_TYPE)
                .to_string()
        });

        Ok(Self {
            url,
            method,
            body,
            content_type,
            headers: headers.map(parse_headers).unwrap_or_default(),
        })
    }
}
