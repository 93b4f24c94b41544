//! The callable operations.
//!
//! Every operation returns exactly one string: the raw response body on
//! success, or a message beginning with `ERROR: ` on any failure. Nothing
//! else crosses this boundary, so every error is flattened here, once.

use certcall_core::{render, CertcallError, ExecutionOutcome, HttpMethod, RequestSpec, Result};
use std::future::Future;

use crate::MtlsClient;

/// How the HTTP method of an [`Invocation`] is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg<'a> {
    /// Fixed by the operation (`HttpGet`, `HttpPost`, ...)
    Fixed(HttpMethod),
    /// Caller-supplied verb, parsed case-insensitively
    Named(Option<&'a str>),
}

impl Default for MethodArg<'_> {
    fn default() -> Self {
        Self::Fixed(HttpMethod::Get)
    }
}

/// Arguments of one call, as received from the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invocation<'a> {
    /// Target URL
    pub url: Option<&'a str>,
    /// Client certificate thumbprint
    pub thumbprint: Option<&'a str>,
    /// HTTP method
    pub method: MethodArg<'a>,
    /// Request body
    pub body: Option<&'a str>,
    /// Content type of the body
    pub content_type: Option<&'a str>,
    /// `Name:Value;Name:Value` header string
    pub headers: Option<&'a str>,
}

/// String-returning operations over an [`MtlsClient`].
pub struct Procedures<'a> {
    client: &'a MtlsClient,
}

impl<'a> Procedures<'a> {
    pub(crate) const fn new(client: &'a MtlsClient) -> Self {
        Self { client }
    }

    /// `HttpGet(url, thumbprint)`
    pub fn http_get(&self, url: Option<&str>, thumbprint: Option<&str>) -> String {
        self.call(&Invocation {
            url,
            thumbprint,
            method: MethodArg::Fixed(HttpMethod::Get),
            ..Invocation::default()
        })
    }

    /// `HttpPost(url, thumbprint, body, contentType)`
    pub fn http_post(
        &self,
        url: Option<&str>,
        thumbprint: Option<&str>,
        body: Option<&str>,
        content_type: Option<&str>,
    ) -> String {
        self.with_body(HttpMethod::Post, url, thumbprint, body, content_type)
    }

    /// `HttpPut(url, thumbprint, body, contentType)`
    pub fn http_put(
        &self,
        url: Option<&str>,
        thumbprint: Option<&str>,
        body: Option<&str>,
        content_type: Option<&str>,
    ) -> String {
        self.with_body(HttpMethod::Put, url, thumbprint, body, content_type)
    }

    /// `HttpDelete(url, thumbprint)`
    pub fn http_delete(&self, url: Option<&str>, thumbprint: Option<&str>) -> String {
        self.call(&Invocation {
            url,
            thumbprint,
            method: MethodArg::Fixed(HttpMethod::Delete),
            ..Invocation::default()
        })
    }

    /// `HttpPatch(url, thumbprint, body, contentType)`
    pub fn http_patch(
        &self,
        url: Option<&str>,
        thumbprint: Option<&str>,
        body: Option<&str>,
        content_type: Option<&str>,
    ) -> String {
        self.with_body(HttpMethod::Patch, url, thumbprint, body, content_type)
    }

    /// `HttpRequestWithHeaders(url, thumbprint, method, body, contentType, headers)`
    pub fn http_request_with_headers(
        &self,
        url: Option<&str>,
        thumbprint: Option<&str>,
        method: Option<&str>,
        body: Option<&str>,
        content_type: Option<&str>,
        headers: Option<&str>,
    ) -> String {
        self.call(&Invocation {
            url,
            thumbprint,
            method: MethodArg::Named(method),
            body,
            content_type,
            headers,
        })
    }

    /// `ListCertificates()`
    pub fn list_certificates(&self) -> String {
        match self.client.list_certificates() {
            Ok(report) => report.to_string(),
            Err(err) => err.to_result_string(),
        }
    }

    /// Run `invocation` to completion on the calling thread.
    ///
    /// Must not be called from inside an async runtime; use
    /// [`invoke`](Self::invoke) there.
    pub fn call(&self, invocation: &Invocation<'_>) -> String {
        block_on(self.invoke(invocation))
    }

    /// Async form of [`call`](Self::call).
    pub async fn invoke(&self, invocation: &Invocation<'_>) -> String {
        render(self.run(invocation).await)
    }

    fn with_body(
        &self,
        method: HttpMethod,
        url: Option<&str>,
        thumbprint: Option<&str>,
        body: Option<&str>,
        content_type: Option<&str>,
    ) -> String {
        self.call(&Invocation {
            url,
            thumbprint,
            method: MethodArg::Fixed(method),
            body,
            content_type,
            headers: None,
        })
    }

    async fn run(&self, invocation: &Invocation<'_>) -> Result<ExecutionOutcome> {
        let method = match invocation.method {
            MethodArg::Fixed(method) => method,
            MethodArg::Named(None) => return Err(CertcallError::MissingMethod),
            MethodArg::Named(Some(name)) => name.parse()?,
        };

        let (Some(url), Some(thumbprint)) = (invocation.url, invocation.thumbprint) else {
            return Err(CertcallError::MissingArguments);
        };

        let spec = RequestSpec::build(
            method,
            url,
            invocation.body,
            invocation.content_type,
            invocation.headers,
        )?;

        self.client.execute(&spec, thumbprint).await
    }
}

/// Drive `future` on a single-threaded runtime owned by this call.
fn block_on<F: Future<Output = String>>(future: F) -> String {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(future),
        Err(e) => CertcallError::Internal(format!("failed to start I/O runtime: {e}"))
            .to_result_string(),
    }
}
