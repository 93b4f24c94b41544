//! Request execution over a per-call mutual-TLS transport.

use certcall_core::{
    CertcallError, ExecutionOutcome, HttpMethod, RequestSpec, ResolvedCertificate, Result,
    UsableKey,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Certificate, Client as HttpClient, Identity, Method};
use tracing::{debug, warn};

use crate::config::TransportConfig;

/// Reason phrase used when a status code has no canonical one
const NO_DESCRIPTION: &str = "No description";

/// Send `spec` once, presenting `cert` as the only client certificate.
///
/// A fresh transport is built for every call and dropped afterwards.
pub(crate) async fn execute(
    spec: &RequestSpec,
    cert: &ResolvedCertificate,
    key: &UsableKey,
    config: &TransportConfig,
) -> Result<ExecutionOutcome> {
    let http = build_transport(cert, key, config)?;

    let mut request = http.request(method(spec.method), spec.url.clone());
    if let (Some(body), Some(content_type)) = (&spec.body, &spec.content_type) {
        request = request
            .header(CONTENT_TYPE, content_type.as_str())
            .body(body.clone());
    }
    for header in &spec.headers {
        request = request.header(header.name.as_str(), header.value.as_str());
    }

    debug!(
        method = %spec.method,
        url = %spec.url,
        scope = %cert.scope,
        thumbprint = %cert.thumbprint,
        "sending request"
    );

    let response = request
        .send()
        .await
        .map_err(|e| CertcallError::transport(&e))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CertcallError::transport(&e))?;

    if status.is_success() {
        debug!(status = status.as_u16(), bytes = body.len(), "request succeeded");
        Ok(ExecutionOutcome::Success(body))
    } else {
        warn!(status = status.as_u16(), url = %spec.url, "remote returned error status");
        Ok(ExecutionOutcome::RemoteError {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            body,
        })
    }
}

/// Build a single-use transport bound to the client certificate.
fn build_transport(
    cert: &ResolvedCertificate,
    key: &UsableKey,
    config: &TransportConfig,
) -> Result<HttpClient> {
    let leaf = pem::encode_config(
        &pem::Pem::new("CERTIFICATE", cert.der.clone()),
        pem::EncodeConfig::new().set_line_ending(pem::LineEnding::LF),
    );
    let identity = Identity::from_pem(format!("{leaf}{}", key.pem).as_bytes())
        .map_err(|e| CertcallError::transport(&e))?;

    let mut builder = HttpClient::builder()
        .use_rustls_tls()
        .identity(identity)
        .min_tls_version(config.min_tls_version.as_reqwest())
        .pool_max_idle_per_host(0)
        .user_agent(&config.user_agent);

    for der in &config.root_certificates {
        let root = Certificate::from_der(der).map_err(|e| CertcallError::transport(&e))?;
        builder = builder.add_root_certificate(root);
    }
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }

    builder.build().map_err(|e| CertcallError::transport(&e))
}

const fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(method(HttpMethod::Get), Method::GET);
        assert_eq!(method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(method(HttpMethod::Options), Method::OPTIONS);
    }
}
