//! Main certcall client implementation.

use certcall_core::{CertcallError, ExecutionOutcome, RequestSpec, Result};
use certcall_store::{
    list_certificates, resolve, verify, CertificateReport, CertificateStore, FileSystemStore,
};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{TlsFloor, TransportConfig};
use crate::executor;
use crate::procedures::Procedures;

/// Mutual-TLS client selecting its certificate by thumbprint per call.
///
/// Holds no connection state: cloning is cheap and every request builds
/// its own transport.
#[derive(Clone)]
pub struct MtlsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    store: Arc<dyn CertificateStore>,
    transport: TransportConfig,
}

impl MtlsClient {
    /// Create a client over `store` with default transport settings
    #[must_use]
    pub fn new(store: impl CertificateStore + 'static) -> Self {
        MtlsClientBuilder::new().store(store).build()
    }

    /// Create a client over the environment-configured filesystem store
    #[must_use]
    pub fn from_env() -> Self {
        MtlsClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> MtlsClientBuilder {
        MtlsClientBuilder::new()
    }

    /// Access the string-returning callable operations
    #[must_use]
    pub const fn procedures(&self) -> Procedures<'_> {
        Procedures::new(self)
    }

    /// Certificate store in use
    #[must_use]
    pub fn store(&self) -> &dyn CertificateStore {
        self.inner.store.as_ref()
    }

    /// Transport settings in use
    #[must_use]
    pub fn transport(&self) -> &TransportConfig {
        &self.inner.transport
    }

    /// Resolve the certificate, verify its key, and send `spec`.
    pub async fn execute(&self, spec: &RequestSpec, thumbprint: &str) -> Result<ExecutionOutcome> {
        let cert = resolve(self.store(), thumbprint)?;
        let key = verify(&cert).map_err(|source| CertcallError::PrivateKeyInaccessible {
            thumbprint: thumbprint.to_string(),
            source,
        })?;

        executor::execute(spec, &cert, &key, self.transport()).await
    }

    /// List every certificate visible in every scope
    pub fn list_certificates(&self) -> Result<CertificateReport> {
        list_certificates(self.store())
    }
}

/// Builder for configuring an [`MtlsClient`]
pub struct MtlsClientBuilder {
    store: Option<Arc<dyn CertificateStore>>,
    transport: TransportConfig,
}

impl Default for MtlsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MtlsClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            transport: TransportConfig::default(),
        }
    }

    /// Set the certificate store
    #[must_use]
    pub fn store(mut self, store: impl CertificateStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Replace the whole transport configuration
    #[must_use]
    pub fn transport(mut self, config: TransportConfig) -> Self {
        self.transport = config;
        self
    }

    /// Set the minimum TLS version
    #[must_use]
    pub fn min_tls_version(mut self, floor: TlsFloor) -> Self {
        self.transport = self.transport.min_tls_version(floor);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.timeout(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.transport = self.transport.user_agent(agent);
        self
    }

    /// Add a trust anchor (DER) for server verification
    #[must_use]
    pub fn add_root_certificate(mut self, der: impl Into<Vec<u8>>) -> Self {
        self.transport = self.transport.add_root_certificate(der);
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> MtlsClient {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(FileSystemStore::from_env()));

        MtlsClient {
            inner: Arc::new(ClientInner {
                store,
                transport: self.transport,
            }),
        }
    }
}
