#![allow(dead_code)]

use certcall_client::MtlsClient;
use certcall_core::{Result, TrustScope};
use certcall_store::fingerprint::thumbprint;
use certcall_store::{CertificateStore, FileSystemStore, StoreHandle, StoreLocations};
use rcgen::{CertificateParams, DnType, KeyPair};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Temporary user and machine stores.
pub struct Stores {
    _dir: TempDir,
    pub user: PathBuf,
    pub machine: PathBuf,
}

impl Stores {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("user");
        let machine = dir.path().join("machine");
        std::fs::create_dir_all(&user).unwrap();
        std::fs::create_dir_all(&machine).unwrap();
        Self {
            _dir: dir,
            user,
            machine,
        }
    }

    pub fn store(&self) -> FileSystemStore {
        FileSystemStore::new(StoreLocations::new(&self.user, &self.machine))
    }

    /// Issue a self-signed client certificate with a sibling key; returns its thumbprint.
    pub fn issue(&self, name: &str, with_key: bool) -> String {
        let key = KeyPair::generate().unwrap();
        let mut params = CertificateParams::new(vec![format!("{name}.example")]).unwrap();
        params.distinguished_name.push(DnType::CommonName, name);
        let cert = params.self_signed(&key).unwrap();

        std::fs::write(self.user.join(format!("{name}.pem")), cert.pem()).unwrap();
        if with_key {
            std::fs::write(self.user.join(format!("{name}.key")), key.serialize_pem()).unwrap();
        }
        thumbprint(cert.der())
    }

    /// Place an existing certificate and key file in the user store; returns its thumbprint.
    pub fn install(&self, name: &str, cert_pem: &str, cert_der: &[u8], key_pem: &str) -> String {
        std::fs::write(self.user.join(format!("{name}.pem")), cert_pem).unwrap();
        std::fs::write(self.user.join(format!("{name}.key")), key_pem).unwrap();
        thumbprint(cert_der)
    }

    pub fn client(&self) -> MtlsClient {
        MtlsClient::new(self.store())
    }

    /// Client whose store counts scope opens.
    pub fn counting_client(&self) -> (MtlsClient, Arc<AtomicUsize>) {
        let opened = Arc::new(AtomicUsize::new(0));
        let store = CountingStore {
            inner: self.store(),
            opened: Arc::clone(&opened),
        };
        (MtlsClient::new(store), opened)
    }
}

pub struct CountingStore {
    inner: FileSystemStore,
    opened: Arc<AtomicUsize>,
}

impl CertificateStore for CountingStore {
    fn open(&self, scope: TrustScope) -> Result<Box<dyn StoreHandle + '_>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.inner.open(scope)
    }

    fn describe(&self, scope: TrustScope) -> String {
        self.inner.describe(scope)
    }
}
