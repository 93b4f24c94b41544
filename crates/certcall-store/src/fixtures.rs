//! Test certificates written into temporary store directories.

use certcall_core::{CertificateIdentifier, ResolvedCertificate, Result, TrustScope};
use rcgen::{CertificateParams, DnType, KeyPair, SignatureAlgorithm};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use crate::fingerprint::thumbprint;
use crate::{CertificateStore, StoreHandle, StoreLocations};

/// RSA-2048 key, PKCS#8 and PKCS#1 encodings of the same key.
pub const RSA_PKCS8: &str = include_str!("../testdata/rsa2048.pk8.pem");
pub const RSA_PKCS1: &str = include_str!("../testdata/rsa2048.pkcs1.pem");

/// P-256 key, PKCS#8 and SEC1 (`openssl ecparam -genkey`) encodings of the same key.
pub const P256_PKCS8: &str = include_str!("../testdata/p256.pk8.pem");
pub const P256_SEC1: &str = include_str!("../testdata/p256.sec1.pem");

pub struct Fixture {
    _dir: TempDir,
    pub user: PathBuf,
    pub machine: PathBuf,
}

pub struct Issued {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub thumbprint: String,
    pub key_pem: String,
}

impl Fixture {
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

    pub fn locations(&self) -> StoreLocations {
        StoreLocations::new(&self.user, &self.machine)
    }

    /// PEM certificate with a sibling `.key` file.
    pub fn issue(&self, name: &str, dir: &Path) -> Issued {
        self.issue_with(name, dir, KeyPair::generate().unwrap())
    }

    pub fn issue_for(&self, name: &str, dir: &Path, alg: &'static SignatureAlgorithm) -> Issued {
        self.issue_with(name, dir, KeyPair::generate_for(alg).unwrap())
    }

    fn issue_with(&self, name: &str, dir: &Path, key: KeyPair) -> Issued {
        let (cert_pem, der) = self_signed(name, &key);
        let cert_path = dir.join(format!("{name}.pem"));
        let key_path = dir.join(format!("{name}.key"));
        std::fs::write(&cert_path, cert_pem).unwrap();
        std::fs::write(&key_path, key.serialize_pem()).unwrap();
        Issued {
            cert_path,
            key_path,
            thumbprint: thumbprint(&der),
            key_pem: key.serialize_pem(),
        }
    }

    /// Certificate signed by `signing_pem` (PKCS#8), with `key_file_pem`
    /// written as the sibling key file. Lets one key be stored in another
    /// encoding.
    pub fn issue_with_key_file(
        &self,
        name: &str,
        dir: &Path,
        signing_pem: &str,
        key_file_pem: &str,
    ) -> Issued {
        let key = KeyPair::from_pem(signing_pem).unwrap();
        let (cert_pem, der) = self_signed(name, &key);
        let cert_path = dir.join(format!("{name}.pem"));
        let key_path = dir.join(format!("{name}.key"));
        std::fs::write(&cert_path, cert_pem).unwrap();
        std::fs::write(&key_path, key_file_pem).unwrap();
        Issued {
            cert_path,
            key_path,
            thumbprint: thumbprint(&der),
            key_pem: key_file_pem.to_string(),
        }
    }

    /// Certificate and key in one PEM file.
    pub fn issue_combined(&self, name: &str, dir: &Path) -> Issued {
        let key = KeyPair::generate().unwrap();
        let (cert_pem, der) = self_signed(name, &key);
        let cert_path = dir.join(format!("{name}.pem"));
        std::fs::write(&cert_path, format!("{cert_pem}\n{}", key.serialize_pem())).unwrap();
        Issued {
            key_path: cert_path.clone(),
            cert_path,
            thumbprint: thumbprint(&der),
            key_pem: key.serialize_pem(),
        }
    }

    /// Raw DER certificate, no key.
    pub fn issue_der(&self, name: &str, dir: &Path) -> Issued {
        let key = KeyPair::generate().unwrap();
        let (_, der) = self_signed(name, &key);
        let cert_path = dir.join(format!("{name}.der"));
        std::fs::write(&cert_path, &der).unwrap();
        Issued {
            key_path: dir.join(format!("{name}.key")),
            cert_path,
            thumbprint: thumbprint(&der),
            key_pem: key.serialize_pem(),
        }
    }

    /// Certificate whose sibling key file belongs to a different key pair.
    pub fn issue_mismatched(&self, name: &str, dir: &Path) -> Issued {
        let key = KeyPair::generate().unwrap();
        let other = KeyPair::generate().unwrap();
        let (cert_pem, der) = self_signed(name, &key);
        let cert_path = dir.join(format!("{name}.pem"));
        let key_path = dir.join(format!("{name}.key"));
        std::fs::write(&cert_path, cert_pem).unwrap();
        std::fs::write(&key_path, other.serialize_pem()).unwrap();
        Issued {
            cert_path,
            key_path,
            thumbprint: thumbprint(&der),
            key_pem: other.serialize_pem(),
        }
    }

    /// Write the same certificate into another directory.
    pub fn copy_into(&self, issued: &Issued, dir: &Path) -> Issued {
        let cert_path = dir.join(issued.cert_path.file_name().unwrap());
        let key_path = dir.join(issued.key_path.file_name().unwrap());
        std::fs::copy(&issued.cert_path, &cert_path).unwrap();
        if issued.key_path.is_file() && issued.key_path != issued.cert_path {
            std::fs::copy(&issued.key_path, &key_path).unwrap();
        }
        Issued {
            cert_path,
            key_path,
            thumbprint: issued.thumbprint.clone(),
            key_pem: issued.key_pem.clone(),
        }
    }
}

fn self_signed(name: &str, key: &KeyPair) -> (String, Vec<u8>) {
    let mut params = CertificateParams::new(vec![format!("{name}.example")]).unwrap();
    params.distinguished_name.push(DnType::CommonName, name);
    let cert = params.self_signed(key).unwrap();
    (cert.pem(), cert.der().to_vec())
}

/// Wraps a store and counts how often scopes are opened and released.
pub struct CountingStore<S> {
    inner: S,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            opened: Arc::default(),
            closed: Arc::default(),
        }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl<S: CertificateStore> CertificateStore for CountingStore<S> {
    fn open(&self, scope: TrustScope) -> Result<Box<dyn StoreHandle + '_>> {
        let inner = self.inner.open(scope)?;
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountingHandle {
            inner,
            closed: Arc::clone(&self.closed),
        }))
    }

    fn describe(&self, scope: TrustScope) -> String {
        self.inner.describe(scope)
    }
}

struct CountingHandle<'a> {
    inner: Box<dyn StoreHandle + 'a>,
    closed: Arc<AtomicUsize>,
}

impl StoreHandle for CountingHandle<'_> {
    fn scope(&self) -> TrustScope {
        self.inner.scope()
    }

    fn certificates(&self) -> Result<Vec<ResolvedCertificate>> {
        self.inner.certificates()
    }

    fn find(&self, id: &CertificateIdentifier) -> Result<Option<ResolvedCertificate>> {
        self.inner.find(id)
    }
}

impl Drop for CountingHandle<'_> {
    fn drop(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
