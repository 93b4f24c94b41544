//! Certificate store adapter.
//!
//! A scope is opened read-only, used, and released when its handle drops.
//! [`with_store`] wraps that discipline so callers cannot leak a handle.

use certcall_core::{CertcallError, CertificateIdentifier, ResolvedCertificate, Result, TrustScope};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::parse::{is_certificate_file, read_entry};
use crate::StoreLocations;

/// A source of certificates partitioned by trust scope.
pub trait CertificateStore: Send + Sync {
    /// Open `scope` read-only. The scope stays open until the handle drops.
    fn open(&self, scope: TrustScope) -> Result<Box<dyn StoreHandle + '_>>;

    /// Human-readable description of the scope's backing location
    fn describe(&self, scope: TrustScope) -> String;
}

/// An open, read-only store scope.
pub trait StoreHandle {
    /// Scope this handle was opened on
    fn scope(&self) -> TrustScope;

    /// Every certificate in the scope. Expired and untrusted ones included.
    fn certificates(&self) -> Result<Vec<ResolvedCertificate>>;

    /// First certificate identified by `id`. No chain or validity checks.
    fn find(&self, id: &CertificateIdentifier) -> Result<Option<ResolvedCertificate>> {
        Ok(self
            .certificates()?
            .into_iter()
            .find(|cert| cert.is_identified_by(id)))
    }
}

/// Open `scope`, run `f` against it, and release it before returning.
pub fn with_store<S, T, F>(store: &S, scope: TrustScope, f: F) -> Result<T>
where
    S: CertificateStore + ?Sized,
    F: FnOnce(&dyn StoreHandle) -> Result<T>,
{
    let handle = store.open(scope)?;
    f(&*handle)
}

/// Find a certificate by identifier in one scope.
pub fn find<S>(
    store: &S,
    scope: TrustScope,
    id: &CertificateIdentifier,
) -> Result<Option<ResolvedCertificate>>
where
    S: CertificateStore + ?Sized,
{
    with_store(store, scope, |handle| handle.find(id))
}

/// List every certificate in one scope.
pub fn list_all<S>(store: &S, scope: TrustScope) -> Result<Vec<ResolvedCertificate>>
where
    S: CertificateStore + ?Sized,
{
    with_store(store, scope, |handle| handle.certificates())
}

/// Store backed by one directory per scope.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    locations: StoreLocations,
}

impl FileSystemStore {
    /// Create a store over the given locations
    #[must_use]
    pub const fn new(locations: StoreLocations) -> Self {
        Self { locations }
    }

    /// Create a store over [`StoreLocations::from_env`]
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(StoreLocations::from_env())
    }

    /// Locations in use
    #[must_use]
    pub const fn locations(&self) -> &StoreLocations {
        &self.locations
    }
}

impl CertificateStore for FileSystemStore {
    fn open(&self, scope: TrustScope) -> Result<Box<dyn StoreHandle + '_>> {
        let root = self.locations.path(scope).to_path_buf();
        let store_access = |source: std::io::Error| CertcallError::StoreAccess {
            scope,
            location: root.display().to_string(),
            source,
        };

        let mut entries = Vec::new();
        match std::fs::read_dir(&root) {
            Ok(dir) => {
                for entry in dir {
                    let path = entry.map_err(store_access)?.path();
                    if path.is_file() && is_certificate_file(&path) {
                        entries.push(path);
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(%scope, path = %root.display(), "store directory missing, treating as empty");
            }
            Err(e) => return Err(store_access(e)),
        }
        entries.sort();

        debug!(%scope, path = %root.display(), entries = entries.len(), "certificate store opened");
        Ok(Box::new(DirectoryHandle {
            scope,
            root,
            entries,
        }))
    }

    fn describe(&self, scope: TrustScope) -> String {
        format!("{scope} store ({})", self.locations.path(scope).display())
    }
}

/// Open directory scope. Holds the entry list captured at open time.
struct DirectoryHandle {
    scope: TrustScope,
    root: PathBuf,
    entries: Vec<PathBuf>,
}

impl DirectoryHandle {
    fn read(&self) -> impl Iterator<Item = ResolvedCertificate> + '_ {
        self.entries
            .iter()
            .filter_map(|path| match read_entry(path, self.scope) {
                Ok(cert) => Some(cert),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable store entry");
                    None
                }
            })
    }
}

impl StoreHandle for DirectoryHandle {
    fn scope(&self) -> TrustScope {
        self.scope
    }

    fn certificates(&self) -> Result<Vec<ResolvedCertificate>> {
        Ok(self.read().collect())
    }

    fn find(&self, id: &CertificateIdentifier) -> Result<Option<ResolvedCertificate>> {
        Ok(self.read().find(|cert| cert.is_identified_by(id)))
    }
}

impl Drop for DirectoryHandle {
    fn drop(&mut self) {
        debug!(scope = %self.scope, path = %self.root.display(), "certificate store closed");
    }
}
