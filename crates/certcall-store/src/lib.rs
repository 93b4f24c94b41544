//! # certcall-store
//!
//! Finds client certificates by thumbprint and proves their private keys
//! are usable by the calling process.
//!
//! ## Store layout
//!
//! ```text
//! <user store>/              searched first
//!     billing-client.pem     certificate (and optionally its key)
//!     billing-client.key     sibling key file
//! <machine store>/           searched second
//!     shared.crt
//!     shared.key
//! ```
//!
//! ## Flow
//!
//! ```text
//! resolve(thumbprint)
//!   -> with_store(User)    open, scan, release
//!   -> with_store(Machine) only if the user scope had no match
//! verify(cert)
//!   -> metadata check -> read key -> parse key and compare to certificate
//! ```
//!
//! Nothing is cached: every call re-opens the stores, since operators may
//! add or remove certificates at any time.

pub mod fingerprint;
pub mod key_access;
pub mod listing;
pub mod locations;
mod parse;
pub mod resolver;
pub mod store;

pub use key_access::verify;
pub use listing::{list_certificates, CertificateReport, ScopeListing};
pub use locations::StoreLocations;
pub use resolver::resolve;
pub use store::{find, list_all, with_store, CertificateStore, FileSystemStore, StoreHandle};

#[cfg(test)]
pub(crate) mod fixtures;
