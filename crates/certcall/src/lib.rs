//! Call mutual-TLS REST APIs with a client certificate chosen by thumbprint.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use certcall::MtlsClient;
//!
//! fn main() {
//!     // Stores come from CERTCALL_USER_STORE / CERTCALL_MACHINE_STORE or defaults
//!     let client = MtlsClient::from_env();
//!     let ops = client.procedures();
//!
//!     let body = ops.http_get(
//!         Some("https://partner.example.com/api/v1/status"),
//!         Some("3B 7E 0A 91 ..."),
//!     );
//!     if body.starts_with("ERROR: ") {
//!         eprintln!("{body}");
//!     }
//!
//!     // What can this process see?
//!     println!("{}", ops.list_certificates());
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Enables `native-roots`
//! - `native-roots` - Trust the platform root store in addition to webpki roots

#![doc(html_root_url = "https://docs.rs/certcall/0.1.0")]

// Re-export core types
pub use certcall_core::*;

// Re-export store access
pub use certcall_store::{fingerprint, locations};
pub use certcall_store::{
    find, list_all, list_certificates, resolve, verify, with_store, CertificateReport,
    CertificateStore, FileSystemStore, ScopeListing, StoreHandle, StoreLocations,
};

// Re-export client
pub use certcall_client::{
    Invocation, MethodArg, MtlsClient, MtlsClientBuilder, Procedures, TlsFloor, TransportConfig,
};
