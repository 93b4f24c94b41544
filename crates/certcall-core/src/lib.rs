//! Core types for certcall.
//!
//! This crate provides the foundational pieces shared by the store and client crates:
//!
//! - **Types**: certificate identifiers, trust scopes, resolved certificates,
//!   request specifications and execution outcomes
//! - **Errors**: the full failure taxonomy as [`CertcallError`]
//! - **Flattening**: [`render`] turns any outcome or error into the single
//!   result string handed back to the caller
//!
//! # Example
//!
//! ```rust
//! use certcall_core::{HttpMethod, RequestSpec};
//!
//! let spec = RequestSpec::build(
//!     HttpMethod::Post,
//!     "https://api.example.com/orders",
//!     Some(r#"{"id":1}"#),
//!     None,
//!     Some("X-Trace:abc;Accept:application/json"),
//! )
//! .unwrap();
//!
//! assert_eq!(spec.content_type.as_deref(), Some("application/json"));
//! assert_eq!(spec.headers.len(), 2);
//! ```

#![doc(html_root_url = "https://docs.rs/certcall-core/0.1.0")]

mod error;
pub mod types;

pub use error::{CertcallError, ErrorKind, Result};
pub use types::*;
