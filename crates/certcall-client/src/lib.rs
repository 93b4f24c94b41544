//! Mutual-TLS HTTP client for certcall.
//!
//! This crate provides [`MtlsClient`], which resolves a client certificate by
//! thumbprint, proves its private key is usable, and sends one request with
//! that certificate bound to a fresh TLS connection. The [`Procedures`]
//! surface flattens every outcome into a single result string.

#![doc(html_root_url = "https://docs.rs/certcall-client/0.1.0")]

mod client;
mod config;
mod executor;
pub mod procedures;

pub use certcall_core::{CertcallError, ExecutionOutcome, Result};
pub use client::{MtlsClient, MtlsClientBuilder};
pub use config::*;
pub use procedures::{Invocation, MethodArg, Procedures};
