//! # certcall-cli
//!
//! Operator command-line interface for certcall.
//!
//! ## Features
//!
//! - **Every operation**: `get`, `post`, `put`, `delete`, `patch`, `request`
//! - **Diagnostics**: `list-certs` shows what this account can see
//! - **Configuration**: store locations and transport settings in `config.toml`
//!
//! Output is exactly the operation's result string; the exit status is 1
//! whenever that string reports an error.

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
