//! Command implementations.

pub mod config;
pub mod list;
pub mod request;

use certcall::MtlsClient;
use std::process::ExitCode;

use crate::output::is_error;

/// Shared context for all commands.
#[derive(Clone)]
pub struct Context {
    /// Client bound to the configured stores and transport
    pub client: MtlsClient,
}

/// Print a result string to stdout and map it to an exit status.
pub(crate) fn emit(result: &str) -> ExitCode {
    print!("{result}");
    if !result.is_empty() && !result.ends_with('\n') {
        println!();
    }
    if is_error(result) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
