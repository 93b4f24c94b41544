//! certcall - call mutual-TLS REST APIs by certificate thumbprint.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    certcall_cli::run()
}
