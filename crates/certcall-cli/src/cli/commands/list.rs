//! `certcall list-certs` - show certificates visible in both stores.

use anyhow::Result;
use std::process::ExitCode;

use super::{emit, Context};
use crate::cli::args::ListArgs;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: &ListArgs) -> Result<ExitCode> {
    match args.format {
        OutputFormat::Text => Ok(emit(&ctx.client.procedures().list_certificates())),
        OutputFormat::Json => match ctx.client.list_certificates() {
            Ok(report) => {
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => Ok(emit(&err.to_result_string())),
        },
    }
}
