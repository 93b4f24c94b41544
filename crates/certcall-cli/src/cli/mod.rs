//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use certcall::{FileSystemStore, MtlsClient, TlsFloor, TransportConfig};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match &cli.command {
        Commands::Config(args) => return commands::config::execute(args),
        _ => commands::Context {
            client: build_client(&cli, &Config::load()?)?,
        },
    };

    let code = match &cli.command {
        Commands::Get(args) => commands::request::get(&ctx, args),
        Commands::Post(args) => commands::request::post(&ctx, args),
        Commands::Put(args) => commands::request::put(&ctx, args),
        Commands::Delete(args) => commands::request::delete(&ctx, args),
        Commands::Patch(args) => commands::request::patch(&ctx, args),
        Commands::Request(args) => commands::request::custom(&ctx, args),
        Commands::ListCerts(args) => commands::list::execute(&ctx, args)?,
        Commands::Config(_) => ExitCode::SUCCESS,
    };

    Ok(code)
}

/// Build the client from flags, environment and config file, in that order.
fn build_client(cli: &Cli, config: &Config) -> Result<MtlsClient> {
    let mut locations = config.store_locations();
    if let Some(user) = &cli.user_store {
        locations.user.clone_from(user);
    }
    if let Some(machine) = &cli.machine_store {
        locations.machine.clone_from(machine);
    }

    let mut transport = TransportConfig::new();
    let floor = match cli.min_tls.as_deref() {
        Some(value) => Some(value.parse::<TlsFloor>()?),
        None => config.min_tls,
    };
    if let Some(floor) = floor {
        transport = transport.min_tls_version(floor);
    }
    if let Some(secs) = cli.timeout.or(config.timeout_secs) {
        transport = transport.timeout(Duration::from_secs(secs));
    }

    tracing::debug!(
        user = %locations.user.display(),
        machine = %locations.machine.display(),
        min_tls = %transport.min_tls_version,
        "client configured"
    );

    Ok(MtlsClient::builder()
        .store(FileSystemStore::new(locations))
        .transport(transport)
        .build())
}

/// Log to stderr so stdout carries only the result.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
