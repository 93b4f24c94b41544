//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Call mutual-TLS REST APIs with a client certificate chosen by thumbprint.
///
/// The user store is searched before the machine store. Every command
/// prints a single result: the response body, or a line starting with
/// "ERROR: " (exit status 1).
#[derive(Parser, Debug)]
#[command(name = "certcall")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory backing the user store
    #[arg(long, global = true)]
    pub user_store: Option<PathBuf>,

    /// Directory backing the machine store
    #[arg(long, global = true)]
    pub machine_store: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Minimum TLS version (1.2 or 1.3)
    #[arg(long, global = true)]
    pub min_tls: Option<String>,

    /// Increase verbosity (logs go to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a GET request
    Get(TargetArgs),

    /// Send a POST request
    Post(BodyArgs),

    /// Send a PUT request
    Put(BodyArgs),

    /// Send a DELETE request
    Delete(TargetArgs),

    /// Send a PATCH request
    Patch(BodyArgs),

    /// Send a request with any method and custom headers
    Request(RequestArgs),

    /// List certificates visible in the user and machine stores
    ListCerts(ListArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Request commands
// ============================================================================

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Target URL
    pub url: String,

    /// Client certificate thumbprint (spaces and invisible marks are ignored)
    #[arg(short, long)]
    pub thumbprint: String,
}

#[derive(Args, Debug)]
pub struct BodyArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Request body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Content type of the body (default: application/json)
    #[arg(short = 'c', long)]
    pub content_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// HTTP method (GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS)
    #[arg(short = 'X', long)]
    pub method: String,

    /// Request body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Content type of the body (default: application/json)
    #[arg(short = 'c', long)]
    pub content_type: Option<String>,

    /// Extra headers as "Name1:Value1;Name2:Value2"
    #[arg(short = 'H', long)]
    pub headers: Option<String>,
}

// ============================================================================
// Listing command
// ============================================================================

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (user_store, machine_store, timeout_secs, min_tls)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
