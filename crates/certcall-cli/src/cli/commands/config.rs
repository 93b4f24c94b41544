//! `certcall config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub fn execute(args: &ConfigArgs) -> Result<ExitCode> {
    match &args.command {
        ConfigCommands::Show => show_config()?,
        ConfigCommands::Set { key, value } => set_config(key, value)?,
        ConfigCommands::Path => show_path()?,
    }
    Ok(ExitCode::SUCCESS)
}

fn show_config() -> Result<()> {
    let config = Config::load()?;
    let locations = config.store_locations();
    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!(
        "  {} {}",
        "user_store:".bold(),
        config
            .user_store
            .as_ref()
            .map_or_else(unset, |p| p.display().to_string())
    );
    println!(
        "  {} {}",
        "machine_store:".bold(),
        config
            .machine_store
            .as_ref()
            .map_or_else(unset, |p| p.display().to_string())
    );
    println!(
        "  {} {}",
        "timeout_secs:".bold(),
        config.timeout_secs.map_or_else(unset, |s| s.to_string())
    );
    println!(
        "  {} {}",
        "min_tls:".bold(),
        config.min_tls.map_or_else(unset, |f| f.to_string())
    );
    println!();
    println!("{}", "Effective stores:".bold());
    println!("  {} {}", "user:".bold(), locations.user.display());
    println!("  {} {}", "machine:".bold(), locations.machine.display());

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "user_store" => {
            config.user_store = Some(PathBuf::from(value));
            println!("{} User store set to {}.", "Success:".green().bold(), value.cyan());
        }
        "machine_store" => {
            config.machine_store = Some(PathBuf::from(value));
            println!("{} Machine store set to {}.", "Success:".green().bold(), value.cyan());
        }
        "timeout_secs" | "timeout" => {
            config.timeout_secs = Some(value.parse()?);
            println!("{} timeout_secs set to {}.", "Success:".green().bold(), value);
        }
        "min_tls" => {
            config.min_tls = Some(value.parse()?);
            println!("{} min_tls set to {}.", "Success:".green().bold(), value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 user_store     - Directory backing the user store\n  \
                 machine_store  - Directory backing the machine store\n  \
                 timeout_secs   - Request timeout in seconds\n  \
                 min_tls        - Minimum TLS version (1.2/1.3)",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
