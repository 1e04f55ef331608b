//! `seqmath config`: where settings come from and what they resolve to.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{resolve_config_path, Settings};

pub fn show(cli_path: &Option<PathBuf>, settings: &Settings) -> Result<()> {
    match resolve_config_path(cli_path) {
        Some(p) if p.exists() => println!("{} {}", "config:".bold(), p.display()),
        Some(p) => println!("{} {} (not found, using defaults)", "config:".bold(), p.display()),
        None => println!("{} (no home directory, using defaults)", "config:".bold()),
    }
    let body = toml::to_string(settings).context("rendering settings")?;
    print!("{body}");
    Ok(())
}
