//! `silo config-path` – print the active config file location.

use anyhow::Result;

use silo_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
