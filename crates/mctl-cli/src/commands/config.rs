//! Config command implementations

use std::path::Path;

use anyhow::{Context, Result};

use crate::output::{print_error, print_info, print_success, print_warning};
use mctl_core::config;

/// Show the config file in effect
pub fn config_show(path: &Path) -> Result<()> {
    if !path.exists() {
        print_warning(&format!("No configuration file found at {:?}", path));
        print_info("Run 'mesheryctl config init' to create one");
        return Ok(());
    }

    print_info(&format!("Configuration file: {:?}", path));
    println!();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    println!("{}", content);

    Ok(())
}

/// Initialize default configuration
pub fn config_init(path: &Path, force: bool) -> Result<()> {
    let written = config::init_config(path, force)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    if written {
        print_success(&format!("Created configuration file: {:?}", path));
    } else {
        print_error(&format!("Config file already exists: {:?}", path));
        print_info("Use --force to overwrite");
    }

    Ok(())
}
