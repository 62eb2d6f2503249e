use std::path::Path;

use anyhow::{bail, Result};
use rebound_core::AppConfig;

/// Print the effective configuration
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration unless a file already exists
pub fn init(path: &Path) -> Result<()> {
    write_default(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

pub fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

fn write_default(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "{} already exists, remove it first to start over",
            path.display()
        );
    }
    AppConfig::default().save_to(path)?;
    tracing::info!(path = %path.display(), "Created configuration file");
    Ok(())
}
