use std::path::Path;

use anyhow::{bail, Result};

use slidestrip_core::AppConfig;

/// Write the default configuration, never reading what is already there
///
/// A file that no longer parses can still be replaced with `force`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Print the effective configuration
pub fn show(config: &AppConfig, path: &Path) -> Result<()> {
    if path.exists() {
        println!("# Loaded from {}", path.display());
    } else {
        println!("# {} not found, showing defaults", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
