use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::InitSummary;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into `dir` unless one is already there.
pub fn init(dir: &Path) -> Result<InitSummary> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(InitSummary { created: false });
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

    Ok(InitSummary { created: true })
}
