//! Command implementations

pub mod cat;
pub mod ls;
pub mod serve;

use anyhow::Result;
use logshelf_core::Config;
use std::path::{Path, PathBuf};

/// Load configuration: an explicit `--config` path, or the first well-known
/// config file in the working directory, falling back to defaults
pub fn load_config(path: Option<&Path>, dir_override: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::find_and_load(Path::new("."))?,
    };

    if let Some(dir) = dir_override {
        config.directory = dir;
    }

    config.validate()?;
    Ok(config)
}
