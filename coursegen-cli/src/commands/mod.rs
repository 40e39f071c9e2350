//! CLI command implementations.

pub mod build;
pub mod init;
pub mod outline;

pub use build::{build_course, BuildOptions};
pub use init::init_course;
pub use outline::show_outline;

use anyhow::{Context, Result};
use coursegen_core::Config;
use std::path::{Path, PathBuf};

/// Load the config (or defaults) and apply command-line path overrides
pub(crate) fn load_config(
    config_path: &Path,
    content: Option<&Path>,
    output: Option<&Path>,
) -> Result<Config> {
    tracing::debug!("Loading config from {:?}", config_path);
    let mut config =
        Config::load_or_default(config_path).context("Failed to load configuration")?;

    if let Some(content) = content {
        config.paths.content = absolute(content)?;
    }
    if let Some(output) = output {
        config.paths.output = absolute(output)?;
    }
    Ok(config)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(path))
}
