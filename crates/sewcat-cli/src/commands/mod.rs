//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::Path;

use tracing::debug;

use sewcat_core::models::config::SewcatConfig;

/// Load configuration from an explicit path, else the default location.
///
/// A missing default file is not an error; built-in defaults apply.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SewcatConfig> {
    if let Some(path) = config_path {
        return Ok(SewcatConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(SewcatConfig::from_file(&default_path)?)
    } else {
        Ok(SewcatConfig::default())
    }
}
