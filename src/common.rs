use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use log::info;

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("GIT_VERSION");
pub const PROJECT_VERSION_HASH: &str = env!("GIT_HASH");

/// Environment variable to override the config directory.
///
/// Example usage in tests:
///   export PROMPTKIT_CONFIG_DIR="/tmp/test-config/promptkit"
const ENV_CONFIG_DIR_OVERRIDE: &str = "PROMPTKIT_CONFIG_DIR";

/// Returns the project data directory, creating it if needed.
///
/// Returns: Path to `~/.local/share/promptkit` (or equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set"))?;

    let project_data_dir = data_dir.join(PROJECT_NAME);

    fs::create_dir_all(&project_data_dir).with_context(|| {
        format!("Unable to create directory: {}", project_data_dir.display())
    })?;

    Ok(project_data_dir)
}

/// Returns the project config directory without creating it.
///
/// If `PROMPTKIT_CONFIG_DIR` is set, uses that path directly (must be
/// absolute). Otherwise falls back to `dirs::config_dir()/promptkit`.
pub fn project_config_dir() -> Result<PathBuf> {
    if let Ok(override_dir) = env::var(ENV_CONFIG_DIR_OVERRIDE) {
        let path = PathBuf::from(&override_dir);

        if !path.is_absolute() {
            bail!("{ENV_CONFIG_DIR_OVERRIDE} must be an absolute path: {override_dir}");
        }

        info!("Using config directory override from {ENV_CONFIG_DIR_OVERRIDE}: {}", path.display());
        return Ok(path);
    }

    let config_dir = dirs::config_dir().ok_or_else(|| anyhow!("Unable to determine config directory. Ensure XDG_CONFIG_HOME or HOME environment variable is set"))?;
    Ok(config_dir.join(PROJECT_NAME))
}

pub fn print_header() {
    println!("{PROJECT_NAME} {PROJECT_VERSION} ({PROJECT_VERSION_HASH})");
}
