//! Where the per-user config lives, and first-run template creation.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use duckchat_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

/// `<config dir>/duckchat/config.toml`, e.g. `~/.config/duckchat/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("duckchat").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is never overwritten.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already present, template not written");
            return Ok(());
        }
        Err(e) => return Err(io_error(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(io_error)?;

    info!("wrote default config to {}", path.display());
    Ok(())
}
