//! Reading `config.toml`, and writing the documented default on first run.

use std::fmt;
use std::path::{Path, PathBuf};

use gifnorris_common::ConfigError;

use super::template::default_config_toml;
use crate::schema::GifNorrisConfig;
use crate::validation;

const APP_DIR: &str = "gifnorris";
const FILE_NAME: &str = "config.toml";

/// Where a loaded config came from.
///
/// Config is read before the tracing subscriber exists, so the caller logs
/// this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file.
    File(PathBuf),
    /// No file existed, so the default template was written here.
    CreatedDefault(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::File(path) | ConfigSource::CreatedDefault(path) => path,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigSource::CreatedDefault(path) => {
                write!(f, "created default config at {}", path.display())
            }
        }
    }
}

/// `<platform config dir>/gifnorris/config.toml`, e.g.
/// `~/.config/gifnorris/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Parse and validate the TOML file at `path`. Missing fields take defaults.
pub fn load_from_path(path: &Path) -> Result<GifNorrisConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config: GifNorrisConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    validation::validate(&config)?;
    Ok(config)
}

/// Write the commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write = || -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, default_config_toml())
    };

    write().map_err(|e| {
        ConfigError::ParseError(format!("cannot write default config {}: {e}", path.display()))
    })
}

/// Load `path`, or write the default file there if it does not exist yet.
pub fn load_or_create(path: &Path) -> Result<(GifNorrisConfig, ConfigSource), ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok((config, ConfigSource::File(path.to_path_buf()))),
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(path)?;
            Ok((
                GifNorrisConfig::default(),
                ConfigSource::CreatedDefault(path.to_path_buf()),
            ))
        }
        Err(e) => Err(e),
    }
}

/// [`load_or_create`] at [`default_config_path`].
pub fn load_default() -> Result<(GifNorrisConfig, ConfigSource), ConfigError> {
    load_or_create(&default_config_path()?)
}
