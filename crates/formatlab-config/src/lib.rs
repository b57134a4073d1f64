use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use formatlab_core::{normalize_domain, CandidateStyle};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "formatlab";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_domain: Option<String>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub trailing_commas: bool,
}

impl OutputConfig {
    pub fn style(&self) -> CandidateStyle {
        if self.trailing_commas {
            CandidateStyle::Legacy
        } else {
            CandidateStyle::Clean
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_domain: None,
            output: OutputConfig {
                trailing_commas: true,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_domain value: {0:?}")]
    InvalidDefaultDomain(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_domain: Option<String>,
    output: Option<OutputFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    trailing_commas: Option<bool>,
}

/// Loads the config, falling back to defaults when no file exists.
///
/// An explicit `config_path` must point at an existing file.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(domain) = parsed.default_domain {
        // Kept raw; the generator normalizes it like any typed-in domain.
        if normalize_domain(&domain).is_empty() {
            return Err(ConfigError::InvalidDefaultDomain(domain));
        }
        config.default_domain = Some(domain);
    }

    if let Some(output) = parsed.output {
        if let Some(trailing_commas) = output.trailing_commas {
            config.output.trailing_commas = trailing_commas;
        }
    }

    Ok(config)
}
