use std::{
    fs,
    path::{Path, PathBuf},
};

use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

pub mod logging;

/// Everything the dump run can be told. There are no command line flags, so
/// the defaults reproduce a plain dump of `snapshot.json` to stdout.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DumpConfiguration {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON snapshot of the host registries.
    pub snapshot: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("snapshot.json"),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// File that receives the generated tables. Stdout when unset.
    pub path: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}: {kind}")]
    Io {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },
    #[error("Couldn't parse configuration at {path:?}. Reason: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub trait LoadTomlConfiguration {
    /// Loads the configuration from its default location, falling back to the
    /// defaults when no file exists.
    fn load() -> Result<Self, ConfigError>
    where
        Self: Sized + Default + DeserializeOwned,
    {
        Self::load_from(Self::get_path())
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + DeserializeOwned,
    {
        let config = if path.exists() {
            let file_content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
                path: path.to_path_buf(),
                kind: err.kind(),
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.to_path_buf(),
                message: err.message().to_string(),
            })?
        } else {
            log::debug!("No configuration at {path:?}, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadTomlConfiguration for DumpConfiguration {
    fn get_path() -> &'static Path {
        Path::new("statedump.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.snapshot.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "source.snapshot must not be empty".to_string(),
            ));
        }
        if let Some(path) = &self.output.path {
            if path.file_name().is_none() {
                return Err(ConfigError::Invalid(format!(
                    "output.path {path:?} does not name a file"
                )));
            }
        }
        Ok(())
    }
}
