use statedump_config::ConfigError;
use statedump_source::SourceError;
use thiserror::Error;

use crate::emit::TableError;

/// Anything that stops a dump. None of these are retried.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("Couldn't open snapshot: {0}")]
    Source(#[from] SourceError),
    #[error("Couldn't generate tables: {0}")]
    Table(#[from] TableError),
    #[error("Couldn't publish output: {0}")]
    Publish(std::io::Error),
}

impl DumpError {
    pub fn log(&self) {
        log::error!("{self}");
        if let Self::Source(SourceError::Unavailable) = self {
            log::info!("Point [source] snapshot in statedump.toml at a registry snapshot");
        }
    }

    /// Process exit status, following the `sysexits.h` conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::Source(SourceError::Unavailable) => 66,
            Self::Source(_)
            | Self::Table(TableError::Source(_) | TableError::RegistryOrder { .. }) => 65,
            Self::Table(TableError::Io(_)) | Self::Publish(_) => 74,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_separate_bad_input_from_io() {
        assert_eq!(DumpError::from(SourceError::Unavailable).exit_code(), 66);
        assert_eq!(
            DumpError::from(TableError::RegistryOrder { previous: 2, id: 1 }).exit_code(),
            65
        );
        assert_eq!(
            DumpError::Publish(std::io::ErrorKind::PermissionDenied.into()).exit_code(),
            74
        );
        assert_eq!(
            DumpError::from(ConfigError::Invalid("bad".to_string())).exit_code(),
            78
        );
    }

    #[test]
    fn messages_carry_the_cause() {
        let err = DumpError::from(TableError::RegistryOrder { previous: 2, id: 1 });
        assert_eq!(
            err.to_string(),
            "Couldn't generate tables: Block registry is not in ascending id order: 0x0001 follows 0x0002"
        );
    }
}
