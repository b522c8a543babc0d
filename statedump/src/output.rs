use std::{
    ffi::OsString,
    fmt,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use statedump_config::OutputConfig;

/// Where a finished dump goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl From<&OutputConfig> for Output {
    fn from(config: &OutputConfig) -> Self {
        match &config.path {
            Some(path) => Self::File(path.clone()),
            None => Self::Stdout,
        }
    }
}

impl Output {
    /// Publishes a complete dump. A file is only replaced once the new
    /// content has been fully written next to it.
    pub fn publish(&self, contents: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(contents)?;
                stdout.flush()
            }
            Self::File(path) => {
                let temporary = temporary_path(path);
                let result = write_and_rename(&temporary, path, contents);
                if result.is_err() {
                    let _ = fs::remove_file(&temporary);
                }
                result
            }
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn write_and_rename(temporary: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(temporary)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(temporary, path)
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use std::process;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("statedump-{name}-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn config_selects_destination() {
        assert_eq!(Output::from(&OutputConfig::default()), Output::Stdout);
        let config = OutputConfig {
            path: Some(PathBuf::from("data.rs")),
        };
        assert_eq!(Output::from(&config), Output::File(PathBuf::from("data.rs")));
    }

    #[test]
    fn replaces_file_without_leaving_temporary() {
        let dir = scratch_dir("replace");
        let path = dir.join("data.rs");
        fs::write(&path, "old").unwrap();

        Output::File(path.clone()).publish(b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.join("data.rs.tmp").exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn failed_publish_leaves_nothing_behind() {
        let dir = scratch_dir("missing");
        let path = dir.join("no-such-dir").join("data.rs");

        assert!(Output::File(path.clone()).publish(b"data").is_err());
        assert!(!path.exists());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn temporary_sits_next_to_target() {
        assert_eq!(
            temporary_path(Path::new("src/minecraft/data.rs")),
            PathBuf::from("src/minecraft/data.rs.tmp")
        );
    }
}
