use serde::Deserialize;

#[derive(Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: LevelFilter,
    /// Let `RUST_LOG` override `level`.
    pub env: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::Info,
            env: false,
            color: true,
            timestamp: true,
        }
    }
}

/// `level` as written in `statedump.toml`, mapped onto `log::LevelFilter` at startup.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LevelFilter {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
