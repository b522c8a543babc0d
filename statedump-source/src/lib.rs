use std::fmt::Display;

use statedump_core::{BiomeError, BiomeSlots, NamespacedPath, BIOME_SLOTS};
use thiserror::Error;

pub mod memory;
pub mod snapshot;

pub use memory::MemorySource;
pub use snapshot::SnapshotSource;

/// Read-only view over an initialized host: the biome table, the block
/// registry and the block state paths.
///
/// Implementations must hand out the same data for the whole run.
pub trait DataSource {
    type BlockKey: Display;

    /// All biome slots in index order, empty ones included.
    fn biome_slots(&self) -> Result<BiomeSlots, SourceError>;

    /// Block registry entries in ascending id order. Ids do not have to be
    /// contiguous, but each id may only appear once.
    fn blocks(&self) -> Result<impl Iterator<Item = (u16, &Self::BlockKey)> + '_, SourceError>;

    fn resolve_path(&self, key: &Self::BlockKey) -> Option<NamespacedPath>;
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Snapshot not found")]
    Unavailable,
    #[error("Io error: {0}")]
    IoError(std::io::ErrorKind),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Biome id {0} does not fit in the {} slot biome table", BIOME_SLOTS)]
    BiomeSlotOutOfRange(u16),
    #[error("Malformed biome: {0}")]
    Biome(#[from] BiomeError),
}

impl From<std::io::Error> for SourceError {
    fn from(value: std::io::Error) -> Self {
        match value.kind() {
            std::io::ErrorKind::NotFound => Self::Unavailable,
            value => Self::IoError(value),
        }
    }
}
