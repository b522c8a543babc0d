use std::{collections::HashMap, fmt::Display, hash::Hash};

use statedump_core::{BiomeRecord, BiomeSlots, NamespacedPath};

use crate::{DataSource, SourceError};

/// A data source assembled in memory, for callers that already hold the
/// registries.
#[derive(Debug, Clone)]
pub struct MemorySource<K> {
    biomes: Vec<BiomeRecord>,
    blocks: Vec<(u16, K)>,
    paths: HashMap<K, NamespacedPath>,
}

impl<K: Display + Eq + Hash> MemorySource<K> {
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            blocks: Vec::new(),
            paths: HashMap::new(),
        }
    }

    pub fn with_biome(mut self, biome: BiomeRecord) -> Self {
        self.biomes.push(biome);
        self
    }

    /// Blocks are handed out in the order they are added.
    pub fn with_block(mut self, id: u16, key: K) -> Self {
        self.blocks.push((id, key));
        self
    }

    pub fn with_path(mut self, key: K, path: impl Into<NamespacedPath>) -> Self {
        self.paths.insert(key, path.into());
        self
    }
}

impl<K: Display + Eq + Hash> Default for MemorySource<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Display + Eq + Hash> DataSource for MemorySource<K> {
    type BlockKey = K;

    fn biome_slots(&self) -> Result<BiomeSlots, SourceError> {
        Ok(BiomeSlots::from_records(self.biomes.iter().cloned())?)
    }

    fn blocks(&self) -> Result<impl Iterator<Item = (u16, &K)> + '_, SourceError> {
        Ok(self.blocks.iter().map(|(id, key)| (*id, key)))
    }

    fn resolve_path(&self, key: &K) -> Option<NamespacedPath> {
        self.paths.get(key).cloned()
    }
}
