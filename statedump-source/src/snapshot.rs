use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use statedump_core::{BiomeRecord, BiomeSlots, NamespacedPath};

use crate::{DataSource, SourceError};

/// Registry snapshot written out by the host-side dumper, stored as JSON.
pub struct SnapshotSource {
    biomes: Vec<JsonBiome>,
    blocks: Vec<JsonBlock>,
    block_states: HashMap<String, NamespacedPath>,
}

#[derive(Deserialize)]
struct JsonSnapshot {
    #[serde(default)]
    biomes: Vec<JsonBiome>,
    #[serde(default)]
    blocks: Vec<JsonBlock>,
    #[serde(default)]
    block_states: HashMap<String, NamespacedPath>,
}

#[derive(Deserialize, Clone, Debug)]
struct JsonBiome {
    id: u16,
    name: String,
    temperature: f32,
    humidity: f32,
}

#[derive(Deserialize, Clone, Debug)]
struct JsonBlock {
    id: u16,
    key: String,
}

impl SnapshotSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, SourceError> {
        let snapshot: JsonSnapshot = serde_json::from_str(content)
            .map_err(|e| SourceError::DeserializationError(e.to_string()))?;

        log::debug!(
            "Loaded snapshot with {} biomes, {} blocks and {} block state paths",
            snapshot.biomes.len(),
            snapshot.blocks.len(),
            snapshot.block_states.len()
        );

        Ok(Self {
            biomes: snapshot.biomes,
            blocks: snapshot.blocks,
            block_states: snapshot.block_states,
        })
    }
}

impl DataSource for SnapshotSource {
    type BlockKey = String;

    fn biome_slots(&self) -> Result<BiomeSlots, SourceError> {
        let mut slots = BiomeSlots::new();
        for biome in &self.biomes {
            let index =
                u8::try_from(biome.id).map_err(|_| SourceError::BiomeSlotOutOfRange(biome.id))?;
            slots.insert(BiomeRecord::new(
                index,
                biome.name.clone(),
                biome.temperature,
                biome.humidity,
            )?)?;
        }
        Ok(slots)
    }

    fn blocks(&self) -> Result<impl Iterator<Item = (u16, &String)> + '_, SourceError> {
        Ok(self.blocks.iter().map(|block| (block.id, &block.key)))
    }

    fn resolve_path(&self, key: &String) -> Option<NamespacedPath> {
        self.block_states.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use statedump_core::BiomeError;

    use super::*;

    fn sample() -> SnapshotSource {
        let path = PathBuf::from("test-files")
            .join("sample-1")
            .join("snapshot.json");
        SnapshotSource::open(&path).unwrap()
    }

    #[test]
    fn test_snapshot_reading() {
        let source = sample();

        let slots = source.biome_slots().unwrap();
        assert_eq!(slots.occupied(), 4);
        let swampland = slots.get(6).unwrap();
        assert_eq!(swampland.name, "Swampland");
        assert_eq!(swampland.temperature, 0.8);
        assert_eq!(swampland.humidity, 0.9);

        let blocks: Vec<(u16, &str)> = source
            .blocks()
            .unwrap()
            .map(|(id, key)| (id, key.as_str()))
            .collect();
        assert_eq!(blocks.first(), Some(&(0, "air")));
        assert_eq!(blocks.len(), 6);

        assert_eq!(
            source.resolve_path(&"stone".to_string()),
            Some(NamespacedPath::new("minecraft", "stone", "normal"))
        );
        assert_eq!(source.resolve_path(&"fire".to_string()), None);
    }

    #[test]
    fn missing_snapshot_is_unavailable() {
        let err = SnapshotSource::open(Path::new("test-files/does-not-exist.json"))
            .err()
            .unwrap();
        assert!(matches!(err, SourceError::Unavailable));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = SnapshotSource::from_json("{\"blocks\": [{\"id\": 0}]}")
            .err()
            .unwrap();
        assert!(matches!(err, SourceError::DeserializationError(_)));
    }

    #[test]
    fn empty_snapshot_has_only_empty_slots() {
        let source = SnapshotSource::from_json("{}").unwrap();
        assert_eq!(source.biome_slots().unwrap().occupied(), 0);
        assert_eq!(source.blocks().unwrap().count(), 0);
    }

    #[test]
    fn rejects_biome_outside_table() {
        let source = SnapshotSource::from_json(
            r#"{"biomes": [{"id": 256, "name": "Void", "temperature": 0.5, "humidity": 0.5}]}"#,
        )
        .unwrap();
        assert!(matches!(
            source.biome_slots(),
            Err(SourceError::BiomeSlotOutOfRange(256))
        ));
    }

    #[test]
    fn rejects_nameless_biome() {
        let source = SnapshotSource::from_json(
            r#"{"biomes": [{"id": 3, "name": "", "temperature": 0.5, "humidity": 0.5}]}"#,
        )
        .unwrap();
        assert!(matches!(
            source.biome_slots(),
            Err(SourceError::Biome(BiomeError::EmptyName(3)))
        ));
    }
}
