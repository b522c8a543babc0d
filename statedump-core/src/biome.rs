use thiserror::Error;

/// Number of biome ids the host reserves, used or not.
pub const BIOME_SLOTS: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct BiomeRecord {
    /// Position in the biome table. This is the biome's id.
    pub index: u8,
    pub name: String,
    pub temperature: f32,
    pub humidity: f32,
}

impl BiomeRecord {
    pub fn new(
        index: u8,
        name: impl Into<String>,
        temperature: f32,
        humidity: f32,
    ) -> Result<Self, BiomeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BiomeError::EmptyName(index));
        }
        if !temperature.is_finite() || !humidity.is_finite() {
            return Err(BiomeError::NonFiniteClimate { index, name });
        }
        Ok(Self {
            index,
            name,
            temperature,
            humidity,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum BiomeError {
    #[error("Biome in slot {0} has an empty name")]
    EmptyName(u8),
    #[error("Biome {name:?} in slot {index} has a non-finite temperature or humidity")]
    NonFiniteClimate { index: u8, name: String },
    #[error("Slot {index} is claimed by both {existing:?} and {incoming:?}")]
    SlotOccupied {
        index: u8,
        existing: String,
        incoming: String,
    },
}

/// Fixed-size biome table. Empty slots are kept so that every record stays at
/// its own index.
#[derive(Debug, Clone)]
pub struct BiomeSlots {
    slots: Box<[Option<BiomeRecord>; BIOME_SLOTS]>,
}

impl BiomeSlots {
    pub fn new() -> Self {
        Self {
            slots: Box::new(std::array::from_fn(|_| None)),
        }
    }

    pub fn from_records(
        records: impl IntoIterator<Item = BiomeRecord>,
    ) -> Result<Self, BiomeError> {
        let mut slots = Self::new();
        for record in records {
            slots.insert(record)?;
        }
        Ok(slots)
    }

    pub fn insert(&mut self, record: BiomeRecord) -> Result<(), BiomeError> {
        let slot = &mut self.slots[usize::from(record.index)];
        if let Some(existing) = slot.as_ref() {
            return Err(BiomeError::SlotOccupied {
                index: record.index,
                existing: existing.name.clone(),
                incoming: record.name,
            });
        }
        *slot = Some(record);
        Ok(())
    }

    pub fn get(&self, index: u8) -> Option<&BiomeRecord> {
        self.slots[usize::from(index)].as_ref()
    }

    /// All slots in index order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = Option<&BiomeRecord>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for BiomeSlots {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swampland() -> BiomeRecord {
        BiomeRecord::new(6, "Swampland", 0.8, 0.9).unwrap()
    }

    #[test]
    fn always_has_every_slot() {
        let slots = BiomeSlots::from_records([swampland()]).unwrap();
        assert_eq!(slots.iter().count(), BIOME_SLOTS);
        assert_eq!(slots.occupied(), 1);
    }

    #[test]
    fn records_land_at_their_index() {
        let slots = BiomeSlots::from_records([swampland()]).unwrap();
        let position = slots.iter().position(|slot| slot.is_some());
        assert_eq!(position, Some(6));
        assert_eq!(slots.get(6).map(|biome| biome.name.as_str()), Some("Swampland"));
        assert_eq!(slots.get(5), None);
    }

    #[test]
    fn last_slot_is_usable() {
        let last = BiomeRecord::new(255, "Edge", 0.0, 0.0).unwrap();
        let slots = BiomeSlots::from_records([last]).unwrap();
        assert!(slots.iter().last().flatten().is_some());
    }

    #[test]
    fn rejects_slot_collision() {
        let other = BiomeRecord::new(6, "Bayou", 0.9, 0.9).unwrap();
        let err = BiomeSlots::from_records([swampland(), other]).unwrap_err();
        assert_eq!(
            err,
            BiomeError::SlotOccupied {
                index: 6,
                existing: "Swampland".to_string(),
                incoming: "Bayou".to_string(),
            }
        );
    }

    #[test]
    fn rejects_malformed_records() {
        assert_eq!(
            BiomeRecord::new(1, "", 0.5, 0.5).unwrap_err(),
            BiomeError::EmptyName(1)
        );
        assert!(matches!(
            BiomeRecord::new(2, "Plains", f32::NAN, 0.4),
            Err(BiomeError::NonFiniteClimate { index: 2, .. })
        ));
        assert!(BiomeRecord::new(3, "Desert", 2.0, f32::INFINITY).is_err());
    }
}
