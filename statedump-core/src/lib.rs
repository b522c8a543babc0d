pub mod biome;
pub mod block;
pub mod path;

pub use biome::{BiomeError, BiomeRecord, BiomeSlots, BIOME_SLOTS};
pub use block::{BlockEntry, Unresolved};
pub use path::{NamespacedPath, MINECRAFT_NAMESPACE};
