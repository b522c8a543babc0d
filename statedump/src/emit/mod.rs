use std::io::{self, Write};

use statedump_source::{DataSource, SourceError};
use thiserror::Error;

pub mod biome;
pub mod block_state;

/// Indentation of every entry inside a generated table.
const INDENT: &str = "    ";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to write table: {0}")]
    Io(#[from] io::Error),
    #[error("Data source failed: {0}")]
    Source(#[from] SourceError),
    #[error("Block registry is not in ascending id order: {id:#06x} follows {previous:#06x}")]
    RegistryOrder { previous: u16, id: u16 },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DumpSummary {
    /// Occupied biome slots.
    pub biomes: usize,
    pub resolved_blocks: usize,
    /// Blocks written as comments instead of table rows.
    pub diagnostics: usize,
}

/// Writes the biome table, a blank line and the block state table.
///
/// A failure can leave `out` holding a partial dump, so callers should render
/// into a buffer and only publish it once this returns `Ok`.
pub fn render<S: DataSource, W: Write>(
    source: &S,
    out: &mut W,
) -> Result<DumpSummary, TableError> {
    let slots = source.biome_slots()?;
    let biomes = biome::write_biome_table(out, &slots)?;
    writeln!(out)?;
    let blocks = block_state::write_block_state_table(out, source)?;

    Ok(DumpSummary {
        biomes,
        resolved_blocks: blocks.resolved,
        diagnostics: blocks.diagnostics,
    })
}
