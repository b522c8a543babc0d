use std::io::Write;

use statedump_core::BlockEntry;
use statedump_source::DataSource;

use super::{TableError, INDENT};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockTableStats {
    pub resolved: usize,
    pub diagnostics: usize,
}

/// Writes the `BLOCK_STATES` table in registry order.
///
/// Blocks whose path is missing, malformed or outside the `minecraft`
/// namespace are written as comments so they stay visible in the generated
/// file without becoming table rows.
pub fn write_block_state_table<S: DataSource, W: Write>(
    out: &mut W,
    source: &S,
) -> Result<BlockTableStats, TableError> {
    writeln!(out, "// (id, name, variant)")?;
    writeln!(
        out,
        "pub static BLOCK_STATES: &'static [(u16, &'static str, &'static str)] = &["
    )?;

    let mut stats = BlockTableStats::default();
    let mut previous: Option<u16> = None;
    for (id, key) in source.blocks()? {
        // Duplicate ids would silently shadow each other downstream.
        if let Some(previous) = previous.filter(|&previous| previous >= id) {
            return Err(TableError::RegistryOrder { previous, id });
        }
        previous = Some(id);

        let entry = BlockEntry::new(id, key, source.resolve_path(key));
        match entry.resolution() {
            Ok(path) => {
                writeln!(
                    out,
                    "{INDENT}(0x{:04x}, {:?}, {:?}),",
                    entry.id, path.identifier, path.variant
                )?;
                stats.resolved += 1;
            }
            Err(unresolved) => {
                let key = entry.key.to_string();
                log::debug!(
                    "Block {:04x} {key:?} left out of the table: {unresolved}",
                    entry.id
                );
                writeln!(out, "{INDENT}// {:04x}: {key:?} ({unresolved})", entry.id)?;
                stats.diagnostics += 1;
            }
        }
    }

    writeln!(out, "];")?;
    Ok(stats)
}
