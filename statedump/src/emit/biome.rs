use std::io::{self, Write};

use statedump_core::{BiomeSlots, BIOME_SLOTS};

use super::INDENT;

/// Consecutive `None` entries that share one line.
const EMPTY_RUN_WRAP: usize = 16;

/// Writes the `BIOMES` array and returns the number of occupied slots.
///
/// Every slot gets an entry so the array index stays the biome id. Runs of
/// empty slots are packed [`EMPTY_RUN_WRAP`] to a line, counted from the start
/// of the run rather than from the slot index.
pub fn write_biome_table<W: Write>(out: &mut W, slots: &BiomeSlots) -> io::Result<usize> {
    writeln!(out, "// (name, temperature, humidity)")?;
    write!(
        out,
        "pub static BIOMES: [Option<(&'static str, f32, f32)>; {BIOME_SLOTS}] = ["
    )?;

    slots
        .iter()
        .try_fold(0usize, |empty_run, slot| -> io::Result<usize> {
            match slot {
                None => {
                    if empty_run % EMPTY_RUN_WRAP == 0 {
                        write!(out, "\n{INDENT}None,")?;
                    } else {
                        write!(out, " None,")?;
                    }
                    Ok(empty_run + 1)
                }
                Some(biome) => {
                    write!(
                        out,
                        "\n{INDENT}Some(({:?}, {}, {})),",
                        biome.name,
                        one_decimal(biome.temperature),
                        one_decimal(biome.humidity)
                    )?;
                    Ok(0)
                }
            }
        })?;

    writeln!(out, "\n];")?;
    Ok(slots.occupied())
}

/// Formats `value` with one fractional digit, rounding ties away from zero.
///
/// The rounding works on the shortest decimal form of the value widened to
/// `f64`, so `0.25` becomes `0.3` while `0.35` (stored as `0.3499999940...`)
/// stays `0.3`. `{:.1}` would round exact ties to even instead.
fn one_decimal(value: f32) -> String {
    let shortest = f64::from(value).to_string();
    let (sign, magnitude) = match shortest.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude),
        None => ("", shortest.as_str()),
    };
    let (whole, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));
    let mut fraction = fraction.bytes();
    let tenths = fraction.next().unwrap_or(b'0');
    let round_up = fraction.next().is_some_and(|digit| digit >= b'5');

    // All digits of the result with the decimal point left out.
    let mut digits: Vec<u8> = whole.bytes().chain([tenths]).collect();
    if round_up {
        let carried = digits.iter_mut().rev().all(|digit| {
            if *digit == b'9' {
                *digit = b'0';
                true
            } else {
                *digit += 1;
                false
            }
        });
        if carried {
            digits.insert(0, b'1');
        }
    }

    let (whole, tenths) = digits.split_at(digits.len() - 1);
    let whole: String = whole.iter().copied().map(char::from).collect();
    format!("{sign}{whole}.{}", char::from(tenths[0]))
}
