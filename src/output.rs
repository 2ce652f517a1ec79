//!
//! Text and JSON presentation of generated sequences
//!
use crate::error::Result;
use crate::hmm::GeneratedSequence;
use serde::Serialize;
use std::io::Write;

///
/// `Position i, State <s>, Nucleotide = <o>` line of 1-based position `i`
///
pub fn position_line(i: usize, state: &str, symbol: &str) -> String {
    format!("Position {}, State {}, Nucleotide = {}", i, state, symbol)
}

///
/// Write one `position_line` per position
///
pub fn write_positions<W: Write>(mut writer: W, seq: &GeneratedSequence) -> Result<()> {
    for (i, (state, symbol)) in seq.iter().enumerate() {
        writeln!(writer, "{}", position_line(i + 1, state, symbol))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct PositionRecord<'a> {
    position: usize,
    state: &'a str,
    symbol: &'a str,
}

///
/// Write the sequence as a JSON array of `{position, state, symbol}`
///
pub fn write_json<W: Write>(mut writer: W, seq: &GeneratedSequence) -> Result<()> {
    let records: Vec<PositionRecord> = seq
        .iter()
        .enumerate()
        .map(|(i, (state, symbol))| PositionRecord {
            position: i + 1,
            state,
            symbol,
        })
        .collect();
    serde_json::to_writer(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}
