use crate::error::Result;
use crate::hmm::GeneratedSequence;
use bio::io::fasta;
use std::io::Write;

///
/// Write the emitted symbols of `seq` as a single FASTA record.
///
/// The description carries the length and the number of hidden state runs.
///
pub fn write_fasta<W: Write>(writer: W, id: &str, seq: &GeneratedSequence) -> Result<()> {
    let mut w = fasta::Writer::new(writer);
    let desc = format!("length={} runs={}", seq.len(), seq.state_runs().len());
    w.write(id, Some(desc.as_str()), &seq.to_sequence())?;
    w.flush()?;
    Ok(())
}
