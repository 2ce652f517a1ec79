use crate::error::Result;
use crate::hmm::{gc_isochore, GeneratedSequence, HmmModel};
use crate::io::fasta::write_fasta;
use crate::io::model_file::{load_model, ModelFile};
use crate::output::{write_json, write_positions};
use log::{info, warn};
use std::io::Write;
use std::path::Path;

///
/// Presentation of a generated sequence
///
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// `Position i, State s, Nucleotide = o` per line
    Positions,
    /// emitted symbols as a FASTA record
    Fasta,
    /// JSON array of positions
    Json,
}

///
/// Load the model file if given, or fall back to the GC isochore preset.
///
pub fn load_or_preset(model: Option<&Path>) -> Result<HmmModel> {
    match model {
        Some(path) => {
            info!("loading model from {}", path.display());
            load_model(path)
        }
        None => {
            info!("using the built-in GC isochore model");
            Ok(gc_isochore())
        }
    }
}

pub fn generate<W: Write>(
    mut writer: W,
    model: &HmmModel,
    length: usize,
    seed: u64,
    format: OutputFormat,
) -> Result<GeneratedSequence> {
    let seq = model.sample_from_seed(length, seed)?;
    match format {
        OutputFormat::Positions => write_positions(&mut writer, &seq)?,
        OutputFormat::Fasta => write_fasta(&mut writer, &format!("hmmseq_seed{}", seed), &seq)?,
        OutputFormat::Json => write_json(&mut writer, &seq)?,
    }
    Ok(seq)
}

///
/// Log the counts and the isochore structure of `seq`
///
pub fn summarize(seq: &GeneratedSequence) {
    let summary = seq.summary();
    info!("summary {}", summary);
    if seq.symbols().iter().any(|s| s == "G") && seq.symbols().iter().any(|s| s == "C") {
        info!("gc_content={:.3}", summary.fraction_of_symbols(&["G", "C"]));
    }
    for run in seq.state_runs() {
        info!("run start={} len={} state={}", run.start + 1, run.len, run.state);
    }
}

///
/// Write the GC isochore preset as a JSON model file
///
pub fn preset<W: Write>(mut writer: W) -> Result<()> {
    let json = ModelFile::from_model(&gc_isochore()).to_json_string()?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

///
/// Load and validate a model file, reporting the parameters
///
pub fn validate<W: Write>(mut writer: W, path: &Path) -> Result<HmmModel> {
    match load_model(path) {
        Ok(model) => {
            writeln!(writer, "{}: ok", path.display())?;
            write!(writer, "{}", model)?;
            Ok(model)
        }
        Err(e) => {
            warn!("{} is not a valid model", path.display());
            Err(e)
        }
    }
}
