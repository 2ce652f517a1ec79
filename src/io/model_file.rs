//!
//! JSON model file: label-keyed tables of probabilities
//!
//! ```json
//! {
//!   "states": ["AT-rich", "GC-rich"],
//!   "symbols": ["A", "C", "G", "T"],
//!   "initial": [0.5, 0.5],
//!   "transition": { "AT-rich": [0.7, 0.3], "GC-rich": [0.1, 0.9] },
//!   "emission": { "AT-rich": [0.39, 0.1, 0.1, 0.41], "GC-rich": [0.1, 0.41, 0.39, 0.1] }
//! }
//! ```
//!
use crate::common::Label;
use crate::error::{HmmError, Result};
use crate::hmm::HmmModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

///
/// Serialized form of `HmmModel`.
///
/// `initial` is ordered as `states`; each row of `transition` (ordered as
/// `states`) and of `emission` (ordered as `symbols`) is keyed by its
/// source state label.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModelFile {
    pub states: Vec<Label>,
    pub symbols: Vec<Label>,
    pub initial: Vec<f64>,
    pub transition: BTreeMap<Label, Vec<f64>>,
    pub emission: BTreeMap<Label, Vec<f64>>,
}

impl ModelFile {
    pub fn from_model(model: &HmmModel) -> Self {
        let keyed = |rows: &[Vec<f64>]| -> BTreeMap<Label, Vec<f64>> {
            model
                .states()
                .iter()
                .cloned()
                .zip(rows.iter().cloned())
                .collect()
        };
        ModelFile {
            states: model.states().to_vec(),
            symbols: model.symbols().to_vec(),
            initial: model.initial().to_vec(),
            transition: keyed(model.transition()),
            emission: keyed(model.emission()),
        }
    }
    ///
    /// Order the keyed rows by `states` and validate them as `HmmModel`.
    ///
    pub fn into_model(self) -> Result<HmmModel> {
        let transition = rows_in_state_order("transition", &self.states, &self.transition)?;
        let emission = rows_in_state_order("emission", &self.states, &self.emission)?;
        HmmModel::new(
            self.states,
            self.symbols,
            self.initial,
            transition,
            emission,
        )
    }
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

///
/// Load and validate a model from a JSON model file
///
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<HmmModel> {
    ModelFile::from_json_file(path)?.into_model()
}

fn rows_in_state_order(
    what: &str,
    states: &[Label],
    rows: &BTreeMap<Label, Vec<f64>>,
) -> Result<Vec<Vec<f64>>> {
    if let Some(label) = rows.keys().find(|label| !states.contains(label)) {
        return Err(HmmError::UnknownLabel(label.clone()));
    }
    states
        .iter()
        .map(|state| {
            rows.get(state)
                .cloned()
                .ok_or_else(|| HmmError::dimension(format!("{} rows", what), states.len(), rows.len()))
        })
        .collect()
}
