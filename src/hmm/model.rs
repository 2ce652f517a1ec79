//!
//! HmmModel: validated parameters of the hidden Markov model
//!
use crate::common::{labels, Label, StateIndex, SymbolIndex, NUCLEOTIDES};
use crate::error::{HmmError, Result};
use log::debug;

///
/// Allowed deviation of a distribution's sum from `1.0`.
///
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

///
/// Parameters of a discrete HMM over labelled states and symbols.
///
/// * `initial[s]` probability that the first position is in state `s`
/// * `transition[s][t]` probability of moving from state `s` to `t`
/// * `emission[s][o]` probability that state `s` emits symbol `o`
///
/// Matrices are indexed in the order of `states` (rows, and columns of
/// `transition`) and `symbols` (columns of `emission`). An `HmmModel` can
/// only be built through `HmmModel::new`, so every instance is valid.
///
#[derive(Debug, Clone, PartialEq)]
pub struct HmmModel {
    states: Vec<Label>,
    symbols: Vec<Label>,
    initial: Vec<f64>,
    transition: Vec<Vec<f64>>,
    emission: Vec<Vec<f64>>,
}

impl HmmModel {
    ///
    /// Build a model, checking dimensions first and distributions second.
    ///
    pub fn new(
        states: Vec<Label>,
        symbols: Vec<Label>,
        initial: Vec<f64>,
        transition: Vec<Vec<f64>>,
        emission: Vec<Vec<f64>>,
    ) -> Result<HmmModel> {
        let n = states.len();
        let m = symbols.len();

        // dimensions
        if n == 0 {
            return Err(HmmError::dimension("states", 1, 0));
        }
        if m == 0 {
            return Err(HmmError::dimension("symbols", 1, 0));
        }
        check_unique(&states)?;
        check_unique(&symbols)?;
        check_dimension("initial", n, initial.len())?;
        check_dimension("transition rows", n, transition.len())?;
        for (state, row) in states.iter().zip(transition.iter()) {
            check_dimension(&format!("transition row `{}`", state), n, row.len())?;
        }
        check_dimension("emission rows", n, emission.len())?;
        for (state, row) in states.iter().zip(emission.iter()) {
            check_dimension(&format!("emission row `{}`", state), m, row.len())?;
        }

        // distributions
        check_distribution("initial", &initial)?;
        for (state, row) in states.iter().zip(transition.iter()) {
            check_distribution(&format!("transition row `{}`", state), row)?;
        }
        for (state, row) in states.iter().zip(emission.iter()) {
            check_distribution(&format!("emission row `{}`", state), row)?;
        }

        debug!("model with {} states and {} symbols", n, m);
        Ok(HmmModel {
            states,
            symbols,
            initial,
            transition,
            emission,
        })
    }
    pub fn states(&self) -> &[Label] {
        &self.states
    }
    pub fn symbols(&self) -> &[Label] {
        &self.symbols
    }
    pub fn n_states(&self) -> usize {
        self.states.len()
    }
    pub fn n_symbols(&self) -> usize {
        self.symbols.len()
    }
    pub fn initial(&self) -> &[f64] {
        &self.initial
    }
    pub fn transition(&self) -> &[Vec<f64>] {
        &self.transition
    }
    pub fn emission(&self) -> &[Vec<f64>] {
        &self.emission
    }
    ///
    /// Distribution of the next state given the current state `s`
    ///
    pub fn transition_row(&self, s: StateIndex) -> &[f64] {
        &self.transition[s]
    }
    ///
    /// Distribution of the emitted symbol given the state `s`
    ///
    pub fn emission_row(&self, s: StateIndex) -> &[f64] {
        &self.emission[s]
    }
    pub fn state_index(&self, label: &str) -> Option<StateIndex> {
        self.states.iter().position(|s| s == label)
    }
    pub fn symbol_index(&self, label: &str) -> Option<SymbolIndex> {
        self.symbols.iter().position(|s| s == label)
    }
}

///
/// Two-state isochore model of DNA.
///
/// `AT-rich` regions prefer `A`/`T`, `GC-rich` regions prefer `C`/`G`,
/// and `GC-rich` regions are stickier than `AT-rich` ones.
///
pub fn gc_isochore() -> HmmModel {
    HmmModel {
        states: labels(&["AT-rich", "GC-rich"]),
        symbols: labels(&NUCLEOTIDES),
        initial: vec![0.5, 0.5],
        transition: vec![vec![0.7, 0.3], vec![0.1, 0.9]],
        emission: vec![vec![0.39, 0.10, 0.10, 0.41], vec![0.10, 0.41, 0.39, 0.10]],
    }
}

fn check_dimension(what: &str, expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(HmmError::dimension(what, expected, got))
    }
}

fn check_unique(names: &[Label]) -> Result<()> {
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(HmmError::DuplicateLabel(name.clone()));
        }
    }
    Ok(())
}

///
/// Check that `probs` is a probability distribution:
/// every entry in `[0, 1]` and the sum is `1` within `DISTRIBUTION_TOLERANCE`.
///
pub fn check_distribution(what: &str, probs: &[f64]) -> Result<()> {
    for (i, &p) in probs.iter().enumerate() {
        // NaN is rejected here too
        if !(0.0..=1.0).contains(&p) {
            return Err(HmmError::distribution(
                what,
                format!("entry #{} is {} (outside [0, 1])", i, p),
            ));
        }
    }
    let sum: f64 = probs.iter().sum();
    if !abs_diff_eq!(sum, 1.0, epsilon = DISTRIBUTION_TOLERANCE) {
        return Err(HmmError::distribution(what, format!("sums to {}", sum)));
    }
    Ok(())
}

impl std::fmt::Display for HmmModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "states: {}", self.states.join(","))?;
        writeln!(f, "symbols: {}", self.symbols.join(","))?;
        for (state, p) in self.states.iter().zip(self.initial.iter()) {
            writeln!(f, "initial[{}]: {}", state, p)?;
        }
        for (state, row) in self.states.iter().zip(self.transition.iter()) {
            for (next, p) in self.states.iter().zip(row.iter()) {
                writeln!(f, "transition[{}->{}]: {}", state, next, p)?;
            }
        }
        for (state, row) in self.states.iter().zip(self.emission.iter()) {
            let cells: Vec<String> = self
                .symbols
                .iter()
                .zip(row.iter())
                .map(|(symbol, p)| format!("{}:{}", symbol, p))
                .collect();
            writeln!(f, "emission[{}]: {}", state, cells.join(" "))?;
        }
        Ok(())
    }
}
