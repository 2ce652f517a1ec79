//!
//! Struct for storing sampling results
//!
use crate::common::{Label, Sequence, StateIndex, SymbolIndex};
use itertools::Itertools;

///
/// Sampled path of an HMM: the (state, symbol) pair of every position.
///
/// It keeps its own copy of the state and symbol labels, so it outlives the
/// model it was sampled from.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSequence {
    states: Vec<Label>,
    symbols: Vec<Label>,
    path: Vec<(StateIndex, SymbolIndex)>,
}

///
/// Maximal stretch of consecutive positions sharing one hidden state.
///
#[derive(Debug, Clone, PartialEq)]
pub struct StateRun {
    /// 0-based position of the first element of the run
    pub start: usize,
    pub len: usize,
    pub state: Label,
}

impl GeneratedSequence {
    pub(crate) fn new(
        states: Vec<Label>,
        symbols: Vec<Label>,
        path: Vec<(StateIndex, SymbolIndex)>,
    ) -> Self {
        GeneratedSequence {
            states,
            symbols,
            path,
        }
    }
    pub fn len(&self) -> usize {
        self.path.len()
    }
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
    ///
    /// (state, symbol) labels at position `i` (0-based)
    ///
    pub fn get(&self, i: usize) -> Option<(&str, &str)> {
        self.path.get(i).map(|&(s, o)| self.labels_of(s, o))
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.path.iter().map(move |&(s, o)| self.labels_of(s, o))
    }
    ///
    /// Index pairs into `states()` and `symbols()`
    ///
    pub fn path(&self) -> &[(StateIndex, SymbolIndex)] {
        &self.path
    }
    pub fn states(&self) -> &[Label] {
        &self.states
    }
    pub fn symbols(&self) -> &[Label] {
        &self.symbols
    }
    fn labels_of(&self, s: StateIndex, o: SymbolIndex) -> (&str, &str) {
        (self.states[s].as_str(), self.symbols[o].as_str())
    }
    ///
    /// Create base sequence `Vec<u8>` by concatenating the emitted symbols
    ///
    pub fn to_sequence(&self) -> Sequence {
        self.path
            .iter()
            .flat_map(|&(_, o)| self.symbols[o].bytes())
            .collect()
    }
    ///
    /// Split the hidden state path into runs of a constant state
    ///
    pub fn state_runs(&self) -> Vec<StateRun> {
        let mut start = 0;
        self.path
            .iter()
            .map(|&(s, _)| s)
            .dedup_with_count()
            .map(|(len, s)| {
                let run = StateRun {
                    start,
                    len,
                    state: self.states[s].clone(),
                };
                start += len;
                run
            })
            .collect()
    }
    ///
    /// Count states, symbols and state switches
    ///
    pub fn summary(&self) -> SampleSummary {
        let mut state_counts = vec![0; self.states.len()];
        let mut symbol_counts = vec![0; self.symbols.len()];
        for &(s, o) in self.path.iter() {
            state_counts[s] += 1;
            symbol_counts[o] += 1;
        }
        let n_switches = self
            .path
            .iter()
            .tuple_windows()
            .filter(|((s1, _), (s2, _))| s1 != s2)
            .count();
        SampleSummary {
            length: self.len(),
            states: self.states.iter().cloned().zip(state_counts).collect(),
            symbols: self.symbols.iter().cloned().zip(symbol_counts).collect(),
            n_switches,
        }
    }
}

///
/// Counts of a generated sequence
///
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub length: usize,
    /// occupancy of each state, in model order
    pub states: Vec<(Label, usize)>,
    /// occurrence of each symbol, in model order
    pub symbols: Vec<(Label, usize)>,
    /// number of positions whose state differs from the previous one
    pub n_switches: usize,
}

impl SampleSummary {
    ///
    /// Fraction of positions emitting one of `symbols`, e.g. `["C", "G"]` for GC content.
    ///
    pub fn fraction_of_symbols(&self, symbols: &[&str]) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        let n: usize = self
            .symbols
            .iter()
            .filter(|(label, _)| symbols.contains(&label.as_str()))
            .map(|(_, count)| count)
            .sum();
        n as f64 / self.length as f64
    }
    pub fn count_of_state(&self, state: &str) -> Option<usize> {
        self.states
            .iter()
            .find(|(label, _)| label == state)
            .map(|(_, count)| *count)
    }
}

impl std::fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let states = self
            .states
            .iter()
            .map(|(label, count)| format!("{}={}", label, count))
            .join(",");
        let symbols = self
            .symbols
            .iter()
            .map(|(label, count)| format!("{}={}", label, count))
            .join(",");
        write!(
            f,
            "length={} states[{}] symbols[{}] switches={}",
            self.length, states, symbols, self.n_switches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{labels, NUCLEOTIDES};

    fn example() -> GeneratedSequence {
        // AT AT GC GC GC AT
        GeneratedSequence::new(
            labels(&["AT-rich", "GC-rich"]),
            labels(&NUCLEOTIDES),
            vec![(0, 0), (0, 3), (1, 2), (1, 1), (1, 2), (0, 0)],
        )
    }

    #[test]
    fn accessors() {
        let s = example();
        assert_eq!(s.len(), 6);
        assert!(!s.is_empty());
        assert_eq!(s.get(2), Some(("GC-rich", "G")));
        assert_eq!(s.get(6), None);
        assert_eq!(s.iter().count(), 6);
        assert_eq!(s.to_sequence(), b"ATGCGA".to_vec());
    }

    #[test]
    fn multi_char_symbols_are_concatenated() {
        let s = GeneratedSequence::new(
            labels(&["x"]),
            labels(&["ab", "c"]),
            vec![(0, 0), (0, 1), (0, 0)],
        );
        assert_eq!(s.to_sequence(), b"abcab".to_vec());
    }

    #[test]
    fn runs() {
        let runs = example().state_runs();
        assert_eq!(
            runs,
            vec![
                StateRun {
                    start: 0,
                    len: 2,
                    state: "AT-rich".to_string()
                },
                StateRun {
                    start: 2,
                    len: 3,
                    state: "GC-rich".to_string()
                },
                StateRun {
                    start: 5,
                    len: 1,
                    state: "AT-rich".to_string()
                },
            ]
        );
    }

    #[test]
    fn summary() {
        let summary = example().summary();
        assert_eq!(summary.length, 6);
        assert_eq!(summary.n_switches, 2);
        assert_eq!(summary.count_of_state("AT-rich"), Some(3));
        assert_eq!(summary.count_of_state("GC-rich"), Some(3));
        assert_eq!(summary.count_of_state("N"), None);
        assert_abs_diff_eq!(summary.fraction_of_symbols(&["C", "G"]), 0.5);
        assert_eq!(
            summary.to_string(),
            "length=6 states[AT-rich=3,GC-rich=3] symbols[A=2,C=1,G=2,T=1] switches=2"
        );
    }
}
