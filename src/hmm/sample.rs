//!
//! Sampling (state, symbol) sequences forward from the HmmModel
//!
pub mod history;
pub mod picker;

pub use history::{GeneratedSequence, SampleSummary, StateRun};

use super::model::HmmModel;
use crate::error::{HmmError, Result};
use log::{debug, trace};
use picker::pick_index;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

impl HmmModel {
    ///
    /// Sample a path of `length` positions.
    ///
    /// The first state is drawn from `initial` and every following state
    /// from the transition row of its predecessor; each state then emits a
    /// symbol from its emission row. Draws are taken from `rng` in the order
    /// state, symbol, state, symbol, ... so a seeded `rng` reproduces the
    /// same sequence.
    ///
    pub fn sample<R: Rng>(&self, rng: &mut R, length: usize) -> Result<GeneratedSequence> {
        if length < 1 {
            return Err(HmmError::InvalidLength(length));
        }
        let mut path = Vec::with_capacity(length);
        for i in 0..length {
            // 1. transition
            let state = match path.last() {
                None => pick_index(rng, self.initial()),
                Some(&(prev, _)) => pick_index(rng, self.transition_row(prev)),
            };
            // 2. emission
            let symbol = pick_index(rng, self.emission_row(state));
            trace!(
                "position {} state={} symbol={}",
                i + 1,
                self.states()[state],
                self.symbols()[symbol]
            );
            path.push((state, symbol));
        }
        Ok(GeneratedSequence::new(
            self.states().to_vec(),
            self.symbols().to_vec(),
            path,
        ))
    }
    ///
    /// Sample with a `Xoshiro256PlusPlus` seeded from `seed`
    ///
    pub fn sample_from_seed(&self, length: usize, seed: u64) -> Result<GeneratedSequence> {
        debug!("sampling length={} seed={}", length, seed);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.sample(&mut rng, length)
    }
}

///
/// Generate a sequence of `length` (state, symbol) pairs from raw parameters.
///
/// The parameters are validated as in `HmmModel::new` before `length` is
/// checked; nothing is drawn from `rng` unless every check passes.
///
pub fn generate<R, S>(
    rng: &mut R,
    transition: &[Vec<f64>],
    emission: &[Vec<f64>],
    initial: &[f64],
    length: usize,
    states: &[S],
    symbols: &[S],
) -> Result<GeneratedSequence>
where
    R: Rng,
    S: AsRef<str>,
{
    let model = HmmModel::new(
        states.iter().map(|s| s.as_ref().to_string()).collect(),
        symbols.iter().map(|s| s.as_ref().to_string()).collect(),
        initial.to_vec(),
        transition.to_vec(),
        emission.to_vec(),
    )?;
    model.sample(rng, length)
}
