//!
//! Discrete hidden Markov model and forward sampling
//!
//! * `model` validated parameters and the `gc_isochore` preset
//! * `sample` generation of (state, symbol) sequences
//!
pub mod model;
pub mod sample;

pub use model::{gc_isochore, HmmModel, DISTRIBUTION_TOLERANCE};
pub use sample::{generate, GeneratedSequence, SampleSummary, StateRun};
