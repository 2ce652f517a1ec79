//!
//! hmmgen: generate synthetic DNA sequences by sampling a hidden Markov model
//!
//! ```
//! use hmmgen::hmm::gc_isochore;
//!
//! let seq = gc_isochore().sample_from_seed(30, 0).unwrap();
//! assert_eq!(seq.len(), 30);
//! ```
//!
pub mod cli;
pub mod common;
pub mod error;
pub mod hmm;
pub mod io;
pub mod output;
pub mod prelude;

#[macro_use]
extern crate approx;
