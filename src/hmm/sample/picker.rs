//!
//! Categorical sampling shared by state transitions and emissions
//!
use rand::prelude::*;

///
/// Pick an index of `probs` at random.
///
/// Draws one `u` uniformly from `[0, 1)` and returns the first index whose
/// cumulative mass (summed in order) exceeds `u`. Exactly one value is
/// consumed from `rng` per call.
///
/// If rounding leaves `u` above the total mass, the last index with
/// non-zero mass is returned. `probs` must not be empty.
///
pub fn pick_index<R: Rng>(rng: &mut R, probs: &[f64]) -> usize {
    debug_assert!(!probs.is_empty());
    let u: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if cumulative > u {
            return i;
        }
    }
    probs.iter().rposition(|&p| p > 0.0).unwrap_or(0)
}

///
/// pick randomly from the labels with the parallel probabilities.
///
pub fn pick<'a, R: Rng, T>(rng: &mut R, labels: &'a [T], probs: &[f64]) -> &'a T {
    debug_assert_eq!(labels.len(), probs.len());
    &labels[pick_index(rng, probs)]
}
