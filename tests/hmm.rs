//!
//! test of sampling from hmm
//!
#[macro_use]
extern crate approx;

use hmmgen::common::{sequence_to_string, NUCLEOTIDES};
use hmmgen::prelude::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use test_case::test_case;

const STATES: [&str; 2] = ["AT-rich", "GC-rich"];

fn transition() -> Vec<Vec<f64>> {
    vec![vec![0.7, 0.3], vec![0.1, 0.9]]
}

fn emission() -> Vec<Vec<f64>> {
    vec![vec![0.39, 0.10, 0.10, 0.41], vec![0.10, 0.41, 0.39, 0.10]]
}

#[test_case(1)]
#[test_case(2)]
#[test_case(30)]
#[test_case(1000)]
fn exact_length(length: usize) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(length as u64);
    let s = generate(
        &mut rng,
        &transition(),
        &emission(),
        &[0.5, 0.5],
        length,
        &STATES,
        &NUCLEOTIDES,
    )
    .unwrap();
    assert_eq!(s.len(), length);
    assert_eq!(s.to_sequence().len(), length);
    for (state, symbol) in s.iter() {
        assert!(STATES.contains(&state));
        assert!(NUCLEOTIDES.contains(&symbol));
    }
}

#[test]
fn generate_matches_preset_model() {
    // raw parameters and the preset consume the same draws
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
    let a = generate(
        &mut rng,
        &transition(),
        &emission(),
        &[0.5, 0.5],
        30,
        &STATES,
        &NUCLEOTIDES,
    )
    .unwrap();
    let b = gc_isochore().sample_from_seed(30, 2).unwrap();
    assert_eq!(a, b);
    println!("{}", sequence_to_string(&a.to_sequence()));
}

#[test]
fn isochore_composition() {
    // stationary distribution of the state chain is (0.25, 0.75)
    let s = gc_isochore().sample_from_seed(200_000, 1).unwrap();
    let summary = s.summary();
    let n = summary.length as f64;
    let gc_rich = summary.count_of_state("GC-rich").unwrap() as f64 / n;
    assert_abs_diff_eq!(gc_rich, 0.75, epsilon = 0.02);

    // expected GC content: 0.25 * 0.20 + 0.75 * 0.80
    assert_abs_diff_eq!(
        summary.fraction_of_symbols(&["G", "C"]),
        0.65,
        epsilon = 0.02
    );

    // mean run lengths are 1/0.3 (AT-rich) and 1/0.1 (GC-rich)
    let runs = s.state_runs();
    let gc_runs: Vec<usize> = runs
        .iter()
        .filter(|r| r.state == "GC-rich")
        .map(|r| r.len)
        .collect();
    let mean = gc_runs.iter().sum::<usize>() as f64 / gc_runs.len() as f64;
    assert_abs_diff_eq!(mean, 10.0, epsilon = 1.0);
    assert_eq!(runs.iter().map(|r| r.len).sum::<usize>(), s.len());
    assert_eq!(runs.len(), summary.n_switches + 1);
}

#[test]
fn errors() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    let r = generate(
        &mut rng,
        &transition(),
        &emission(),
        &[0.5, 0.6],
        30,
        &STATES,
        &NUCLEOTIDES,
    );
    assert!(matches!(r, Err(HmmError::InvalidDistribution { .. })));

    let r = generate(
        &mut rng,
        &transition(),
        &emission()[..1],
        &[0.5, 0.5],
        30,
        &STATES,
        &NUCLEOTIDES,
    );
    assert!(matches!(r, Err(HmmError::DimensionMismatch { .. })));

    let r = generate(
        &mut rng,
        &transition(),
        &emission(),
        &[0.5, 0.5],
        0,
        &STATES,
        &NUCLEOTIDES,
    );
    assert!(matches!(r, Err(HmmError::InvalidLength(0))));
}

#[test]
fn failed_validation_consumes_no_draws() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
    let mut fresh = Xoshiro256PlusPlus::seed_from_u64(9);
    let _ = generate(
        &mut rng,
        &transition(),
        &emission(),
        &[0.5, 0.6],
        30,
        &STATES,
        &NUCLEOTIDES,
    );
    assert_eq!(rng.gen::<u64>(), fresh.gen::<u64>());
}

#[test]
fn custom_model_file() {
    let json = r#"{
        "states": ["coding", "noncoding"],
        "symbols": ["A", "C", "G", "T"],
        "initial": [0.0, 1.0],
        "transition": { "coding": [0.99, 0.01], "noncoding": [0.02, 0.98] },
        "emission": { "coding": [0.2, 0.3, 0.3, 0.2], "noncoding": [0.3, 0.2, 0.2, 0.3] }
    }"#;
    let model = ModelFile::from_json_str(json)
        .unwrap()
        .into_model()
        .unwrap();
    let s = model.sample_from_seed(50, 3).unwrap();
    assert_eq!(s.len(), 50);
    assert_eq!(s.get(0).unwrap().0, "noncoding");
}
