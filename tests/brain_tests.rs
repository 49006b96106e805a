#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;

use raceline::simulation::brain::{Activation, Brain};
use raceline::simulation::error::SimulationError;

fn brains_equal(a: &Brain, b: &Brain) -> bool {
    a.layers.len() == b.layers.len()
        && a.layers
            .iter()
            .zip(&b.layers)
            .all(|(la, lb)| la.weights == lb.weights && la.biases == lb.biases)
}

#[test]
fn test_rejects_single_layer_topology() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = Brain::new(&[4], 0.5, Activation::Tanh, &mut rng);
    assert_eq!(
        result.err(),
        Some(SimulationError::InvalidTopology {
            layer_sizes: vec![4]
        })
    );
}

#[test]
fn test_rejects_zero_width_layer() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = Brain::new(&[4, 0, 2], 0.5, Activation::Tanh, &mut rng);
    assert!(matches!(
        result,
        Err(SimulationError::InvalidTopology { .. })
    ));
}

#[test]
fn test_reports_input_size_mismatch() {
    let mut rng = StdRng::seed_from_u64(2);
    let brain = Brain::new(&[3, 2], 0.5, Activation::Tanh, &mut rng).unwrap();

    let result = brain.think(&Array1::zeros(2));
    assert_eq!(
        result.err(),
        Some(SimulationError::InputSizeMismatch {
            expected: 3,
            got: 2
        })
    );
}

#[test]
fn test_forward_pass_output_width() {
    let mut rng = StdRng::seed_from_u64(3);
    let brain = Brain::new(&[8, 5, 5, 2], 0.5, Activation::Tanh, &mut rng).unwrap();

    assert_eq!(brain.input_size(), 8);
    assert_eq!(brain.output_size(), 2);

    let output = brain.think(&Array1::zeros(8)).unwrap();
    assert_eq!(output.len(), 2);
}

#[test]
fn test_seeded_construction_is_deterministic() {
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);

    let a = Brain::new(&[8, 5, 5, 2], 0.5, Activation::Tanh, &mut rng_a).unwrap();
    let b = Brain::new(&[8, 5, 5, 2], 0.5, Activation::Tanh, &mut rng_b).unwrap();

    assert!(brains_equal(&a, &b));
}

#[test]
fn test_seeded_mutation_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let brain = Brain::new(&[8, 5, 2], 0.5, Activation::Tanh, &mut rng).unwrap();

    let mut a = brain.clone();
    let mut b = brain.clone();
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    a.mutate(0.05, &mut rng_a);
    b.mutate(0.05, &mut rng_b);

    assert!(brains_equal(&a, &b));
    assert!(!brains_equal(&a, &brain));
}

#[test]
fn test_clone_is_independent_of_original() {
    let mut rng = StdRng::seed_from_u64(5);
    let original = Brain::new(&[4, 3, 2], 0.5, Activation::Tanh, &mut rng).unwrap();
    let reference = original.clone();

    let mut offspring = original.clone();
    offspring.mutate(0.5, &mut rng);

    assert!(brains_equal(&original, &reference));
    assert!(!brains_equal(&offspring, &original));
}

#[test]
fn test_zero_rate_mutation_is_noop() {
    let mut rng = StdRng::seed_from_u64(6);
    let original = Brain::new(&[8, 5, 2], 0.5, Activation::Tanh, &mut rng).unwrap();

    let mut elite = original.clone();
    elite.mutate(0.0, &mut rng);

    assert!(brains_equal(&elite, &original));
}

#[test]
fn test_zero_weights_give_neutral_tanh_output() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut brain = Brain::new(&[8, 5, 2], 0.5, Activation::Tanh, &mut rng).unwrap();
    for layer in &mut brain.layers {
        layer.weights.fill(0.0);
        layer.biases.fill(0.0);
    }

    let output = brain.think(&Array1::ones(8)).unwrap();
    assert_eq!(output[0], 0.0);
    assert_eq!(output[1], 0.0);
}

#[test]
fn test_sigmoid_outputs_stay_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(8);
    let brain = Brain::new(&[8, 5, 2], 2.0, Activation::Sigmoid, &mut rng).unwrap();

    let output = brain.think(&Array1::ones(8)).unwrap();
    for &value in output.iter() {
        assert!(value > 0.0 && value < 1.0);
    }
}
