#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use raceline::simulation::brain::{Activation, Brain, Layer};
use raceline::simulation::car::Car;
use raceline::simulation::params::Params;
use raceline::simulation::track::{Obstacle, Track};

use ndarray::{Array1, Array2};

fn create_test_params() -> Params {
    Params {
        sensors: 8,
        layer_sizes: vec![8, 2],
        spawn_x: 0.0,
        spawn_y: 0.0,
        ..Params::default()
    }
}

/// A stub controller that always outputs roughly `[steering, throttle]`
/// regardless of its input: zero weights, biases set via atanh.
fn fixed_output_brain(steering: f32, throttle: f32) -> Brain {
    Brain {
        layers: vec![Layer {
            weights: Array2::zeros((2, 8)),
            biases: Array1::from_vec(vec![steering.atanh(), throttle.atanh()]),
        }],
        activation: Activation::Tanh,
    }
}

#[test]
fn test_steering_delta_is_clamped() {
    let params = create_test_params();
    let track = Track::new();
    let index = track.index().unwrap();

    let mut car = Car::new(&params, fixed_output_brain(0.9, 0.0));
    car.step(&track, &index, &params).unwrap();

    assert!((car.angle - params.max_steering_delta).abs() < 1e-5);
}

#[test]
fn test_throttle_respects_speed_floor() {
    let params = create_test_params();
    let track = Track::new();
    let index = track.index().unwrap();

    let mut car = Car::new(&params, fixed_output_brain(0.0, -0.9));
    for _ in 0..5 {
        car.step(&track, &index, &params).unwrap();
    }

    assert_eq!(car.speed, params.speed_min);
}

#[test]
fn test_throttle_respects_speed_ceiling() {
    let params = create_test_params();
    let track = Track::new();
    let index = track.index().unwrap();

    let mut car = Car::new(&params, fixed_output_brain(0.0, 0.9));
    for _ in 0..200 {
        car.step(&track, &index, &params).unwrap();
    }

    assert!(car.speed <= params.speed_max);
    assert!((car.speed - params.speed_max).abs() < 1e-3);
}

#[test]
fn test_score_accumulates_speed() {
    let params = create_test_params();
    let track = Track::new();
    let index = track.index().unwrap();

    let mut car = Car::new(&params, fixed_output_brain(0.0, 0.0));
    for _ in 0..3 {
        car.step(&track, &index, &params).unwrap();
    }

    assert!((car.score - 3.0 * params.initial_speed).abs() < 1e-3);
}

#[test]
fn test_position_integrates_along_heading() {
    let params = create_test_params();
    let track = Track::new();
    let index = track.index().unwrap();

    let mut car = Car::new(&params, fixed_output_brain(0.0, 0.0));
    car.step(&track, &index, &params).unwrap();

    assert!((car.pos[0] - params.initial_speed).abs() < 1e-3);
    assert!(car.pos[1].abs() < 1e-3);
}

#[test]
fn test_collision_is_sticky_and_freezes_state() {
    let params = create_test_params();
    let mut track = Track::new();
    // Directly in the car's path along heading 0.
    track.obstacles.push(Obstacle {
        x: 30.0,
        y: 0.0,
        radius: 15.0,
    });
    let index = track.index().unwrap();

    let mut car = Car::new(&params, fixed_output_brain(0.0, 0.0));
    for _ in 0..10 {
        car.step(&track, &index, &params).unwrap();
    }
    assert!(car.collided);

    let frozen = car.clone();
    for _ in 0..10 {
        car.step(&track, &index, &params).unwrap();
    }

    assert_eq!(car.pos, frozen.pos);
    assert_eq!(car.angle, frozen.angle);
    assert_eq!(car.speed, frozen.speed);
    assert_eq!(car.score, frozen.score);
    assert!(car.collided);
}

#[test]
fn test_speed_input_extends_the_input_vector() {
    let mut params = create_test_params();
    params.speed_input = true;
    params.layer_sizes = vec![9, 2];

    let track = Track::new();
    let index = track.index().unwrap();

    let brain = Brain {
        layers: vec![Layer {
            weights: Array2::zeros((2, 9)),
            biases: Array1::zeros(2),
        }],
        activation: Activation::Tanh,
    };

    let mut car = Car::new(&params, brain);
    // A 9-wide controller only works if the speed channel is appended.
    car.step(&track, &index, &params).unwrap();
    assert!((car.pos[0] - params.initial_speed).abs() < 1e-3);
}
