use serde::{Deserialize, Serialize};

use super::brain::Activation;

/// Simulation parameters that control car, controller, and generation behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Car collision radius.
    pub body_radius: f32,
    /// Number of proximity sensors spaced evenly around each car.
    pub sensors: usize,
    /// Append the car's current speed as an extra network input.
    /// When set, `layer_sizes[0]` must equal `sensors + 1`.
    pub speed_input: bool,
    /// Neural network layer dimensions, input to output.
    /// The output layer is always 2 wide: steering delta and throttle delta.
    pub layer_sizes: Vec<usize>,
    /// Activation function applied to every unit, output layer included.
    pub activation: Activation,
    /// Scale of the uniform distribution used for initial weights and biases.
    pub init_weight_scale: f32,
    /// Noise scale applied per weight when deriving a non-elite offspring.
    pub mutation_rate: f32,
    /// Number of cars in the population (constant across generations).
    pub n_cars: usize,
    /// Spawn point x coordinate.
    pub spawn_x: f32,
    /// Spawn point y coordinate.
    pub spawn_y: f32,
    /// Heading at spawn, in radians.
    pub initial_angle: f32,
    /// Speed at spawn.
    pub initial_speed: f32,
    /// Lower speed clamp. A positive floor forbids reversing.
    pub speed_min: f32,
    /// Upper speed clamp.
    pub speed_max: f32,
    /// Symmetric clamp on the per-tick steering delta.
    pub max_steering_delta: f32,
    /// Symmetric clamp on the per-tick throttle delta.
    pub max_throttle_delta: f32,
    /// Tick budget per generation; a boundary fires once it is exceeded.
    pub max_ticks_per_generation: u64,
    /// Ticks simulated per external update call (render-frame batching).
    pub ticks_per_update: u64,
}

impl Default for Params {
    /// Reference configuration: the converged hand-tuned setup the project
    /// was developed against.
    fn default() -> Self {
        Self {
            body_radius: 10.0,
            sensors: 8,
            speed_input: false,
            layer_sizes: vec![8, 5, 5, 2],
            activation: Activation::Tanh,
            init_weight_scale: 0.5,
            mutation_rate: 0.05,
            n_cars: 70,
            spawn_x: 450.0,
            spawn_y: 100.0,
            initial_angle: 0.0,
            initial_speed: 8.0,
            speed_min: 8.0,
            speed_max: 16.0,
            max_steering_delta: 0.1,
            max_throttle_delta: 0.1,
            max_ticks_per_generation: 1000,
            ticks_per_update: 5,
        }
    }
}
