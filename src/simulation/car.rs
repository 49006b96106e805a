//! Car agent: body, sensors, controller, and per-tick physics.
//!
//! A car is either alive or collided; collision is terminal and freezes all
//! state, the score included. Each live tick the car samples its sensors,
//! runs its controller, applies clamped steering and throttle deltas,
//! accumulates `score += speed`, integrates its position, and checks for
//! contact with the obstacle field.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::brain::Brain;
use super::error::SimulationError;
use super::params::Params;
use super::track::{Track, TrackIndex};

/// Sensor probe radius as a fraction of the body radius.
const SENSOR_RADIUS_RATIO: f32 = 3.0 / 5.0;

/// One sensor probe's position and reading, for rendering and tests.
#[derive(Debug, Clone, Copy)]
pub struct SensorProbe {
    /// Probe center x coordinate.
    pub x: f32,
    /// Probe center y coordinate.
    pub y: f32,
    /// True if any obstacle lies within the probe's detection range.
    pub hit: bool,
}

/// A simulated car with a neural network controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading in radians.
    pub angle: f32,
    /// Signed speed, clamped to the configured range each tick.
    pub speed: f32,
    /// Fitness score: the per-tick speed accumulated while alive.
    pub score: f32,
    /// Sticky collision flag; once set the car is frozen.
    pub collided: bool,
    /// Collision footprint radius.
    pub radius: f32,
    /// Number of proximity sensors.
    pub sensors: usize,
    /// Detection radius of each sensor probe, derived from the body radius.
    pub sensor_radius: f32,
    /// Neural network that controls steering and throttle.
    pub brain: Brain,
}

impl Car {
    /// Creates a car at the configured spawn pose, owning `brain`.
    pub fn new(params: &Params, brain: Brain) -> Self {
        Self {
            pos: Array1::from_vec(vec![params.spawn_x, params.spawn_y]),
            angle: params.initial_angle,
            speed: params.initial_speed,
            score: 0.0,
            collided: false,
            radius: params.body_radius,
            sensors: params.sensors,
            sensor_radius: params.body_radius * SENSOR_RADIUS_RATIO,
            brain,
        }
    }

    /// Probe positions and readings for every sensor.
    ///
    /// Probe `i` sits at angle `angle + i · 2π/sensors`, at distance
    /// `radius + sensor_radius` from the body center, so the fan rotates
    /// rigidly with the heading. A probe reads hit when any obstacle center
    /// is within `sensor_radius + obstacle.radius` of it.
    pub fn sensor_probes(&self, track: &Track, index: &TrackIndex) -> Vec<SensorProbe> {
        let step = std::f32::consts::TAU / self.sensors as f32;
        let reach = self.radius + self.sensor_radius;

        (0..self.sensors)
            .map(|i| {
                let a = self.angle + i as f32 * step;
                let x = self.pos[0] + a.cos() * reach;
                let y = self.pos[1] + a.sin() * reach;
                SensorProbe {
                    x,
                    y,
                    hit: index.any_within(track, x, y, self.sensor_radius),
                }
            })
            .collect()
    }

    /// Sensor readings as a network input vector (1.0 hit, 0.0 miss).
    pub fn read_sensors(&self, track: &Track, index: &TrackIndex) -> Array1<f32> {
        self.sensor_probes(track, index)
            .iter()
            .map(|probe| if probe.hit { 1.0 } else { 0.0 })
            .collect()
    }

    /// Advances the car one tick. No-op once collided.
    pub fn step(
        &mut self,
        track: &Track,
        index: &TrackIndex,
        params: &Params,
    ) -> Result<(), SimulationError> {
        if self.collided {
            return Ok(());
        }

        let sensors = self.read_sensors(track, index);
        let input = if params.speed_input {
            let mut values = sensors.to_vec();
            values.push(self.speed);
            Array1::from_vec(values)
        } else {
            sensors
        };

        let output = self.brain.think(&input)?;

        // Positive steering turns toward increasing angle.
        let steering = output[0].clamp(-params.max_steering_delta, params.max_steering_delta);
        self.angle += steering;

        let throttle = output[1].clamp(-params.max_throttle_delta, params.max_throttle_delta);
        self.speed = (self.speed + throttle).clamp(params.speed_min, params.speed_max);

        self.score += self.speed;

        self.pos[0] += self.angle.cos() * self.speed;
        self.pos[1] += self.angle.sin() * self.speed;

        if index.any_within(track, self.pos[0], self.pos[1], self.radius) {
            self.collided = true;
        }

        Ok(())
    }
}
