//! Population scoring, champion selection, and generation replacement.
//!
//! Selection is (μ, λ)-style and asexual: at every generation boundary the
//! whole population is rebuilt from the champion's controller. Slot 0 keeps
//! an exact, unmutated copy (elitism), every other slot gets an
//! independently mutated copy. There is no crossover.

use chrono::{DateTime, Utc};
use ndarray_rand::rand::Rng;
use serde::{Deserialize, Serialize};

use super::brain::Brain;
use super::car::Car;
use super::error::SimulationError;
use super::params::Params;
use super::track::Track;

/// One completed generation, appended to the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Index of the completed generation.
    pub generation: u32,
    /// Best score in the population at the boundary.
    pub champion_score: f32,
    /// Mean score across the full population, captured before replacement.
    pub mean_score: f32,
    /// Deep copy of the champion's controller.
    pub champion_brain: Brain,
    /// Wall-clock time the boundary fired.
    pub timestamp: DateTime<Utc>,
}

/// Returned by [`Population::step`] when a generation boundary occurs.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSummary {
    /// Index of the generation that just completed.
    pub generation: u32,
    /// The champion's score.
    pub champion_score: f32,
    /// Mean score across the population before replacement.
    pub mean_score: f32,
}

/// Snapshot of the current best car, safe to keep across replacement.
#[derive(Debug, Clone)]
pub struct ChampionSnapshot {
    /// The champion's score at the time of the snapshot.
    pub score: f32,
    /// Deep copy of the champion's controller.
    pub brain: Brain,
}

/// The evolving set of cars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    /// All cars of the current generation. Length is invariant.
    pub cars: Vec<Car>,
    /// Completed generation count.
    pub generation: u32,
    /// Ticks simulated since the current generation started.
    pub ticks_in_generation: u64,
    /// Append-only log of completed generations.
    pub history: Vec<GenerationRecord>,
}

impl Population {
    /// Creates a population of `params.n_cars` cars with random controllers.
    ///
    /// Validates the configuration once, so stepping never fails afterwards:
    /// the topology's input width must match the sensor count (plus one when
    /// `speed_input` is set) and its output width must be 2.
    pub fn new<R>(params: &Params, rng: &mut R) -> Result<Self, SimulationError>
    where
        R: Rng + ?Sized,
    {
        if params.n_cars == 0 {
            return Err(SimulationError::InvalidPopulationSize);
        }
        if params.layer_sizes.len() < 2
            || params.layer_sizes.iter().any(|&n| n == 0)
            || params.layer_sizes[params.layer_sizes.len() - 1] != 2
        {
            return Err(SimulationError::InvalidTopology {
                layer_sizes: params.layer_sizes.clone(),
            });
        }
        let expected_inputs = params.sensors + usize::from(params.speed_input);
        if params.layer_sizes[0] != expected_inputs {
            return Err(SimulationError::InputSizeMismatch {
                expected: expected_inputs,
                got: params.layer_sizes[0],
            });
        }

        let cars = (0..params.n_cars)
            .map(|_| {
                let brain = Brain::new(
                    &params.layer_sizes,
                    params.init_weight_scale,
                    params.activation,
                    rng,
                )?;
                Ok(Car::new(params, brain))
            })
            .collect::<Result<Vec<_>, SimulationError>>()?;

        Ok(Self {
            cars,
            generation: 0,
            ticks_in_generation: 0,
            history: Vec::new(),
        })
    }

    /// Index of the current champion: the car with the strictly greatest
    /// score, ties resolved in favor of the lowest index.
    pub fn champion_index(&self) -> usize {
        let mut best = 0;
        for i in 1..self.cars.len() {
            if self.cars[i].score > self.cars[best].score {
                best = i;
            }
        }
        best
    }

    /// Deep-copied snapshot of the current champion.
    pub fn champion(&self) -> ChampionSnapshot {
        let champion = &self.cars[self.champion_index()];
        ChampionSnapshot {
            score: champion.score,
            brain: champion.brain.clone(),
        }
    }

    /// Number of cars that have not collided yet.
    pub fn alive_count(&self) -> usize {
        self.cars.iter().filter(|car| !car.collided).count()
    }

    /// Advances every live car one tick and evaluates the generation-end
    /// condition: all cars collided, or the tick budget exceeded.
    ///
    /// Returns `Some` when a boundary fired; the population has then already
    /// been replaced and the tick counter reset. All cars collided on the
    /// very first tick is a legitimate immediate boundary.
    pub fn step<R>(
        &mut self,
        track: &Track,
        params: &Params,
        rng: &mut R,
    ) -> Result<Option<GenerationSummary>, SimulationError>
    where
        R: Rng + ?Sized,
    {
        self.ticks_in_generation += 1;

        let index = track.index().expect("failed to build obstacle index");
        for car in &mut self.cars {
            car.step(track, &index, params)?;
        }

        if self.alive_count() == 0 || self.ticks_in_generation > params.max_ticks_per_generation {
            return Ok(Some(self.turn_over(params, rng)));
        }
        Ok(None)
    }

    /// Replaces the population with the champion's offspring.
    fn turn_over<R>(&mut self, params: &Params, rng: &mut R) -> GenerationSummary
    where
        R: Rng + ?Sized,
    {
        let champion = self.champion();
        let mean_score =
            self.cars.iter().map(|car| car.score).sum::<f32>() / self.cars.len() as f32;

        self.history.push(GenerationRecord {
            generation: self.generation,
            champion_score: champion.score,
            mean_score,
            champion_brain: champion.brain.clone(),
            timestamp: Utc::now(),
        });

        for (i, slot) in self.cars.iter_mut().enumerate() {
            let mut brain = champion.brain.clone();
            // Slot 0 is the elite: a rate-0 mutation leaves it untouched.
            let rate = if i == 0 { 0.0 } else { params.mutation_rate };
            brain.mutate(rate, rng);
            *slot = Car::new(params, brain);
        }

        let summary = GenerationSummary {
            generation: self.generation,
            champion_score: champion.score,
            mean_score,
        };

        self.generation += 1;
        self.ticks_in_generation = 0;

        summary
    }
}
