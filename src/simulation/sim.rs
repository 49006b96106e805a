//! Simulation state owner and discrete tick clock.
//!
//! One [`Simulation`] value holds the track, the population, and the global
//! tick counter, so multiple independent instances can coexist and tests
//! stay deterministic. The clock batches ticks: an external driver requests
//! some number of ticks per update call and they execute strictly
//! sequentially. The RNG is threaded in by the caller and is the only state
//! excluded from persistence.

use ndarray_rand::rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::SimulationError;
use super::params::Params;
use super::population::{GenerationSummary, Population};
use super::track::Track;

/// A complete, self-contained simulation instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// The obstacle field cars drive through.
    pub track: Track,
    /// The evolving car population.
    pub population: Population,
    /// Total ticks simulated since construction.
    pub tick: u64,
}

impl Simulation {
    /// Creates a simulation over `track` with a fresh random population.
    pub fn new<R>(track: Track, params: &Params, rng: &mut R) -> Result<Self, SimulationError>
    where
        R: Rng + ?Sized,
    {
        Ok(Self {
            track,
            population: Population::new(params, rng)?,
            tick: 0,
        })
    }

    /// Simulates `ticks` ticks in strict sequence.
    ///
    /// Before each tick the barrier (if any) is repositioned from the
    /// generation clock. Returns the summaries of every generation boundary
    /// that fired during the batch, oldest first.
    pub fn advance<R>(
        &mut self,
        params: &Params,
        ticks: u64,
        rng: &mut R,
    ) -> Result<Vec<GenerationSummary>, SimulationError>
    where
        R: Rng + ?Sized,
    {
        let mut summaries = Vec::new();
        for _ in 0..ticks {
            self.tick += 1;
            self.track.advance_barrier(self.population.ticks_in_generation);
            if let Some(summary) = self.population.step(&self.track, params, rng)? {
                summaries.push(summary);
            }
        }
        Ok(summaries)
    }

    /// Saves the simulation state to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a simulation state from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let simulation = serde_json::from_str(&json)?;
        Ok(simulation)
    }
}
