//! # Raceline - Evolutionary Car Steering Simulation
//!
//! A simulation that evolves feed-forward neural-network controllers to steer
//! circular car agents around a closed track of circular obstacles. Learning
//! is a genetic hill climb: every generation the whole population is rebuilt
//! from mutated copies of the best driver, with one unmutated elite clone.
//!
//! ## Features
//!
//! - Neural network controllers (MLP with tanh or sigmoid activation)
//! - Binary proximity sensors arranged around each car's heading
//! - Generation replacement with single-elite selection and weight mutation
//! - Optional moving barrier obstacle driven by the generation clock
//! - Real-time visualization with macroquad
//! - Save/load of the full simulation state
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural network controller
//! - [`simulation::car`] - Car agent: sensors, kinematics, collision
//! - [`simulation::track`] - Obstacle field and proximity queries
//! - [`simulation::population`] - Scoring, selection, and reproduction
//! - [`simulation::sim`] - Simulation state owner and tick clock

/// Core simulation logic and data structures.
pub mod simulation {
    /// Neural network controllers for car agents.
    pub mod brain;
    /// Car agent behavior, sensing, and per-tick physics.
    pub mod car;
    /// Validation errors raised at construction boundaries.
    pub mod error;
    /// Simulation parameters.
    pub mod params;
    /// Population scoring, champion selection, and generation replacement.
    pub mod population;
    /// Simulation state owner and discrete tick clock.
    pub mod sim;
    /// Obstacle field, moving barrier, and spatial queries.
    pub mod track;
}
