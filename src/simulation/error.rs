//! Validation errors for controller and population construction.
//!
//! All failure modes are input-validation class: once a population has been
//! constructed successfully, per-tick stepping cannot fail.

use std::fmt;

/// Errors raised when constructing or running simulation components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A controller topology needs at least an input and an output layer,
    /// and every layer must have a positive width.
    InvalidTopology {
        /// The rejected layer sizes.
        layer_sizes: Vec<usize>,
    },
    /// An input vector's length does not match the configured input width.
    InputSizeMismatch {
        /// Input width the controller was built with.
        expected: usize,
        /// Length of the vector that was supplied.
        got: usize,
    },
    /// A population must contain at least one car.
    InvalidPopulationSize,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidTopology { layer_sizes } => {
                write!(f, "invalid network topology {layer_sizes:?}")
            }
            SimulationError::InputSizeMismatch { expected, got } => {
                write!(f, "input vector has length {got}, controller expects {expected}")
            }
            SimulationError::InvalidPopulationSize => {
                write!(f, "population size must be at least 1")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
