//! Feed-forward neural network controllers.
//!
//! A [`Brain`] maps a sensor vector to `[steering_delta, throttle_delta]`.
//! Mutation adds independent uniform noise to every weight and bias; a rate
//! of zero is guaranteed to be a bitwise no-op so an elite clone survives a
//! generation boundary verbatim. There is no crossover.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;
use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Activation function applied to every unit in every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Hyperbolic tangent, outputs in (-1, 1).
    Tanh,
    /// Logistic sigmoid, outputs in (0, 1).
    Sigmoid,
}

impl Activation {
    #[inline]
    fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }
}

/// A single fully-connected layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Weight matrix (`output_size` × `input_size`).
    pub weights: Array2<f32>,
    /// Bias vector (`output_size`).
    pub biases: Array1<f32>,
}

impl Layer {
    /// Creates a layer with weights and biases drawn from `Uniform(-scale, scale)`.
    pub fn new_random<R>(input_size: usize, output_size: usize, scale: f32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            weights: Array2::random_using(
                (output_size, input_size),
                Uniform::new(-scale, scale),
                rng,
            ),
            biases: Array1::random_using(output_size, Uniform::new(-scale, scale), rng),
        }
    }

    /// Computes `activation(W · x + b)`.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>, activation: Activation) -> Array1<f32> {
        let mut output = self.weights.dot(inputs);
        output += &self.biases;
        output.mapv_inplace(|x| activation.apply(x));
        output
    }

    /// Adds independent `Uniform(-rate, rate)` noise to every weight and bias.
    ///
    /// `rate == 0` returns without drawing from the RNG.
    pub fn mutate<R>(&mut self, rate: f32, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        if rate == 0.0 {
            return;
        }
        self.weights += &Array2::random_using(self.weights.dim(), Uniform::new(-rate, rate), rng);
        self.biases += &Array1::random_using(self.biases.len(), Uniform::new(-rate, rate), rng);
    }
}

/// A feed-forward network controlling one car.
///
/// Cloning produces a fully independent duplicate: the layers own their
/// weight storage, so mutating a clone never touches the original.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brain {
    /// Ordered layers from input to output.
    pub layers: Vec<Layer>,
    /// Activation applied by every layer.
    pub activation: Activation,
}

impl Brain {
    /// Creates a network with random weights for the given layer sizes.
    ///
    /// Requires at least two layers (input and output) and positive widths.
    pub fn new<R>(
        layer_sizes: &[usize],
        scale: f32,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, SimulationError>
    where
        R: Rng + ?Sized,
    {
        if layer_sizes.len() < 2 || layer_sizes.iter().any(|&n| n == 0) {
            return Err(SimulationError::InvalidTopology {
                layer_sizes: layer_sizes.to_vec(),
            });
        }

        let layers = (0..layer_sizes.len() - 1)
            .map(|i| Layer::new_random(layer_sizes[i], layer_sizes[i + 1], scale, rng))
            .collect();

        Ok(Self { layers, activation })
    }

    /// Input width the network was built with.
    pub fn input_size(&self) -> usize {
        self.layers[0].weights.ncols()
    }

    /// Output width of the final layer.
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].weights.nrows()
    }

    /// Runs a forward pass through the network.
    ///
    /// The input length must match [`Brain::input_size`]. Outputs are raw
    /// activation values; clamping to usable steering/throttle ranges is the
    /// caller's concern.
    pub fn think(&self, inputs: &Array1<f32>) -> Result<Array1<f32>, SimulationError> {
        if inputs.len() != self.input_size() {
            return Err(SimulationError::InputSizeMismatch {
                expected: self.input_size(),
                got: inputs.len(),
            });
        }

        let mut output = inputs.clone();
        for layer in &self.layers {
            output = layer.forward(&output, self.activation);
        }
        Ok(output)
    }

    /// Mutates every weight and bias in place. The sole exploration operator.
    pub fn mutate<R>(&mut self, rate: f32, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for layer in &mut self.layers {
            layer.mutate(rate, rng);
        }
    }
}
