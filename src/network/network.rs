use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::layers::topology::Topology;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::optim::sgd::Sgd;

/// A fully connected feedforward network.
///
/// `weights[i]` connects layer `i` to layer `i + 1`; `momentum[i]` holds the
/// last update applied to it and always has the same shape.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    activation: ActivationFunction,
    weights: Vec<Matrix>,
    momentum: Vec<Matrix>,
}

impl Network {
    /// Builds a network with weights drawn uniformly from `[0, 1)`.
    ///
    /// # Arguments
    /// - `sizes`      — declared unit count per layer, input first
    /// - `bias`       — append a bias unit to every non-output layer
    /// - `activation` — activation shared by every computed unit
    /// - `rng`        — source for the initial weights
    pub fn new<R: Rng + ?Sized>(
        sizes: &[usize],
        bias: bool,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Result<Network> {
        let topology = Topology::new(sizes, bias)?;
        let weights = (0..topology.depth() - 1)
            .map(|i| Matrix::random(topology.units(i), topology.units(i + 1), rng))
            .collect();
        let momentum = zeroed_like(&topology);

        log::debug!("built network {:?} (bias: {bias}, activation: {activation:?})", sizes);
        Ok(Network { topology, activation, weights, momentum })
    }

    /// Rebuilds a network around an existing weight tensor, e.g. one read back
    /// from disk. Momentum starts from zero.
    ///
    /// Fails with a shape mismatch if the tensor does not fit the topology.
    pub fn from_weights(
        sizes: &[usize],
        bias: bool,
        activation: ActivationFunction,
        weights: Vec<Matrix>,
    ) -> Result<Network> {
        let topology = Topology::new(sizes, bias)?;
        let boundaries = topology.depth() - 1;
        if weights.len() != boundaries {
            return Err(Error::shape("weight matrices", boundaries, weights.len()));
        }
        for (i, matrix) in weights.iter().enumerate() {
            if matrix.rows != topology.units(i) {
                return Err(Error::shape("weight matrix rows", topology.units(i), matrix.rows));
            }
            if matrix.cols != topology.units(i + 1) {
                return Err(Error::shape("weight matrix columns", topology.units(i + 1), matrix.cols));
            }
            if let Some(row) = matrix.data.iter().find(|row| row.len() != matrix.cols) {
                return Err(Error::shape("weight matrix row length", matrix.cols, row.len()));
            }
        }
        let momentum = zeroed_like(&topology);

        Ok(Network { topology, activation, weights, momentum })
    }

    /// Draws a fresh weight tensor and clears momentum.
    pub fn reset_weights<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (i, matrix) in self.weights.iter_mut().enumerate() {
            *matrix = Matrix::random(self.topology.units(i), self.topology.units(i + 1), rng);
        }
        self.momentum = zeroed_like(&self.topology);
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn has_bias(&self) -> bool {
        self.topology.has_bias()
    }

    /// Declared layer sizes, bias units excluded.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.topology.declared_sizes()
    }

    pub fn input_size(&self) -> usize {
        self.topology.input_size()
    }

    pub fn output_size(&self) -> usize {
        self.topology.output_size()
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn momentum(&self) -> &[Matrix] {
        &self.momentum
    }

    /// Total number of weight scalars across every boundary.
    pub fn weight_count(&self) -> usize {
        self.weights.iter().map(Matrix::len).sum()
    }

    /// Forward pass; leaves every unit holding its activation for backprop.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;

        for (unit, &x) in self.topology.layer_mut(0).iter_mut().zip(input) {
            unit.set_value(x);
        }

        for i in 1..self.topology.depth() {
            let previous = self.topology.values(i - 1);
            let weights = &self.weights[i - 1];
            let activation = self.activation;

            for (j, unit) in self.topology.layer_mut(i).iter_mut().enumerate() {
                if unit.is_bias() {
                    continue;
                }
                let net: f64 = previous.iter().enumerate()
                    .map(|(k, value)| value * weights.data[k][j])
                    .sum();
                unit.set_value(activation.function(net));
            }
        }

        Ok(self.topology.values(self.topology.depth() - 1))
    }

    /// One forward and backward pass over a single example.
    ///
    /// Returns the per-output squared error `(target - output)²` measured
    /// before the update. Both vectors are checked before anything is touched.
    pub fn train_one_example(&mut self, input: &[f64], target: &[f64], optimizer: &Sgd) -> Result<Vec<f64>> {
        self.check_input(input)?;
        if target.len() != self.output_size() {
            return Err(Error::shape("target vector", self.output_size(), target.len()));
        }

        let output = self.predict(input)?;
        let depth = self.topology.depth();
        let activation = self.activation;

        let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); depth];
        deltas[depth - 1] = output.iter().zip(target)
            .map(|(o, t)| (t - o) * activation.derivative(*o))
            .collect();

        // Hidden layers only; the input layer never gets a delta.
        for i in (1..depth - 1).rev() {
            let weights = &self.weights[i];
            let above = &deltas[i + 1];
            let layer_deltas: Vec<f64> = self.topology.layer(i).iter().enumerate()
                .map(|(j, unit)| {
                    let downstream: f64 = above.iter().enumerate()
                        .map(|(k, delta)| weights.data[j][k] * delta)
                        .sum();
                    activation.derivative(unit.value()) * downstream
                })
                .collect();
            deltas[i] = layer_deltas;
        }

        for i in 0..depth - 1 {
            let sources = self.topology.values(i);
            optimizer.step(&mut self.weights[i], &mut self.momentum[i], &sources, &deltas[i + 1]);
        }

        Ok(MseLoss::squared_errors(&output, target))
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(Error::shape("input vector", self.input_size(), input.len()));
        }
        Ok(())
    }
}

fn zeroed_like(topology: &Topology) -> Vec<Matrix> {
    (0..topology.depth() - 1)
        .map(|i| Matrix::zeros(topology.units(i), topology.units(i + 1)))
        .collect()
}
