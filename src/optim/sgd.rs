use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Stochastic gradient descent with classic momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
    pub momentum: f64,
}

impl Sgd {
    /// Fails with a configuration error unless `learning_rate` is positive and
    /// finite and `momentum` lies in `[0, 1]`.
    pub fn new(learning_rate: f64, momentum: f64) -> Result<Sgd> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(Error::config(format!(
                "learning rate must be a positive number, got {learning_rate}"
            )));
        }
        if !(0.0..=1.0).contains(&momentum) {
            return Err(Error::config(format!(
                "momentum coefficient must lie in [0, 1], got {momentum}"
            )));
        }
        Ok(Sgd { learning_rate, momentum })
    }

    /// Applies one update to the weights of a single boundary.
    ///
    /// `sources` are the values of the layer below, `deltas` those of the layer
    /// above. Each step's update is stored back into `velocity` and carried
    /// into the next one.
    pub fn step(&self, weights: &mut Matrix, velocity: &mut Matrix, sources: &[f64], deltas: &[f64]) {
        for (k, &source) in sources.iter().enumerate() {
            for (j, &delta) in deltas.iter().enumerate() {
                let change = self.learning_rate * delta * source + velocity.data[k][j] * self.momentum;
                weights.data[k][j] += change;
                velocity.data[k][j] = change;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_outside_unit_interval_is_rejected() {
        assert!(matches!(Sgd::new(0.5, -0.01), Err(Error::Configuration(_))));
        assert!(matches!(Sgd::new(0.5, 1.01), Err(Error::Configuration(_))));
        assert!(matches!(Sgd::new(0.5, f64::NAN), Err(Error::Configuration(_))));
        assert!(Sgd::new(0.5, 0.0).is_ok());
        assert!(Sgd::new(0.5, 1.0).is_ok());
    }

    #[test]
    fn learning_rate_must_be_positive() {
        assert!(matches!(Sgd::new(0.0, 0.5), Err(Error::Configuration(_))));
        assert!(matches!(Sgd::new(f64::INFINITY, 0.5), Err(Error::Configuration(_))));
    }

    #[test]
    fn step_carries_previous_update() {
        let sgd = Sgd::new(0.5, 0.5).unwrap();
        let mut weights = Matrix::zeros(1, 1);
        let mut velocity = Matrix::zeros(1, 1);

        sgd.step(&mut weights, &mut velocity, &[2.0], &[1.0]);
        assert_eq!(weights.data[0][0], 1.0);
        assert_eq!(velocity.data[0][0], 1.0);

        // 0.5 * 1 * 2 + 1.0 * 0.5
        sgd.step(&mut weights, &mut velocity, &[2.0], &[1.0]);
        assert_eq!(velocity.data[0][0], 1.5);
        assert_eq!(weights.data[0][0], 2.5);
    }
}
