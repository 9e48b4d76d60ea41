use serde::{Serialize, Deserialize};
use std::f64::consts::E;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Linear,
    Sigmoid,
}

impl ActivationFunction {
    /// Element-wise activation applied to a unit's weighted input sum.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Derivative expressed in terms of the activated output `y`, not the
    /// pre-activation sum. Backprop only ever has `y` at hand.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Sigmoid => y * (1.0 - y),
        }
    }

    /// Numeric id used by the persisted network record.
    pub fn id(&self) -> u8 {
        match self {
            ActivationFunction::Linear => 0,
            ActivationFunction::Sigmoid => 1,
        }
    }

    pub fn from_id(id: u8) -> Option<ActivationFunction> {
        match id {
            0 => Some(ActivationFunction::Linear),
            1 => Some(ActivationFunction::Sigmoid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_half() {
        assert_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
        assert!(ActivationFunction::Sigmoid.function(40.0) > 0.999);
        assert!(ActivationFunction::Sigmoid.function(-40.0) < 0.001);
    }

    #[test]
    fn sigmoid_derivative_takes_activated_value() {
        // y = 0.5 is the sigmoid of 0; the slope there is 0.25.
        assert_eq!(ActivationFunction::Sigmoid.derivative(0.5), 0.25);
        assert_eq!(ActivationFunction::Sigmoid.derivative(1.0), 0.0);
    }

    #[test]
    fn linear_is_identity_with_unit_slope() {
        assert_eq!(ActivationFunction::Linear.function(-3.5), -3.5);
        assert_eq!(ActivationFunction::Linear.derivative(42.0), 1.0);
    }

    #[test]
    fn ids_round_trip() {
        for act in [ActivationFunction::Linear, ActivationFunction::Sigmoid] {
            assert_eq!(ActivationFunction::from_id(act.id()), Some(act));
        }
        assert_eq!(ActivationFunction::from_id(2), None);
    }
}
