use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::loss::aggregation::ErrorAggregation;
use crate::network::spec::{load_json, save_json};
use crate::optim::sgd::Sgd;

/// When a training run stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StopPolicy {
    /// Exactly `epochs` passes over the dataset, no early exit.
    FixedEpochs { epochs: usize },
    /// Stop as soon as every output's aggregated error is `<= threshold`, or
    /// after `max_epochs` passes, whichever comes first.
    Threshold {
        threshold: f64,
        max_epochs: usize,
        #[serde(default)]
        aggregation: ErrorAggregation,
    },
}

/// Configuration for a `train` run.
///
/// # Fields
/// - `learning_rate` — step size, must be positive
/// - `momentum`      — fraction of the previous update carried into the next,
///                     in `[0, 1]`
/// - `policy`        — fixed epoch count or error threshold with a cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub momentum: f64,
    pub policy: StopPolicy,
}

impl TrainConfig {
    pub fn fixed_epochs(learning_rate: f64, momentum: f64, epochs: usize) -> Self {
        TrainConfig {
            learning_rate,
            momentum,
            policy: StopPolicy::FixedEpochs { epochs },
        }
    }

    pub fn threshold(
        learning_rate: f64,
        momentum: f64,
        threshold: f64,
        max_epochs: usize,
        aggregation: ErrorAggregation,
    ) -> Self {
        TrainConfig {
            learning_rate,
            momentum,
            policy: StopPolicy::Threshold { threshold, max_epochs, aggregation },
        }
    }

    /// Checks every hyperparameter and returns the optimizer to train with.
    pub fn optimizer(&self) -> Result<Sgd> {
        let optimizer = Sgd::new(self.learning_rate, self.momentum)?;
        if let StopPolicy::Threshold { threshold, max_epochs, .. } = self.policy {
            if !(threshold > 0.0) {
                return Err(Error::config(format!("threshold must be positive, got {threshold}")));
            }
            if max_epochs < 1 {
                return Err(Error::config("max_epochs must be at least 1"));
            }
        }
        Ok(optimizer)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        save_json(self, path.as_ref())
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<TrainConfig> {
        load_json(path.as_ref())
    }
}
