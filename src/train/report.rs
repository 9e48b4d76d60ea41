use serde::{Serialize, Deserialize};

/// Why a training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// A fixed-epoch run finished all of its passes.
    EpochsCompleted,
    /// Every output's aggregated error reached the threshold.
    Converged,
    /// A threshold run used up `max_epochs` without converging.
    EpochCapReached,
    /// The dataset had no rows.
    NoExamples,
}

/// Summary returned by `train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Passes started, including a pass cut short by convergence.
    pub epochs: usize,
    /// Examples trained on.
    pub examples: usize,
    pub stop: StopReason,
    /// Per-output error at the end of the run: the aggregated figure for a
    /// threshold run, mean squared error of the last pass otherwise.
    pub errors: Vec<f64>,
}

impl TrainReport {
    pub fn converged(&self) -> bool {
        self.stop == StopReason::Converged
    }
}
