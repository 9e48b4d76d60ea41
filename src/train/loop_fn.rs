use crate::dataset::dataset::Dataset;
use crate::error::{Error, Result};
use crate::loss::aggregation::ErrorAggregation;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::report::{StopReason, TrainReport};
use crate::train::train_config::{StopPolicy, TrainConfig};
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` on `dataset` until `config.policy` says to stop.
///
/// # Arguments
/// - `network` — mutable reference to the network; modified in place
/// - `dataset` — examples, visited in stored order every epoch
/// - `config`  — learning rate, momentum and stop policy
///
/// # Errors
/// All hyperparameters and both dataset widths are checked before the first
/// update: a bad hyperparameter is a configuration error, a width that
/// disagrees with the network a shape mismatch. Running out of epochs on a
/// threshold run is not an error; inspect the returned report.
pub fn train(network: &mut Network, dataset: &Dataset, config: &TrainConfig) -> Result<TrainReport> {
    let optimizer = config.optimizer()?;
    if dataset.input_width() != network.input_size() {
        return Err(Error::shape("dataset input width", network.input_size(), dataset.input_width()));
    }
    if dataset.output_width() != network.output_size() {
        return Err(Error::shape("dataset output width", network.output_size(), dataset.output_width()));
    }

    if dataset.is_empty() {
        log::warn!("dataset is empty, nothing to train");
        return Ok(TrainReport {
            epochs: 0,
            examples: 0,
            stop: StopReason::NoExamples,
            errors: vec![0.0; network.output_size()],
        });
    }

    log::info!(
        "training on {} rows (lr {}, momentum {}, {:?})",
        dataset.len(),
        optimizer.learning_rate,
        optimizer.momentum,
        config.policy
    );

    let report = match config.policy {
        StopPolicy::FixedEpochs { epochs } => run_fixed(network, dataset, &optimizer, epochs)?,
        StopPolicy::Threshold { threshold, max_epochs, aggregation } => {
            run_threshold(network, dataset, &optimizer, threshold, max_epochs, aggregation)?
        }
    };

    log::info!(
        "training stopped after {} epoch(s), {} example(s): {:?}",
        report.epochs,
        report.examples,
        report.stop
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn run_fixed(network: &mut Network, dataset: &Dataset, optimizer: &Sgd, epochs: usize) -> Result<TrainReport> {
    let mut errors = vec![0.0; network.output_size()];

    for epoch in 1..=epochs {
        errors = train_epoch(network, dataset, optimizer)?;
        log::debug!("epoch {epoch}/{epochs}: mse {:.6}", mean(&errors));
    }

    Ok(TrainReport {
        epochs,
        examples: epochs * dataset.len(),
        stop: StopReason::EpochsCompleted,
        errors,
    })
}

/// The accumulator is never reset between epochs; each example's errors are
/// merged in and the running sums normalized by the number of the epoch in
/// progress (1-based).
fn run_threshold(
    network: &mut Network,
    dataset: &Dataset,
    optimizer: &Sgd,
    threshold: f64,
    max_epochs: usize,
    aggregation: ErrorAggregation,
) -> Result<TrainReport> {
    let mut sums = vec![0.0; network.output_size()];
    let mut normalized = vec![f64::INFINITY; network.output_size()];
    let mut examples = 0;

    for epoch in 1..=max_epochs {
        for (input, target) in dataset.examples() {
            let errors = network.train_one_example(input, target, optimizer)?;
            examples += 1;

            aggregation.accumulate(&mut sums, &errors);
            for (norm, &sum) in normalized.iter_mut().zip(&sums) {
                *norm = aggregation.normalize(sum, epoch);
            }

            if normalized.iter().all(|&e| e <= threshold) {
                return Ok(TrainReport {
                    epochs: epoch,
                    examples,
                    stop: StopReason::Converged,
                    errors: normalized,
                });
            }
        }
        log::debug!("epoch {epoch}/{max_epochs}: aggregated error {:.6}", mean(&normalized));
    }

    log::warn!("error threshold {threshold} not reached within {max_epochs} epoch(s)");
    Ok(TrainReport {
        epochs: max_epochs,
        examples,
        stop: StopReason::EpochCapReached,
        errors: normalized,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
