use crate::{
    dataset::dataset::Dataset,
    error::Result,
    network::network::Network,
    optim::sgd::Sgd,
};

/// One pass over `dataset` in stored order, one update per row.
///
/// Returns the mean squared error of each output over the pass. Widths are
/// the caller's responsibility; a mismatched row fails before its update.
pub fn train_epoch(network: &mut Network, dataset: &Dataset, optimizer: &Sgd) -> Result<Vec<f64>> {
    let mut totals = vec![0.0; network.output_size()];

    for (input, target) in dataset.examples() {
        let errors = network.train_one_example(input, target, optimizer)?;
        for (total, e) in totals.iter_mut().zip(errors) {
            *total += e;
        }
    }

    if !dataset.is_empty() {
        let n = dataset.len() as f64;
        totals.iter_mut().for_each(|total| *total /= n);
    }
    Ok(totals)
}
