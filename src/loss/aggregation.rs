use serde::{Serialize, Deserialize};

/// Turns the per-output squared errors seen during a threshold run into one
/// normalized figure per output.
///
/// - `Mean`       — running sum of `e`, divided by the epochs elapsed.
/// - `RootMean`   — same sum, square root of the quotient.
/// - `ArctanMean` — running sum of `atan(e)²`, divided by the epochs elapsed.
///
/// `e` is always the raw squared error `(target - output)²` of one output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorAggregation {
    #[default]
    Mean,
    RootMean,
    ArctanMean,
}

impl ErrorAggregation {
    /// Contribution of one squared error to the running sum.
    pub fn transform(&self, e: f64) -> f64 {
        match self {
            ErrorAggregation::Mean | ErrorAggregation::RootMean => e,
            ErrorAggregation::ArctanMean => e.atan().powi(2),
        }
    }

    /// Folds one example's squared-error vector into the accumulator.
    pub fn accumulate(&self, sums: &mut [f64], errors: &[f64]) {
        for (sum, &e) in sums.iter_mut().zip(errors) {
            *sum += self.transform(e);
        }
    }

    /// Normalizes a running sum by the number of epochs elapsed (`>= 1`).
    pub fn normalize(&self, sum: f64, epochs_elapsed: usize) -> f64 {
        let mean = sum / epochs_elapsed as f64;
        match self {
            ErrorAggregation::Mean | ErrorAggregation::ArctanMean => mean,
            ErrorAggregation::RootMean => mean.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_divides_by_epochs() {
        let mut sums = vec![0.0, 0.0];
        ErrorAggregation::Mean.accumulate(&mut sums, &[0.5, 1.0]);
        ErrorAggregation::Mean.accumulate(&mut sums, &[0.5, 1.0]);
        assert_eq!(sums, vec![1.0, 2.0]);
        assert_eq!(ErrorAggregation::Mean.normalize(sums[1], 4), 0.5);
    }

    #[test]
    fn root_mean_takes_square_root() {
        assert_eq!(ErrorAggregation::RootMean.normalize(8.0, 2), 2.0);
    }

    #[test]
    fn arctan_mean_squashes_large_errors() {
        let mut sums = vec![0.0];
        ErrorAggregation::ArctanMean.accumulate(&mut sums, &[1.0e9]);
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert!((sums[0] - half_pi * half_pi).abs() < 1e-6);
        assert_eq!(ErrorAggregation::ArctanMean.normalize(sums[0], 1), sums[0]);
    }

    #[test]
    fn parses_snake_case_names() {
        let agg: ErrorAggregation = serde_json::from_str("\"root_mean\"").unwrap();
        assert_eq!(agg, ErrorAggregation::RootMean);
    }
}
