pub struct MseLoss;

impl MseLoss {
    /// Per-output squared error: (expected - predicted)²
    pub fn squared_errors(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).powi(2))
            .collect()
    }
}
