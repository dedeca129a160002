/// Mean squared error over a single sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: ‖predicted - expected‖² / len(predicted).
    ///
    /// Note the normalization is 1/n, not 1/(2n); `gradient()` carries the
    /// matching factor of 2.
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        assert_eq!(
            predicted.len(),
            expected.len(),
            "loss: predicted and expected must have equal length"
        );
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }

    /// Gradient of `loss()` w.r.t. `predicted`: 2·(predicted - expected) / n.
    pub fn gradient(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        assert_eq!(
            predicted.len(),
            expected.len(),
            "gradient: predicted and expected must have equal length"
        );
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| 2.0 * (a - b) / n)
            .collect()
    }
}
