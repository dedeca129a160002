use crate::math::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Activation applied after a layer's linear transform.
///
/// The set is closed on purpose: each variant is stateless and a single value
/// can be shared across every layer and sample of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Sigmoid,
    ReLU,
    /// Softmax is a vector-valued activation: every output component depends
    /// on the whole input vector, so its backward pass goes through
    /// `jacobian()` rather than the element-wise `derivative()` path.
    Softmax,
}

impl Activation {
    /// Applies the activation to a pre-activation vector `z`.
    ///
    /// Softmax subtracts `max(z)` before exponentiating; without that shift
    /// large logits overflow `exp`. The shift cancels in the normalization,
    /// so the result is mathematically unchanged.
    pub fn activate(&self, z: &[f64]) -> Vec<f64> {
        match self {
            Activation::Sigmoid => z.iter().map(|&x| 1.0 / (1.0 + (-x).exp())).collect(),
            Activation::ReLU => z.iter().map(|&x| if x > 0.0 { x } else { 0.0 }).collect(),
            Activation::Softmax => {
                let max = z.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let exps: Vec<f64> = z.iter().map(|&x| (x - max).exp()).collect();
                let sum: f64 = exps.iter().sum();
                exps.into_iter().map(|e| e / sum).collect()
            }
        }
    }

    /// Per-element derivative factor for the Hadamard backward path.
    ///
    /// For `Softmax` this returns only the diagonal of the true Jacobian;
    /// layers must never consume it element-wise
    /// (`supports_hadamard_derivative()` is false for that variant).
    pub fn derivative(&self, z: &[f64]) -> Vec<f64> {
        match self {
            Activation::Sigmoid => self
                .activate(z)
                .into_iter()
                .map(|s| s * (1.0 - s))
                .collect(),
            Activation::ReLU => z.iter().map(|&x| if x > 0.0 { 1.0 } else { 0.0 }).collect(),
            Activation::Softmax => self
                .activate(z)
                .into_iter()
                .map(|s| s * (1.0 - s))
                .collect(),
        }
    }

    /// Full Jacobian ∂a/∂z at `z`.
    ///
    /// Softmax: `diag(s) - s·sᵗ` where `s = activate(z)`. Element-wise
    /// variants reduce to `diag(derivative(z))`, which makes the Jacobian
    /// path algebraically equivalent to the Hadamard path for them.
    pub fn jacobian(&self, z: &[f64]) -> Matrix {
        match self {
            Activation::Softmax => {
                let s = self.activate(z);
                Matrix::diag(&s) - Matrix::outer(&s, &s)
            }
            _ => Matrix::diag(&self.derivative(z)),
        }
    }

    /// Whether the backward pass may use the element-wise `derivative()`
    /// (Hadamard product) instead of the full `jacobian()`.
    pub fn supports_hadamard_derivative(&self) -> bool {
        match self {
            Activation::Sigmoid | Activation::ReLU => true,
            Activation::Softmax => false,
        }
    }
}
