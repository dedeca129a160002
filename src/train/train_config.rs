use serde::{Deserialize, Serialize};

/// Hyperparameters for a `train` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `learning_rate` — SGD step size
/// - `log_every`     — print the mean epoch loss every N epochs (and on the
///                     final epoch); `0` disables progress output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64, log_every: usize) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_every,
        }
    }
}
