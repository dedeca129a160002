use crate::{layers::dense::Layer, loss::mse::MseLoss};

/// Ordered stack of dense layers trained against a single loss function.
pub struct Network {
    pub layers: Vec<Layer>,
    pub loss: MseLoss,
}

impl Network {
    /// Validates the chain at construction: at least one layer, and each
    /// layer's output size must equal the next layer's input size.
    pub fn new(layers: Vec<Layer>, loss: MseLoss) -> Network {
        assert!(!layers.is_empty(), "a network needs at least one layer");
        for pair in layers.windows(2) {
            assert_eq!(
                pair[0].output_size,
                pair[1].input_size,
                "layer chain mismatch: output size {} feeds input size {}",
                pair[0].output_size,
                pair[1].input_size
            );
        }
        Network { layers, loss }
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].input_size
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].output_size
    }

    /// Forward pass; each layer caches what its backward call needs.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.forward(&current);
        }
        current
    }

    /// Inference entry point. Identical to `forward`; the per-layer caches it
    /// refreshes are simply never consumed.
    pub fn predict(&mut self, input: &[f64]) -> Vec<f64> {
        self.forward(input)
    }

    /// One stochastic-gradient-descent step on a single sample.
    ///
    /// Runs the forward pass, then walks the layers in reverse, threading
    /// each layer's returned gradient into the one before it. Every layer
    /// updates its own weights in place. Returns the sample's scalar loss
    /// (monitoring only).
    pub fn train_step(&mut self, input: &[f64], target: &[f64], learning_rate: f64) -> f64 {
        let output = self.forward(input);
        let loss_value = self.loss.loss(&output, target);

        let mut gradient = self.loss.gradient(&output, target);
        for layer in self.layers.iter_mut().rev() {
            gradient = layer.backward(&gradient, learning_rate);
        }

        loss_value
    }
}
