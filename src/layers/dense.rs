use crate::{activation::activation::Activation, math::matrix::Matrix};
use rand::Rng;

/// Cached forward-pass values a layer needs for its paired backward call.
///
/// A layer supports exactly one in-flight forward/backward pair: `forward`
/// moves the layer to `Forwarded`, `backward` consumes the cache and moves it
/// back to `Idle`. Calling `backward` from `Idle` is a caller bug and panics.
#[derive(Debug, Clone)]
enum ForwardState {
    Idle,
    Forwarded {
        input: Vec<f64>,
        pre_activation: Vec<f64>,
    },
}

/// Dense (fully-connected) layer: `a = activation(W·x + b)`.
#[derive(Debug)]
pub struct Layer {
    pub input_size: usize,
    pub output_size: usize,
    pub weights: Matrix,
    pub biases: Vec<f64>,
    pub activation: Activation,
    state: ForwardState,
}

impl Layer {
    /// Weights are Xavier-uniform in [-limit, limit] with
    /// limit = sqrt(6 / (input_size + output_size)); biases start at zero.
    pub fn new<R: Rng>(
        input_size: usize,
        output_size: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Layer {
        assert!(input_size > 0, "input_size must be at least 1");
        assert!(output_size > 0, "output_size must be at least 1");

        Layer {
            input_size,
            output_size,
            weights: Matrix::xavier(output_size, input_size, rng),
            biases: vec![0.0; output_size],
            activation,
            state: ForwardState::Idle,
        }
    }

    /// Computes `activation(W·x + b)` and caches `x` and the pre-activation
    /// for the paired `backward` call. Overwrites any previous cache.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        assert_eq!(
            input.len(),
            self.input_size,
            "forward: input length {} does not match layer input size {}",
            input.len(),
            self.input_size
        );

        let mut z = self.weights.matvec(input);
        for (zi, b) in z.iter_mut().zip(self.biases.iter()) {
            *zi += b;
        }

        let output = self.activation.activate(&z);
        self.state = ForwardState::Forwarded {
            input: input.to_vec(),
            pre_activation: z,
        };
        output
    }

    /// One gradient-descent step for this layer.
    ///
    /// `upstream_gradient` is ∂L/∂a for this layer's output. Updates weights
    /// and biases in place and returns ∂L/∂a for the previous layer, computed
    /// with the weights as they were BEFORE this step's update — those are
    /// the weights the forward pass went through.
    ///
    /// Panics unless the layer is in the `Forwarded` state.
    pub fn backward(&mut self, upstream_gradient: &[f64], learning_rate: f64) -> Vec<f64> {
        assert_eq!(
            upstream_gradient.len(),
            self.output_size,
            "backward: gradient length {} does not match layer output size {}",
            upstream_gradient.len(),
            self.output_size
        );

        let (input, pre_activation) =
            match std::mem::replace(&mut self.state, ForwardState::Idle) {
                ForwardState::Forwarded {
                    input,
                    pre_activation,
                } => (input, pre_activation),
                ForwardState::Idle => {
                    panic!("backward called without a preceding forward on this layer")
                }
            };

        // δ = ∂L/∂z. Element-wise activations use the Hadamard product with
        // the per-element derivative; Softmax needs the full Jacobian.
        let delta: Vec<f64> = if self.activation.supports_hadamard_derivative() {
            let act_derivative = self.activation.derivative(&pre_activation);
            upstream_gradient
                .iter()
                .zip(act_derivative.iter())
                .map(|(g, d)| g * d)
                .collect()
        } else {
            self.activation.jacobian(&pre_activation).matvec(upstream_gradient)
        };

        // Snapshot before the update: the propagated gradient must use the
        // pre-update weights.
        let old_weights = self.weights.clone();

        self.weights = self.weights.clone()
            - Matrix::outer(&delta, &input).map(|x| x * learning_rate);
        for (b, d) in self.biases.iter_mut().zip(delta.iter()) {
            *b -= learning_rate * d;
        }

        old_weights.transpose().matvec(&delta)
    }
}
