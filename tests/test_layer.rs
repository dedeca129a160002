// Tests for the dense layer: shapes, initialization, the forward/backward
// protocol, and the pre-update-weights rule in backward.

use approx::assert_relative_eq;
use glyphnet::{Activation, Layer, Matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn forward_maps_input_size_to_output_size() {
    let mut layer = Layer::new(400, 128, Activation::Sigmoid, &mut rng());
    let output = layer.forward(&vec![0.5; 400]);
    assert_eq!(output.len(), 128);
}

#[test]
#[should_panic(expected = "does not match layer input size")]
fn forward_rejects_wrong_input_length() {
    let mut layer = Layer::new(400, 128, Activation::Sigmoid, &mut rng());
    layer.forward(&vec![0.5; 399]);
}

#[test]
#[should_panic(expected = "backward called without a preceding forward")]
fn backward_requires_a_prior_forward() {
    let mut layer = Layer::new(3, 2, Activation::ReLU, &mut rng());
    layer.backward(&[1.0, 1.0], 0.1);
}

#[test]
#[should_panic(expected = "backward called without a preceding forward")]
fn backward_consumes_the_forward_cache() {
    let mut layer = Layer::new(3, 2, Activation::ReLU, &mut rng());
    layer.forward(&[1.0, 0.0, -1.0]);
    layer.backward(&[1.0, 1.0], 0.1);
    // Second backward without a new forward must panic.
    layer.backward(&[1.0, 1.0], 0.1);
}

#[test]
fn weights_are_xavier_uniform_and_biases_zero() {
    let layer = Layer::new(400, 128, Activation::Sigmoid, &mut rng());
    let limit = (6.0_f64 / (400 + 128) as f64).sqrt();

    assert_eq!(layer.weights.rows, 128);
    assert_eq!(layer.weights.cols, 400);
    for row in &layer.weights.data {
        for &w in row {
            assert!(w.abs() <= limit, "weight {} outside [-{}, {}]", w, limit, limit);
        }
    }
    assert!(layer.biases.iter().all(|&b| b == 0.0));
}

#[test]
fn forward_applies_weights_biases_and_activation() {
    let mut layer = Layer::new(2, 2, Activation::ReLU, &mut rng());
    layer.weights = Matrix::from_data(vec![vec![1.0, 2.0], vec![-3.0, 4.0]]);
    layer.biases = vec![0.5, -20.0];

    // z = (1·1 + 2·2 + 0.5, -3·1 + 4·2 - 20) = (5.5, -15), relu → (5.5, 0)
    let output = layer.forward(&[1.0, 2.0]);
    assert_relative_eq!(output[0], 5.5, epsilon = 1e-12);
    assert_eq!(output[1], 0.0);
}

#[test]
fn backward_propagates_through_pre_update_weights() {
    // One layer, one sample, ReLU with positive pre-activations so that
    // delta == upstream gradient and the arithmetic stays transparent.
    let mut layer = Layer::new(2, 2, Activation::ReLU, &mut rng());
    layer.weights = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    layer.biases = vec![1.0, 1.0];

    let input = [2.0, 3.0];
    layer.forward(&input); // z = (3, 4), both positive

    let old_weights = layer.weights.clone();
    let upstream = [0.5, -0.25];
    let learning_rate = 0.5; // large on purpose so the update visibly shifts W
    let propagated = layer.backward(&upstream, learning_rate);

    // Expected: old_Wᵗ · delta with delta == upstream.
    let expected = old_weights.transpose().matvec(&upstream);
    for (p, e) in propagated.iter().zip(expected.iter()) {
        assert_relative_eq!(p, e, epsilon = 1e-12);
    }

    // Using the post-update weights instead would give a different answer.
    let wrong = layer.weights.transpose().matvec(&upstream);
    assert!(
        propagated
            .iter()
            .zip(wrong.iter())
            .any(|(p, w)| (p - w).abs() > 1e-9),
        "post-update weights produced the same gradient; test setup is degenerate"
    );

    // And the parameters themselves did move: W -= lr · delta · xᵗ, b -= lr · delta.
    assert_relative_eq!(layer.weights.data[0][0], 1.0 - 0.5 * 0.5 * 2.0, epsilon = 1e-12);
    assert_relative_eq!(layer.weights.data[1][1], 1.0 + 0.5 * 0.25 * 3.0, epsilon = 1e-12);
    assert_relative_eq!(layer.biases[0], 1.0 - 0.5 * 0.5, epsilon = 1e-12);
    assert_relative_eq!(layer.biases[1], 1.0 + 0.5 * 0.25, epsilon = 1e-12);
}

#[test]
fn softmax_layer_backward_uses_the_jacobian_path() {
    let mut layer = Layer::new(2, 2, Activation::Softmax, &mut rng());
    layer.weights = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    layer.biases = vec![0.0, 0.0];

    let input = [1.0, -1.0];
    let output = layer.forward(&input);

    let upstream = [1.0, 0.0];
    let propagated = layer.backward(&upstream, 0.0); // lr 0: isolate the gradient math

    // delta = (diag(s) - s·sᵗ) · upstream = (s0(1-s0), -s1·s0);
    // with identity weights the propagated gradient equals delta.
    let s = output;
    assert_relative_eq!(propagated[0], s[0] * (1.0 - s[0]), epsilon = 1e-12);
    assert_relative_eq!(propagated[1], -s[1] * s[0], epsilon = 1e-12);
}
