use crate::dataset::Sample;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;

/// Runs one full pass of per-sample SGD over `samples`, in dataset order,
/// and returns the mean loss.
///
/// Samples are deliberately NOT shuffled and NOT batched: each update sees
/// the weights left behind by the previous sample, and keeping the order
/// fixed makes a run bit-reproducible for a given initialization seed.
pub fn train_epoch(network: &mut Network, samples: &[Sample], learning_rate: f64) -> f64 {
    assert!(!samples.is_empty(), "samples must not be empty");

    let total_loss: f64 = samples
        .iter()
        .map(|sample| network.train_step(&sample.input, &sample.target, learning_rate))
        .sum();

    total_loss / samples.len() as f64
}

/// Trains `network` for `config.epochs` epochs and returns the mean loss of
/// the last completed epoch. Progress is printed every `config.log_every`
/// epochs and on the final epoch.
pub fn train(network: &mut Network, samples: &[Sample], config: &TrainConfig) -> f64 {
    assert!(config.epochs > 0, "epochs must be at least 1");

    let mut last_loss = 0.0;
    for epoch in 0..config.epochs {
        last_loss = train_epoch(network, samples, config.learning_rate);

        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch == config.epochs - 1) {
            println!("Epoch {epoch}, Loss: {last_loss:.6}");
        }
    }
    last_loss
}

/// Classification result for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Argmax of the network output.
    pub class: usize,
    /// The output component at `class`.
    pub probability: f64,
}

/// Runs inference over `samples` and returns the argmax class and its
/// probability for each.
pub fn evaluate(network: &mut Network, samples: &[Sample]) -> Vec<Prediction> {
    samples
        .iter()
        .map(|sample| {
            let output = network.predict(&sample.input);
            let class = argmax(&output);
            Prediction {
                class,
                probability: output[class],
            }
        })
        .collect()
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
