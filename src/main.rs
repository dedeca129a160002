use glyphnet::dataset::{self, INPUT_SIZE, NUM_CLASSES};
use glyphnet::{evaluate, train, Activation, LayerSpec, NetworkSpec, TrainConfig};

fn main() {
    let spec = NetworkSpec {
        name: "digit-memorizer".to_string(),
        layers: vec![
            LayerSpec {
                input_size: INPUT_SIZE,
                output_size: 128,
                activation: Activation::Sigmoid,
            },
            LayerSpec {
                input_size: 128,
                output_size: NUM_CLASSES,
                activation: Activation::Softmax,
            },
        ],
        seed: 42,
    };

    let mut network = spec.build();
    let samples = dataset::digits();

    let config = TrainConfig::new(500, 0.1, 20);
    train(&mut network, &samples, &config);

    for (digit, prediction) in evaluate(&mut network, &samples).iter().enumerate() {
        println!(
            "Digit {digit}: predicted {} (probability: {:.4})",
            prediction.class, prediction.probability
        );
    }
}
