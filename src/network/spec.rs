use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::Activation;
use crate::layers::dense::Layer;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `input_size`  — number of values feeding into this layer (the previous
///                   layer's output size, or the raw input dimension for the
///                   first layer)
/// - `output_size` — number of values this layer produces
/// - `activation`  — activation function applied after the linear transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub input_size: usize,
    pub output_size: usize,
    pub activation: Activation,
}

/// A fully serializable description of a network architecture.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any
/// trained weights, so architecture configurations can be stored and rebuilt.
/// The `seed` drives weight initialization: two `build()` calls from the same
/// spec produce identical starting weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name for the configuration.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    /// Seed for the weight-initialization RNG.
    pub seed: u64,
}

impl NetworkSpec {
    /// Constructs the described network with freshly initialized weights.
    /// Dimension consistency of the chain is checked by `Network::new`.
    pub fn build(&self) -> Network {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let layers = self
            .layers
            .iter()
            .map(|spec| Layer::new(spec.input_size, spec.output_size, spec.activation, &mut rng))
            .collect();
        Network::new(layers, MseLoss)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
