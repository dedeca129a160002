pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod dataset;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::Activation;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use loss::mse::MseLoss;
pub use dataset::Sample;
pub use train::train_config::TrainConfig;
pub use train::trainer::{evaluate, train, train_epoch, Prediction};
