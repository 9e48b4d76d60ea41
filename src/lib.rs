pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod layers;
pub mod network;
pub mod optim;
pub mod dataset;
pub mod codec;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use loss::aggregation::ErrorAggregation;
pub use layers::{Topology, Unit, UnitRole};
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use optim::sgd::Sgd;
pub use dataset::dataset::Dataset;
pub use train::{train, StopPolicy, StopReason, TrainConfig, TrainReport};
