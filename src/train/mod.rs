pub mod trainer;
pub mod report;
pub mod train_config;
pub mod loop_fn;

pub use trainer::train_epoch;
pub use report::{StopReason, TrainReport};
pub use train_config::{StopPolicy, TrainConfig};
pub use loop_fn::train;
