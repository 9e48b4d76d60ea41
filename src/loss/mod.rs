pub mod mse;
pub mod aggregation;

pub use mse::MseLoss;
pub use aggregation::ErrorAggregation;
