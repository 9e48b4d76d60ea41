pub mod network_codec;
pub mod dataset_codec;
