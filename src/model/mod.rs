//! Encoder layer implementation

mod attention;
mod config;
mod encoder;
mod error;
mod layers;

pub use attention::{Attention, DotProductAttention};
pub use config::LayerConfig;
pub use encoder::EncoderLayer;
pub use error::ModelError;
pub use layers::AttentionWeights;
