//! Encoder layer built from the attention pass and the activation
mod layer;

pub use layer::EncoderLayer;
