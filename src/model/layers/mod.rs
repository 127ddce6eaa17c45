//! Parameter buffers owned by the layer

mod weights;

pub use weights::AttentionWeights;
