//! A single transformer-style encoder layer.
//!
//! [`EncoderLayer::forward`] mixes every position of a sequence with every
//! other position, weighting by scaled dot-product similarity of the raw
//! feature vectors, and then squashes each value with `tanh`. The scores are
//! deliberately left unnormalized (no softmax). The [`api`] module wraps the
//! layer in a JSON request/response shape for the `tiny-encoder` binary.

pub mod api;
pub use api::{EncoderRequest, EncoderResponse, construct, forward, run};

pub mod model;
pub use model::{EncoderLayer, LayerConfig, ModelError};

pub mod utils;
pub use utils::{ExecutionMode, Sequence};

pub mod error;
pub use error::{EncoderError, Result};
