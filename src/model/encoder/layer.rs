//! src/model/encoder/layer.rs

use ndarray::{Array2, ArrayView2};
use crate::model::attention::{Attention, DotProductAttention};
use crate::model::layers::AttentionWeights;
use crate::model::{LayerConfig, ModelError};
use crate::utils::{ExecutionMode, Sequence, array_to_sequence, sequence_to_array, tanh_inplace};

/// A single encoder layer: unnormalized self-attention followed by `tanh`.
///
/// The layer holds no mutable state, so one instance can serve any number of
/// calls, including concurrent ones through a shared reference.
#[derive(Debug, Clone)]
pub struct EncoderLayer {
    config: LayerConfig,
    weights: AttentionWeights,
    attention: DotProductAttention,
}

impl EncoderLayer {
    /// Builds a layer with the default constant weights and sequential execution.
    pub fn new(d_model: usize, num_heads: usize) -> Result<Self, ModelError> {
        Self::from_config(LayerConfig::new(d_model, num_heads))
    }

    pub fn from_config(config: LayerConfig) -> Result<Self, ModelError> {
        config.validate()?;

        let weights = AttentionWeights::constant(config.d_model, config.weight_init);
        let attention = DotProductAttention::new(config.d_model, config.execution);

        Ok(Self {
            config,
            weights,
            attention,
        })
    }

    pub fn d_model(&self) -> usize {
        self.config.d_model
    }

    pub fn num_heads(&self) -> usize {
        self.config.num_heads
    }

    pub fn execution(&self) -> ExecutionMode {
        self.attention.execution()
    }

    pub fn weights(&self) -> &AttentionWeights {
        &self.weights
    }

    pub fn self_attention_array(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, ModelError> {
        self.attention.forward(x)
    }

    pub fn forward_array(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, ModelError> {
        let mut output = self.self_attention_array(x)?;
        tanh_inplace(&mut output.view_mut());
        Ok(output)
    }

    /// Attention pass only, on owned rows. Fails before computing anything if
    /// any row length differs from `d_model`.
    pub fn self_attention(&self, sequence: &[Vec<f64>]) -> Result<Sequence, ModelError> {
        let x = sequence_to_array(sequence, self.d_model())?;
        let output = self.self_attention_array(x.view())?;
        Ok(array_to_sequence(output.view()))
    }

    /// Attention pass followed by elementwise `tanh`.
    pub fn forward(&self, sequence: &[Vec<f64>]) -> Result<Sequence, ModelError> {
        let x = sequence_to_array(sequence, self.d_model())?;
        let output = self.forward_array(x.view())?;
        Ok(array_to_sequence(output.view()))
    }
}
