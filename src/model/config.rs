use serde::{Serialize, Deserialize};
use crate::utils::ExecutionMode;

use super::error::ModelError;

/// Construction parameters for an encoder layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub d_model: usize,                  // Length of every feature vector
    pub num_heads: usize,                // Accepted and validated, never used by the computation

    #[serde(default = "default_weight_init")]
    pub weight_init: f64,                // Fill value for the inert query/key/value buffers
    #[serde(default)]
    pub execution: ExecutionMode,
}

fn default_weight_init() -> f64 { 0.1 }

impl LayerConfig {
    pub fn new(d_model: usize, num_heads: usize) -> Self {
        Self {
            d_model,
            num_heads,
            weight_init: default_weight_init(),
            execution: ExecutionMode::default(),
        }
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.d_model == 0 {
            return Err(ModelError::InvalidDimension(
                "d_model must be positive".to_string(),
            ));
        }
        if self.num_heads == 0 {
            return Err(ModelError::InvalidDimension(
                "num_heads must be positive".to_string(),
            ));
        }
        // Three d_model x d_model f64 buffers must be addressable
        let fits = self
            .d_model
            .checked_mul(self.d_model)
            .and_then(|n| n.checked_mul(3 * std::mem::size_of::<f64>()))
            .map_or(false, |bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(ModelError::InvalidDimension(format!(
                "d_model = {} is too large for the weight buffers",
                self.d_model
            )));
        }
        Ok(())
    }
}
