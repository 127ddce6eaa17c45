use ndarray::{Array2, ArrayView2};

use crate::model::ModelError;

/// Mixes a `(seq_len, d_model)` sequence into a new sequence of the same shape.
pub trait Attention: Send + Sync {
    fn forward(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, ModelError>;
}
