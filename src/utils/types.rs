use ndarray::{Array2, ArrayView2};

use crate::model::ModelError;

/// A sequence as it crosses the public boundary: `seq_len` rows of `d_model` values.
pub type Sequence = Vec<Vec<f64>>;

/// Packs rows into a `(seq_len, d_model)` matrix.
///
/// Every row must have exactly `d_model` elements; the first offending row is
/// reported and nothing is allocated for the output.
pub fn sequence_to_array(rows: &[Vec<f64>], d_model: usize) -> Result<Array2<f64>, ModelError> {
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != d_model) {
        return Err(ModelError::row_length(i, d_model, row.len()));
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), d_model), flat)
        .map_err(|e| ModelError::ShapeMismatch(e.to_string()))
}

/// Unpacks a matrix back into owned rows.
pub fn array_to_sequence(array: ArrayView2<f64>) -> Sequence {
    array.rows().into_iter().map(|row| row.to_vec()).collect()
}
