use ndarray::Array2;

/// Query, key and value buffers of an encoder layer.
///
/// The buffers are `d_model × d_model` and constant-filled at construction.
/// Attention scores are computed from the raw input rows, so nothing reads
/// these matrices after they are allocated.
#[derive(Debug, Clone)]
pub struct AttentionWeights {
    pub query: Array2<f64>,
    pub key: Array2<f64>,
    pub value: Array2<f64>,
}

impl AttentionWeights {
    pub fn constant(d_model: usize, fill: f64) -> Self {
        Self {
            query: Array2::from_elem((d_model, d_model), fill),
            key: Array2::from_elem((d_model, d_model), fill),
            value: Array2::from_elem((d_model, d_model), fill),
        }
    }

    /// Total number of scalars held across the three buffers
    pub fn num_parameters(&self) -> usize {
        self.query.len() + self.key.len() + self.value.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_shapes_and_fill() {
        let weights = AttentionWeights::constant(3, 0.1);

        for matrix in [&weights.query, &weights.key, &weights.value] {
            assert_eq!(matrix.dim(), (3, 3));
            assert!(matrix.iter().all(|&w| w == 0.1));
        }
        assert_eq!(weights.num_parameters(), 27);
    }
}
