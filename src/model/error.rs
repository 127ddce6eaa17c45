use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

impl ModelError {
    pub fn row_length(row: usize, expected: usize, got: usize) -> Self {
        ModelError::ShapeMismatch(format!(
            "row {} has {} elements, expected d_model = {}",
            row, got, expected
        ))
    }
}
