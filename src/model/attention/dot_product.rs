use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, Zip};

use crate::model::{Attention, ModelError};
use crate::utils::{ExecutionMode, accumulate_scaled, dot_product};

/// Unnormalized scaled dot-product self-attention.
///
/// Every input row acts as its own query, key and value. For output row `i`:
///
/// ```text
/// out[i] = sum over j of (dot(x[i], x[j]) / sqrt(d_model)) * x[j]
/// ```
///
/// The raw scores are summed directly; there is no softmax and no division by
/// the score total. `j` runs in ascending order for every `i`, in both
/// execution modes, so results are reproducible bit for bit.
#[derive(Debug, Clone)]
pub struct DotProductAttention {
    d_model: usize,
    scale: f64,
    execution: ExecutionMode,
}

impl DotProductAttention {
    pub fn new(d_model: usize, execution: ExecutionMode) -> Self {
        Self {
            d_model,
            scale: (d_model as f64).sqrt(),
            execution,
        }
    }

    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    fn attend_row(&self, x: ArrayView2<f64>, query: ArrayView1<f64>, mut out: ArrayViewMut1<f64>) {
        for key in x.rows() {
            let score = dot_product(query, key) / self.scale;
            accumulate_scaled(out.view_mut(), key, score);
        }
    }
}

impl Attention for DotProductAttention {
    fn forward(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, ModelError> {
        let (seq_len, width) = x.dim();
        if width != self.d_model {
            return Err(ModelError::ShapeMismatch(format!(
                "expected rows of {} elements, got {}",
                self.d_model, width
            )));
        }

        let mut output = Array2::<f64>::zeros((seq_len, self.d_model));
        let rows = Zip::from(output.rows_mut()).and(x.rows());

        match self.execution {
            ExecutionMode::Sequential => {
                rows.for_each(|out, query| self.attend_row(x, query, out));
            }
            ExecutionMode::Parallel => {
                rows.par_for_each(|out, query| self.attend_row(x, query, out));
            }
        }

        Ok(output)
    }
}
