//! Request/response adapter around [`EncoderLayer`].
//!
//! Callers that speak JSON (the CLI, or any service wrapping this crate)
//! describe a layer and an input matrix in one [`EncoderRequest`]. Each request
//! builds a fresh layer, runs the forward pass and reports how long that took.
//! Field names on the request keep the query/body names of the HTTP service
//! this layer was first exposed through.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{EncoderLayer, LayerConfig, ModelError};
use crate::utils::{ExecutionMode, Sequence};

/// Builds a layer with default weights and sequential execution.
pub fn construct(d_model: usize, num_heads: usize) -> std::result::Result<EncoderLayer, ModelError> {
    EncoderLayer::new(d_model, num_heads)
}

/// Runs the full forward pass of `layer` over `sequence`.
pub fn forward(layer: &EncoderLayer, sequence: &[Vec<f64>]) -> std::result::Result<Sequence, ModelError> {
    layer.forward(sequence)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderRequest {
    /// Feature dimensionality (`d_model`)
    pub dimensionalidad: usize,
    /// Head count, validated but inert
    pub attention_heads: usize,
    pub matrix: Sequence,
    #[serde(default)]
    pub execution: ExecutionMode,
}

impl EncoderRequest {
    pub fn new(d_model: usize, num_heads: usize, matrix: Sequence) -> Self {
        Self {
            dimensionalidad: d_model,
            attention_heads: num_heads,
            matrix,
            execution: ExecutionMode::default(),
        }
    }

    /// A request over a deterministic `seq_len × d_model` matrix,
    /// `matrix[i][k] = sin(0.37 * (i * d_model + k))`.
    pub fn sample(d_model: usize, seq_len: usize, num_heads: usize) -> Self {
        let matrix = (0..seq_len)
            .map(|i| {
                (0..d_model)
                    .map(|k| ((i * d_model + k) as f64 * 0.37).sin())
                    .collect()
            })
            .collect();
        Self::new(d_model, num_heads, matrix)
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn layer_config(&self) -> LayerConfig {
        LayerConfig::new(self.dimensionalidad, self.attention_heads).with_execution(self.execution)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderResponse {
    pub output: Sequence,
    /// Wall time for layer construction plus the forward pass
    pub elapsed_secs: f64,
}

impl EncoderResponse {
    /// Plain-text rendering: timing line, then the output rows.
    pub fn summary(&self) -> String {
        format!(
            "Time taken in seconds: {}\nEncoder output: {:?}",
            self.elapsed_secs, self.output
        )
    }
}

/// Handles one request end to end.
pub fn run(request: &EncoderRequest) -> Result<EncoderResponse> {
    let start = Instant::now();

    let layer = EncoderLayer::from_config(request.layer_config())?;
    let output = layer.forward(&request.matrix)?;

    let elapsed = start.elapsed();
    log::debug!(
        "[perf] encoder::run d_model={} heads={} params={} seq_len={} execution={:?} {:.3}ms",
        layer.d_model(),
        layer.num_heads(),
        layer.weights().num_parameters(),
        output.len(),
        layer.execution(),
        elapsed.as_secs_f64() * 1e3
    );

    Ok(EncoderResponse {
        output,
        elapsed_secs: elapsed.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncoderError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_construct_and_forward() {
        let layer = construct(2, 1).unwrap();
        let output = forward(&layer, &[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();

        assert_eq!(output.len(), 2);
        assert_abs_diff_eq!(output[1][1], (1.0 / 2f64.sqrt()).tanh(), epsilon = 1e-12);
    }

    #[test]
    fn test_run_returns_output_and_timing() {
        let request = EncoderRequest::new(2, 2, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let response = run(&request).unwrap();

        assert_eq!(response.output, construct(2, 2).unwrap().forward(&request.matrix).unwrap());
        assert!(response.elapsed_secs >= 0.0);
    }

    #[test]
    fn test_run_rejects_invalid_dimension() {
        let request = EncoderRequest::new(0, 1, vec![]);
        let err = run(&request).unwrap_err();
        assert!(matches!(
            err,
            EncoderError::Model(ModelError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_run_rejects_ragged_matrix() {
        let request = EncoderRequest::new(2, 1, vec![vec![1.0, 2.0], vec![3.0]]);
        let err = run(&request).unwrap_err();
        assert!(matches!(err, EncoderError::Model(ModelError::ShapeMismatch(_))));
    }

    #[test]
    fn test_request_json_field_names() {
        let json = r#"{"dimensionalidad": 3, "attention_heads": 2, "matrix": [[0.0, 1.0, 0.5]]}"#;
        let request: EncoderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, EncoderRequest::new(3, 2, vec![vec![0.0, 1.0, 0.5]]));
        assert_eq!(request.layer_config(), LayerConfig::new(3, 2));
    }

    #[test]
    fn test_request_parallel_execution() {
        let json = r#"{"dimensionalidad": 1, "attention_heads": 1, "matrix": [[2.0]], "execution": "parallel"}"#;
        let request: EncoderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.layer_config().execution, ExecutionMode::Parallel);

        // 2 * (4 / 1) = 8, tanh(8)
        let response = run(&request).unwrap();
        assert_abs_diff_eq!(response.output[0][0], 8f64.tanh(), epsilon = 1e-12);
    }

    #[test]
    fn test_run_rejects_oversized_dimension() {
        let json = r#"{"dimensionalidad": 4294967296, "attention_heads": 1, "matrix": []}"#;
        let request: EncoderRequest = serde_json::from_str(json).unwrap();
        let err = run(&request).unwrap_err();
        assert!(matches!(
            err,
            EncoderError::Model(ModelError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_sample_matrix_is_deterministic() {
        let request = EncoderRequest::sample(3, 2, 4);

        assert_eq!(request.dimensionalidad, 3);
        assert_eq!(request.attention_heads, 4);
        assert_eq!(request.execution, ExecutionMode::Sequential);
        assert_eq!(request.matrix.len(), 2);
        assert_eq!(request.matrix[0][0], 0.0);
        assert_abs_diff_eq!(request.matrix[0][1], 0.37f64.sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(request.matrix[1][2], (5.0 * 0.37f64).sin(), epsilon = 1e-15);
        assert_eq!(request, EncoderRequest::sample(3, 2, 4));
    }

    #[test]
    fn test_with_execution_overrides_request() {
        let json = r#"{"dimensionalidad": 2, "attention_heads": 1, "matrix": [[1.0, 0.5]], "execution": "sequential"}"#;
        let request: EncoderRequest = serde_json::from_str(json).unwrap();
        let baseline = run(&request).unwrap();

        let request = request.with_execution(ExecutionMode::Parallel);
        assert_eq!(request.layer_config().execution, ExecutionMode::Parallel);
        assert_eq!(run(&request).unwrap().output, baseline.output);
    }

    #[test]
    fn test_summary_format() {
        let response = EncoderResponse {
            output: vec![vec![0.5, 0.0]],
            elapsed_secs: 0.25,
        };
        assert_eq!(
            response.summary(),
            "Time taken in seconds: 0.25\nEncoder output: [[0.5, 0.0]]"
        );
    }
}
