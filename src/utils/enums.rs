use serde::{Deserialize, Serialize};

/// How output rows of the attention pass are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Every row on the calling thread
    Sequential,
    /// Rows spread over the rayon thread pool; per-row summation order is unchanged
    Parallel,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        Self::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Sequential);
    }

    #[test]
    fn test_lowercase_names() {
        let json = serde_json::to_string(&ExecutionMode::Parallel).unwrap();
        assert_eq!(json, "\"parallel\"");

        let mode: ExecutionMode = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(mode, ExecutionMode::Sequential);
    }
}
