/// Result type for topology building operations.
pub type LayerResult<T> = Result<T, LayerError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Errors that can occur while building network topology.
pub enum LayerError {
    #[error("Invalid argument: expected {expected} weights, got {actual}")]
    WeightsCount {
        expected: usize,
        actual: usize
    },

    #[error("Invalid argument: weight at index {index} is not a finite number")]
    NonFiniteWeight {
        index: usize
    },

    #[error("Network must have at least 2 layers, got {0}")]
    NotEnoughLayers(usize)
}

impl LayerError {
    #[inline]
    /// Check if the error was caused by an invalid weights list
    /// given to one of the `connect_to` methods.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::WeightsCount { .. } | Self::NonFiniteWeight { .. })
    }
}

#[test]
fn test_layer_error_messages() {
    let error = LayerError::WeightsCount { expected: 9, actual: 0 };

    assert!(error.is_invalid_argument());
    assert_eq!(error.to_string(), "Invalid argument: expected 9 weights, got 0");

    let error = LayerError::NonFiniteWeight { index: 3 };

    assert!(error.is_invalid_argument());
    assert_eq!(error.to_string(), "Invalid argument: weight at index 3 is not a finite number");

    assert!(!LayerError::NotEnoughLayers(1).is_invalid_argument());
}
