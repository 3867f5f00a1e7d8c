use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the model artifact. Fatal to the session.
///
/// `Clone` so a cached failure can be handed out on every load attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArtifactError {
    #[error("Model file '{}' not found!", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error loading model: failed to read '{}': {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Error loading model: {reason}")]
    Deserialize { reason: String },
}

impl ArtifactError {
    /// Follow-up guidance shown under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ArtifactError::NotFound { .. } => {
                Some("Please ensure the trained model file is in the application directory.")
            }
            _ => None,
        }
    }
}

/// Errors raised while computing a probability. Recovered per render.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Feature count mismatch: model expects {expected}, input provides {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("Model is not a binary classifier ({classes} coefficient rows)")]
    NotBinary { classes: usize },

    #[error("Classifier returned an invalid probability: {value}")]
    InvalidProbability { value: f64 },

    #[error("{reason}")]
    Failed { reason: String },
}
