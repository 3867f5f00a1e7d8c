use crate::domain::errors::PredictionError;
use crate::domain::listing::PredictionInput;

/// Interface for sale-probability models
pub trait SaleClassifier: Send + Sync {
    /// Probability (0.0 to 1.0) that the listing sells
    fn predict_proba(&self, input: &PredictionInput) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
