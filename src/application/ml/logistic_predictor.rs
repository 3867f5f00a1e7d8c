use super::predictor::SaleClassifier;
use crate::domain::errors::{ArtifactError, PredictionError};
use crate::domain::listing::PredictionInput;
use crate::domain::ml::feature_registry::{FEATURE_COUNT, features_to_vector};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::LogisticRegression;
use tracing::debug;

/// Serialized form of the artifact: a binary smartcore logistic regression
/// trained on labels 0 (no sale) and 1 (sale).
pub type SaleModel = LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>;

pub struct LogisticSaleClassifier {
    model: SaleModel,
}

impl LogisticSaleClassifier {
    pub fn new(model: SaleModel) -> Self {
        Self { model }
    }

    /// Decodes a JSON artifact produced with `serde_json::to_writer(&model)`.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ArtifactError> {
        serde_json::from_slice::<SaleModel>(bytes)
            .map(Self::new)
            .map_err(|e| ArtifactError::Deserialize {
                reason: e.to_string(),
            })
    }

    fn logit(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, PredictionError> {
        let coefficients = self.model.coefficients();
        let (rows, cols) = coefficients.shape();

        if rows != 1 {
            return Err(PredictionError::NotBinary { classes: rows });
        }
        if cols != features.len() {
            return Err(PredictionError::FeatureMismatch {
                expected: cols,
                actual: features.len(),
            });
        }

        let intercept = *self.model.intercept().get((0, 0));
        Ok(features
            .iter()
            .enumerate()
            .fold(intercept, |acc, (j, x)| acc + x * coefficients.get((0, j))))
    }
}

impl SaleClassifier for LogisticSaleClassifier {
    fn predict_proba(&self, input: &PredictionInput) -> Result<f64, PredictionError> {
        let features = features_to_vector(input);
        let logit = self.logit(&features)?;
        let probability = sigmoid(logit);

        if !probability.is_finite() {
            return Err(PredictionError::InvalidProbability { value: probability });
        }

        debug!(logit, probability, "Logistic prediction");
        Ok(probability)
    }

    fn name(&self) -> &str {
        "SmartCore Logistic Regression"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
