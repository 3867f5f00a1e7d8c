#![allow(dead_code)]

use estate_predictor::application::ml::logistic_predictor::SaleModel;
use estate_predictor::application::ml::predictor::SaleClassifier;
use estate_predictor::domain::errors::PredictionError;
use estate_predictor::domain::listing::PredictionInput;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fits a small model where cheap listings close to transit tend to sell.
pub fn fit_sale_model() -> SaleModel {
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for i in 0..60u32 {
        let price = 20.0 + f64::from(i % 40) * 2.0;
        let distance = f64::from((i * 83) % 5000);
        let stores = f64::from(i % 21);
        let age = f64::from((i * 7) % 51);
        // Mostly price driven, with a few flipped labels so classes overlap
        let sold = (price < 60.0) ^ (i % 11 == 0);
        rows.push(vec![age, distance, stores, price]);
        labels.push(i32::from(sold));
    }

    let x = DenseMatrix::from_2d_vec(&rows).expect("valid training matrix");
    LogisticRegression::fit(&x, &labels, LogisticRegressionParameters::default())
        .expect("model fits")
}

/// Writes a freshly fitted artifact into `dir` and returns its path.
pub fn write_artifact(dir: &Path) -> PathBuf {
    let path = dir.join("real_estate_model.json");
    let file = std::fs::File::create(&path).expect("create artifact");
    serde_json::to_writer(file, &fit_sale_model()).expect("serialize artifact");
    path
}

/// Always returns the same probability.
pub struct FixedClassifier(pub f64);

impl SaleClassifier for FixedClassifier {
    fn predict_proba(&self, _input: &PredictionInput) -> Result<f64, PredictionError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Fails every call, recording each input it was asked about.
#[derive(Default)]
pub struct FailingClassifier {
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<PredictionInput>>,
}

impl SaleClassifier for FailingClassifier {
    fn predict_proba(&self, input: &PredictionInput) -> Result<f64, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(*input);
        Err(PredictionError::Failed {
            reason: "X has 3 features, but the model expects 4".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn version(&self) -> &str {
        "test"
    }
}
