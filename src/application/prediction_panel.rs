use crate::application::ml::predictor::SaleClassifier;
use crate::domain::errors::PredictionError;
use crate::domain::listing::{LISTING_PRICE_RANGE, PredictionInput};
use crate::domain::tier::SaleTier;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything a successful render displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub input: PredictionInput,
    pub probability: f64,
    pub tier: SaleTier,
    pub headline: &'static str,
    pub recommendations: &'static [&'static str],
}

impl PredictionReport {
    pub fn new(input: PredictionInput, probability: f64) -> Self {
        let tier = SaleTier::from_probability(probability);
        Self {
            input,
            probability,
            tier,
            headline: tier.headline(),
            recommendations: tier.recommendations(),
        }
    }

    pub fn probability_pct(&self) -> f64 {
        self.probability * 100.0
    }

    /// e.g. "Probability of Sale: 85.00%"
    pub fn readout(&self) -> String {
        format!("Probability of Sale: {:.2}%", self.probability_pct())
    }
}

/// Turns the current slider values into a probability readout.
///
/// Stateless: every call is an independent render pass, so a failed
/// prediction never affects the next one.
pub struct PredictionPanel {
    classifier: Arc<dyn SaleClassifier>,
}

impl PredictionPanel {
    pub fn new(classifier: Arc<dyn SaleClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &dyn SaleClassifier {
        self.classifier.as_ref()
    }

    pub fn render(&self, input: &PredictionInput) -> Result<PredictionReport, PredictionError> {
        let input = input.clamped();

        let probability = self
            .classifier
            .predict_proba(&input)
            .and_then(validate_probability)
            .inspect_err(|e| warn!("Prediction failed for {:?}: {}", input, e))?;

        debug!(
            probability,
            house_age = input.house_age,
            transit_distance = input.transit_distance,
            amenity_count = input.amenity_count,
            listing_price = input.listing_price,
            "Rendered prediction"
        );
        Ok(PredictionReport::new(input, probability))
    }

    /// Sweeps the listing price across its range with the other inputs held,
    /// returning `[price, probability]` for every step that predicts cleanly.
    pub fn price_sensitivity(&self, input: &PredictionInput, steps: usize) -> Vec<[f64; 2]> {
        if steps < 2 {
            return Vec::new();
        }

        let (lo, hi) = (*LISTING_PRICE_RANGE.start(), *LISTING_PRICE_RANGE.end());
        let step = (hi - lo) / (steps - 1) as f64;

        (0..steps)
            .map(|i| input.with_listing_price(lo + step * i as f64))
            .filter_map(|candidate| {
                self.classifier
                    .predict_proba(&candidate)
                    .and_then(validate_probability)
                    .ok()
                    .map(|p| [candidate.listing_price, p])
            })
            .collect()
    }
}

fn validate_probability(probability: f64) -> Result<f64, PredictionError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(PredictionError::InvalidProbability { value: probability })
    }
}
