mod common;

use common::{FailingClassifier, FixedClassifier};
use estate_predictor::application::prediction_panel::PredictionPanel;
use estate_predictor::domain::listing::{
    AMENITY_COUNT_RANGE, HOUSE_AGE_RANGE, LISTING_PRICE_RANGE, PredictionInput,
    TRANSIT_DISTANCE_RANGE,
};
use estate_predictor::domain::tier::SaleTier;
use estate_predictor::infrastructure::model_store::ModelLoader;
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[test]
fn test_high_probability_stub_shows_high_tier_verbatim() {
    let panel = PredictionPanel::new(Arc::new(FixedClassifier(0.85)));

    let report = panel.render(&PredictionInput::default()).unwrap();

    assert_eq!(report.tier, SaleTier::High);
    assert_eq!(report.readout(), "Probability of Sale: 85.00%");
    assert_eq!(report.headline, "High probability of sale!");
    assert_eq!(
        report.recommendations,
        &[
            "Excellent pricing strategy!",
            "Property is likely to sell quickly."
        ]
    );
    assert_eq!(
        report.tier.summary(),
        "Excellent pricing strategy! Property is likely to sell quickly."
    );
}

#[test]
fn test_threshold_boundaries_through_panel() {
    let cases = [
        (0.8, SaleTier::High),
        (0.79999, SaleTier::Moderate),
        (0.6, SaleTier::Moderate),
        (0.59999, SaleTier::Low),
    ];

    for (p, expected) in cases {
        let panel = PredictionPanel::new(Arc::new(FixedClassifier(p)));
        let report = panel.render(&PredictionInput::default()).unwrap();
        assert_eq!(report.tier, expected, "p={}", p);
    }
}

#[test]
fn test_failing_classifier_is_recovered_per_render() {
    let classifier = Arc::new(FailingClassifier::default());
    let panel = PredictionPanel::new(classifier.clone());

    let first = PredictionInput::default();
    let err = panel.render(&first).unwrap_err();
    assert!(err.to_string().contains("model expects 4"));

    // Next render with different inputs tries again independently
    let second = PredictionInput::new(30, 1200, 2, 80.0);
    assert!(panel.render(&second).is_err());

    assert_eq!(classifier.calls.load(Ordering::SeqCst), 2);
    let seen = classifier.seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[first, second]);
}

#[test]
fn test_defaults_with_real_model_yield_exactly_one_tier() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ModelLoader::new(common::write_artifact(dir.path()));
    let panel = PredictionPanel::new(loader.load().unwrap());

    let report = panel.render(&PredictionInput::default()).unwrap();

    assert!((0.0..=1.0).contains(&report.probability));
    assert_eq!(report.tier, SaleTier::from_probability(report.probability));
    assert_eq!(report.recommendations, report.tier.recommendations());
}

#[test]
fn test_renders_are_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ModelLoader::new(common::write_artifact(dir.path()));
    let panel = PredictionPanel::new(loader.load().unwrap());
    let input = PredictionInput::new(22, 1750, 3, 67.25);

    let first = panel.render(&input).unwrap();
    for _ in 0..5 {
        assert_eq!(panel.render(&input).unwrap(), first);
    }
}

#[test]
fn test_probability_in_unit_interval_across_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ModelLoader::new(common::write_artifact(dir.path()));
    let panel = PredictionPanel::new(loader.load().unwrap());

    for age in [*HOUSE_AGE_RANGE.start(), 25, *HOUSE_AGE_RANGE.end()] {
        for distance in [*TRANSIT_DISTANCE_RANGE.start(), 2500, *TRANSIT_DISTANCE_RANGE.end()] {
            for stores in [*AMENITY_COUNT_RANGE.start(), 10, *AMENITY_COUNT_RANGE.end()] {
                for price in [*LISTING_PRICE_RANGE.start(), 60.0, *LISTING_PRICE_RANGE.end()] {
                    let report = panel
                        .render(&PredictionInput::new(age, distance, stores, price))
                        .unwrap();
                    assert!((0.0..=1.0).contains(&report.probability));
                }
            }
        }
    }
}

#[test]
fn test_price_sensitivity_skips_failed_points() {
    let panel = PredictionPanel::new(Arc::new(FailingClassifier::default()));
    assert!(
        panel
            .price_sensitivity(&PredictionInput::default(), 11)
            .is_empty()
    );
}
