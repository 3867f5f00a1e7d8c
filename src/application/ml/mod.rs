pub mod logistic_predictor;
pub mod predictor;
