// Domain-specific error types
pub mod errors;

// Prediction input record and its bounds
pub mod listing;

// Feature ordering shared with the model artifact
pub mod ml;

// Probability bands and recommendation text
pub mod tier;
