// Model-facing abstractions
pub mod ml;

// Per-render prediction logic
pub mod prediction_panel;

// Session bootstrap (load once, then ready or halted)
pub mod session;
