//! Configuration module for the estate predictor.
//!
//! Values come from environment variables (a `.env` file is loaded by the
//! binaries before this runs). Everything has a default, so an empty
//! environment yields a working configuration.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "real_estate_model.json";
pub const DEFAULT_SENSITIVITY_STEPS: usize = 41;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Location of the serialized classifier (`MODEL_PATH`)
    pub model_path: PathBuf,
    /// Number of points on the price-sensitivity curve (`SENSITIVITY_STEPS`)
    pub sensitivity_steps: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            sensitivity_steps: DEFAULT_SENSITIVITY_STEPS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to mutate
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model_path = lookup("MODEL_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let sensitivity_steps = match lookup("SENSITIVITY_STEPS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid SENSITIVITY_STEPS: {}", raw))?,
            None => DEFAULT_SENSITIVITY_STEPS,
        };
        if sensitivity_steps < 2 {
            anyhow::bail!(
                "Invalid SENSITIVITY_STEPS: {}. Must be at least 2",
                sensitivity_steps
            );
        }

        Ok(Self {
            model_path,
            sensitivity_steps,
        })
    }
}
