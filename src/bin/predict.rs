//! Estate Predictor CLI - headless sale-probability readout
//!
//! Runs the same loader and prediction panel as the desktop app for a single
//! set of inputs and prints the result.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- --house-age 5 --listing-price 38.5 --sweep
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Model artifact location (default: real_estate_model.json)
//! - `SENSITIVITY_STEPS` - Points on the `--sweep` table (default: 41)

use anyhow::Result;
use clap::Parser;
use estate_predictor::application::session::PredictorSession;
use estate_predictor::config::AppConfig;
use estate_predictor::domain::listing::PredictionInput;
use estate_predictor::infrastructure::model_store::ModelLoader;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// House age in years [0, 50]
    #[arg(long, default_value_t = 10)]
    house_age: u32,

    /// Distance to the nearest MRT station in meters [0, 5000]
    #[arg(long, default_value_t = 300)]
    transit_distance: u32,

    /// Number of convenience stores nearby [0, 20]
    #[arg(long, default_value_t = 5)]
    amenity_count: u32,

    /// Listing price per m² [20.0, 100.0]
    #[arg(long, default_value_t = 45.0)]
    listing_price: f64,

    /// Also print probability across the listing price range
    #[arg(long)]
    sweep: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays parseable with --json
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(model) = args.model {
        config.model_path = model;
    }

    let loader = ModelLoader::new(config.model_path.clone());
    let panel = match PredictorSession::start(&loader) {
        PredictorSession::Ready { panel, notice } => {
            info!("{}", notice);
            panel
        }
        PredictorSession::Halted { error } => {
            if let Some(hint) = error.hint() {
                eprintln!("{}", hint);
            }
            return Err(error.into());
        }
    };

    let input = PredictionInput::new(
        args.house_age,
        args.transit_distance,
        args.amenity_count,
        args.listing_price,
    );

    let report = match panel.render(&input) {
        Ok(report) => report,
        Err(e) => anyhow::bail!("Error making prediction: {}", e),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.readout());
        println!("{}", report.headline);
        println!();
        println!("Business Recommendations:");
        for line in report.recommendations {
            println!("  - {}", line);
        }
    }

    if args.sweep {
        println!();
        println!("  Price (NT$/m²)   Probability");
        for [price, probability] in panel.price_sensitivity(&input, config.sensitivity_steps) {
            println!("  {:>14.2}   {:>10.2}%", price, probability * 100.0);
        }
    }

    Ok(())
}
