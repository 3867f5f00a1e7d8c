use estate_predictor::application::session::PredictorSession;
use estate_predictor::config::AppConfig;
use estate_predictor::infrastructure::model_store::ModelLoader;
use estate_predictor::interfaces::app::PredictorApp;

use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging (stdout)
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .compact();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing Estate Predictor {}...", env!("CARGO_PKG_VERSION"));

    // 2. Load Config
    let config = AppConfig::from_env()?;
    info!("Model artifact: {:?}", config.model_path);

    // 3. Load the model once; the loader lives as long as the process
    let loader = ModelLoader::new(config.model_path.clone());
    let session = PredictorSession::start(&loader);
    if let PredictorSession::Halted { error: e } = &session {
        error!("Session halted: {}", e);
    }

    let app = PredictorApp::new(session, config.sensitivity_steps);

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([820.0, 900.0])
            .with_title("Real Estate Sale Probability Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Estate Predictor",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
