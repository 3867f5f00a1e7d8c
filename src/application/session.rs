use crate::application::prediction_panel::PredictionPanel;
use crate::domain::errors::ArtifactError;
use crate::infrastructure::model_store::ModelLoader;

pub const LOAD_SUCCESS_NOTICE: &str = "Trained model loaded successfully!";

/// Outcome of starting the interactive session.
///
/// A halted session never exposes a [`PredictionPanel`], so no prediction
/// UI is reachable after an artifact failure.
pub enum PredictorSession {
    Ready {
        panel: PredictionPanel,
        notice: &'static str,
    },
    Halted {
        error: ArtifactError,
    },
}

impl PredictorSession {
    pub fn start(loader: &ModelLoader) -> Self {
        match loader.load() {
            Ok(classifier) => PredictorSession::Ready {
                panel: PredictionPanel::new(classifier),
                notice: LOAD_SUCCESS_NOTICE,
            },
            Err(error) => PredictorSession::Halted { error },
        }
    }

    pub fn panel(&self) -> Option<&PredictionPanel> {
        match self {
            PredictorSession::Ready { panel, .. } => Some(panel),
            PredictorSession::Halted { .. } => None,
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, PredictorSession::Halted { .. })
    }
}
