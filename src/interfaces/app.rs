use crate::application::session::PredictorSession;
use crate::domain::listing::{
    AMENITY_COUNT_RANGE, HOUSE_AGE_RANGE, LISTING_PRICE_RANGE, PredictionInput,
    TRANSIT_DISTANCE_RANGE,
};
use crate::interfaces::components::card::Card;
use crate::interfaces::components::price_chart::render_price_chart;
use crate::interfaces::components::readout::{render_prediction_error, render_report};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

const DESCRIPTION: &str = "This app predicts the probability that a real estate property will sell based on:";
const FEATURE_BULLETS: &[&str] = &[
    "House age",
    "Distance to nearest MRT station",
    "Number of convenience stores nearby",
    "Listing price",
];

/// Desktop front-end. Every frame is one render pass over the current
/// slider values; nothing from a previous pass is reused.
pub struct PredictorApp {
    session: PredictorSession,
    input: PredictionInput,
    sensitivity_steps: usize,
}

impl PredictorApp {
    pub fn new(session: PredictorSession, sensitivity_steps: usize) -> Self {
        Self {
            session,
            input: PredictionInput::default(),
            sensitivity_steps,
        }
    }

    fn render_halted(ui: &mut egui::Ui, session: &PredictorSession) {
        let PredictorSession::Halted { error } = session else {
            return;
        };

        Card::new().accent(DesignSystem::DANGER).show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("❌ {}", error))
                    .size(18.0)
                    .strong()
                    .color(DesignSystem::DANGER),
            );
            if let Some(hint) = error.hint() {
                ui.label(egui::RichText::new(hint).color(DesignSystem::DANGER));
            }
        });
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        Card::new().title("LISTING").show(ui, |ui| {
            ui.spacing_mut().slider_width = 320.0;

            ui.add(
                egui::Slider::new(&mut self.input.house_age, HOUSE_AGE_RANGE)
                    .text("House Age (years)"),
            );
            ui.add(
                egui::Slider::new(&mut self.input.transit_distance, TRANSIT_DISTANCE_RANGE)
                    .text("Distance to MRT (meters)"),
            );
            ui.add(
                egui::Slider::new(&mut self.input.amenity_count, AMENITY_COUNT_RANGE)
                    .text("Number of Convenience Stores"),
            );
            ui.add(
                egui::Slider::new(&mut self.input.listing_price, LISTING_PRICE_RANGE)
                    .fixed_decimals(2)
                    .text("Listing Price (NT$/m²)"),
            );
        });
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.session.is_halted() {
                        Self::render_halted(ui, &self.session);
                        return;
                    }

                    if let PredictorSession::Ready { notice, .. } = &self.session {
                        ui.label(
                            egui::RichText::new(format!("✅ {}", notice))
                                .color(DesignSystem::SUCCESS),
                        );
                    }

                    ui.heading(
                        egui::RichText::new("🏡 Real Estate Sale Probability Predictor")
                            .size(26.0)
                            .strong(),
                    );
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    ui.label(DESCRIPTION);
                    for bullet in FEATURE_BULLETS {
                        ui.label(format!("• {}", bullet));
                    }
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    self.render_inputs(ui);
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    let Some(panel) = self.session.panel() else {
                        return;
                    };

                    match panel.render(&self.input) {
                        Ok(report) => {
                            render_report(ui, &report);

                            ui.add_space(DesignSystem::SPACING_LARGE);
                            ui.heading("📈 Price Sensitivity");
                            let points =
                                panel.price_sensitivity(&report.input, self.sensitivity_steps);
                            render_price_chart(ui, points, report.input.listing_price);
                        }
                        Err(e) => render_prediction_error(ui, &e.to_string()),
                    }
                });
            });
    }
}
