use crate::application::prediction_panel::PredictionReport;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use eframe::egui;

/// Color-coded probability readout followed by the recommendation block
pub fn render_report(ui: &mut egui::Ui, report: &PredictionReport) {
    let vm = PredictionViewModel::from_report(report);

    Card::new().accent(vm.color).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("📊 {}", vm.readout))
                    .size(24.0)
                    .strong()
                    .color(vm.color),
            );
            ui.label(egui::RichText::new(vm.icon).size(22.0));
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
        render_status_pill(ui, vm.tier_label, vm.color);
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(egui::RichText::new(vm.headline).strong());
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.separator();
    ui.heading("💡 Business Recommendations");
    ui.add_space(DesignSystem::SPACING_SMALL);

    for line in vm.recommendations {
        ui.label(format!("• {}", line));
    }
}

/// Inline error for a failed render pass. The session stays interactive.
pub fn render_prediction_error(ui: &mut egui::Ui, message: &str) {
    Card::new().accent(DesignSystem::DANGER).show(ui, |ui| {
        ui.label(
            egui::RichText::new(format!("Error making prediction: {}", message))
                .color(DesignSystem::DANGER),
        );
    });
}

/// A small rounded status label
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}
