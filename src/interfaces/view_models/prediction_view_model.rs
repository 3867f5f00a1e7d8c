use crate::application::prediction_panel::PredictionReport;
use crate::domain::tier::SaleTier;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct PredictionViewModel {
    pub readout: String,
    pub color: egui::Color32,
    pub icon: &'static str,
    pub tier_label: &'static str,
    pub headline: &'static str,
    pub recommendations: &'static [&'static str],
}

impl PredictionViewModel {
    pub fn from_report(report: &PredictionReport) -> Self {
        let (icon, tier_label) = match report.tier {
            SaleTier::High => ("✅", "HIGH"),
            SaleTier::Moderate => ("⚠️", "MODERATE"),
            SaleTier::Low => ("❌", "LOW"),
        };

        Self {
            readout: report.readout(),
            color: DesignSystem::tier_color(report.tier),
            icon,
            tier_label,
            headline: report.headline,
            recommendations: report.recommendations,
        }
    }
}
