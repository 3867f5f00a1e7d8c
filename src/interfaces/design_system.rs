use crate::domain::tier::SaleTier;
use eframe::egui;

/// Dark theme shared by every panel of the predictor
pub struct DesignSystem;

impl DesignSystem {
    // Surfaces
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(13, 17, 23); // #0D1117
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(22, 27, 34); // #161B22
    pub const BG_SLIDER_TRACK: egui::Color32 = egui::Color32::from_rgb(33, 38, 45);

    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(88, 166, 255); // #58A6FF

    // Tier colors (success / warning / error)
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(63, 185, 80); // #3FB950
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(210, 153, 34); // #D29922
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(248, 81, 73); // #F85149

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(230, 237, 243);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(150);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(110);

    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_SLIDER_TRACK;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER);
        visuals.widgets.inactive.bg_fill = Self::BG_SLIDER_TRACK;
        visuals.widgets.hovered.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.6);
        visuals.widgets.active.bg_fill = Self::ACCENT_PRIMARY;
        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.4);

        visuals
    }

    /// Readout color for a probability tier
    pub fn tier_color(tier: SaleTier) -> egui::Color32 {
        match tier {
            SaleTier::High => Self::SUCCESS,
            SaleTier::Moderate => Self::WARNING,
            SaleTier::Low => Self::DANGER,
        }
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(8)
            .stroke(egui::Stroke::new(1.0, Self::BORDER))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
