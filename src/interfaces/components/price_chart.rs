use crate::domain::listing::LISTING_PRICE_RANGE;
use crate::domain::tier::{HIGH_THRESHOLD, MODERATE_THRESHOLD};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, VLine};

/// Probability of sale as a function of listing price, with the tier
/// thresholds and the current price marked.
pub fn render_price_chart(ui: &mut egui::Ui, points: Vec<[f64; 2]>, current_price: f64) {
    if points.is_empty() {
        ui.label(
            egui::RichText::new("Price sensitivity unavailable for these inputs.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let curve = Line::new("Probability of sale", PlotPoints::from(points))
        .color(DesignSystem::ACCENT_PRIMARY)
        .width(2.0);

    Plot::new("price_sensitivity_plot")
        .height(220.0)
        .legend(Legend::default())
        .include_x(*LISTING_PRICE_RANGE.start())
        .include_x(*LISTING_PRICE_RANGE.end())
        .include_y(0.0)
        .include_y(1.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(curve);
            plot_ui.hline(
                HLine::new("High threshold", HIGH_THRESHOLD).color(DesignSystem::SUCCESS),
            );
            plot_ui.hline(
                HLine::new("Moderate threshold", MODERATE_THRESHOLD)
                    .color(DesignSystem::WARNING),
            );
            plot_ui.vline(
                VLine::new("Current price", current_price).color(DesignSystem::TEXT_MUTED),
            );
        });
}
