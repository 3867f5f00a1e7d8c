pub mod card;
pub mod price_chart;
pub mod readout;
