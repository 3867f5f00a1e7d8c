use serde::Serialize;

/// Lower bound (inclusive) of the high tier.
pub const HIGH_THRESHOLD: f64 = 0.8;
/// Lower bound (inclusive) of the moderate tier.
pub const MODERATE_THRESHOLD: f64 = 0.6;

/// Probability band driving the readout color and the recommendation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleTier {
    High,
    Moderate,
    Low,
}

impl SaleTier {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_THRESHOLD {
            SaleTier::High
        } else if probability >= MODERATE_THRESHOLD {
            SaleTier::Moderate
        } else {
            SaleTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaleTier::High => "high",
            SaleTier::Moderate => "moderate",
            SaleTier::Low => "low",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            SaleTier::High => "High probability of sale!",
            SaleTier::Moderate => "Moderate probability of sale.",
            SaleTier::Low => "Low probability of sale. Consider adjusting the price.",
        }
    }

    /// Bullet points of the "Business Recommendations" block.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            SaleTier::High => &[
                "Excellent pricing strategy!",
                "Property is likely to sell quickly.",
            ],
            SaleTier::Moderate => &[
                "Price is reasonable but could be optimized",
                "Consider minor price adjustment or marketing strategy",
            ],
            SaleTier::Low => &[
                "Consider reducing the listing price",
                "Highlight proximity to amenities if applicable",
                "Emphasize transit accessibility if distance is low",
            ],
        }
    }

    /// Single-sentence form of the recommendation block.
    pub fn summary(&self) -> &'static str {
        match self {
            SaleTier::High => "Excellent pricing strategy! Property is likely to sell quickly.",
            SaleTier::Moderate => {
                "Price is reasonable but could be optimized; consider minor price adjustment or marketing strategy."
            }
            SaleTier::Low => {
                "Consider reducing the listing price; highlight proximity to amenities if applicable; emphasize transit accessibility if distance is low."
            }
        }
    }
}
