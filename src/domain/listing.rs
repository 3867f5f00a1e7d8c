use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const HOUSE_AGE_RANGE: RangeInclusive<u32> = 0..=50;
pub const TRANSIT_DISTANCE_RANGE: RangeInclusive<u32> = 0..=5000;
pub const AMENITY_COUNT_RANGE: RangeInclusive<u32> = 0..=20;
pub const LISTING_PRICE_RANGE: RangeInclusive<f64> = 20.0..=100.0;

/// One row of model input, assembled from the current slider values.
///
/// Values outside the declared bounds are clamped rather than rejected:
/// the UI sliders already enforce the ranges, and the CLI mirrors that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Age of the house in years
    pub house_age: u32,
    /// Distance to the nearest transit (MRT) station in meters
    pub transit_distance: u32,
    /// Number of convenience stores nearby
    pub amenity_count: u32,
    /// Listing price per square meter
    pub listing_price: f64,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            house_age: 10,
            transit_distance: 300,
            amenity_count: 5,
            listing_price: 45.0,
        }
    }
}

impl PredictionInput {
    pub fn new(
        house_age: u32,
        transit_distance: u32,
        amenity_count: u32,
        listing_price: f64,
    ) -> Self {
        Self {
            house_age,
            transit_distance,
            amenity_count,
            listing_price,
        }
        .clamped()
    }

    /// Returns a copy with every field forced into its range.
    /// A NaN price falls back to the lower bound.
    pub fn clamped(self) -> Self {
        let listing_price = if self.listing_price.is_nan() {
            *LISTING_PRICE_RANGE.start()
        } else {
            self.listing_price
                .clamp(*LISTING_PRICE_RANGE.start(), *LISTING_PRICE_RANGE.end())
        };

        Self {
            house_age: clamp_to(self.house_age, &HOUSE_AGE_RANGE),
            transit_distance: clamp_to(self.transit_distance, &TRANSIT_DISTANCE_RANGE),
            amenity_count: clamp_to(self.amenity_count, &AMENITY_COUNT_RANGE),
            listing_price,
        }
    }

    pub fn with_listing_price(self, listing_price: f64) -> Self {
        Self {
            listing_price,
            ..self
        }
        .clamped()
    }

    pub fn is_within_bounds(&self) -> bool {
        HOUSE_AGE_RANGE.contains(&self.house_age)
            && TRANSIT_DISTANCE_RANGE.contains(&self.transit_distance)
            && AMENITY_COUNT_RANGE.contains(&self.amenity_count)
            && LISTING_PRICE_RANGE.contains(&self.listing_price)
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
