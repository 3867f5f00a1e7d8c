use crate::domain::listing::PredictionInput;

/// Ordered list of feature names.
/// This order MUST match the column order the model artifact was trained with.
/// Any change here is a breaking change for saved models.
pub const FEATURE_NAMES: &[&str] = &["house_age", "mrt_dist", "num_stores", "listing_price"];

pub const FEATURE_COUNT: usize = 4;

/// Converts an input record into the model's feature row (f64).
pub fn features_to_vector(input: &PredictionInput) -> [f64; FEATURE_COUNT] {
    [
        f64::from(input.house_age),
        f64::from(input.transit_distance),
        f64::from(input.amenity_count),
        input.listing_price,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_length() {
        let input = PredictionInput::default();
        let vec = features_to_vector(&input);
        assert_eq!(vec.len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_consistency() {
        let input = PredictionInput::new(12, 850, 7, 61.5);

        let vec = features_to_vector(&input);
        // house_age is index 0
        assert_eq!(vec[0], 12.0);
        assert_eq!(vec[1], 850.0);
        assert_eq!(vec[2], 7.0);
        // listing_price is last
        assert_eq!(vec[3], 61.5);
    }
}
