use crate::models::{DepthEstimate, FeatureVector};

const MIN_HALF_WIDTH_M: f64 = 1.0;

/// Estimated depth to water with an uncertainty band that narrows as
/// confidence rises.
pub fn estimate_depth(features: &FeatureVector, confidence: u8) -> DepthEstimate {
    let estimated_m = features.current_level;
    let half_width =
        (estimated_m * (100.0 - confidence.min(100) as f64) / 200.0).max(MIN_HALF_WIDTH_M);

    DepthEstimate {
        estimated_m,
        min_m: (estimated_m - half_width).max(0.0),
        max_m: estimated_m + half_width,
        projected_12_month_m: (estimated_m + features.trend_slope * 365.0).max(0.0),
    }
}
