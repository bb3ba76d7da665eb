use crate::models::{
    AquiferType, AvailabilityStatus, EnvironmentalContext, FeatureVector, RiverInfluence,
    SeasonalityResult, SoilPermeability, StationContext, TrendResult,
};

pub const DEFAULT_CURRENT_LEVEL_M: f64 = 15.0;
pub const DEFAULT_ANNUAL_RAINFALL_MM: f64 = 800.0;
pub const DEFAULT_MONSOON_RAINFALL_MM: f64 = 600.0;
pub const DEFAULT_RIVER_DISTANCE_KM: f64 = 50.0;
pub const DEFAULT_WATER_BODY_DISTANCE_KM: f64 = 50.0;
pub const DEFAULT_AQUIFER_DEPTH_M: f64 = 20.0;
pub const DEFAULT_WELL_DEPTH_M: f64 = 30.0;

/// Assemble the model inputs, substituting fixed defaults for missing data.
pub fn extract_features(
    station: &StationContext,
    environment: &EnvironmentalContext,
    trend: &TrendResult,
    seasonality: &SeasonalityResult,
) -> FeatureVector {
    let status = station.latest_status.unwrap_or(AvailabilityStatus::Moderate);
    let influence = environment.river_influence.unwrap_or(RiverInfluence::Low);
    let permeability = environment
        .soil_permeability
        .unwrap_or(SoilPermeability::Medium);
    let aquifer = environment.aquifer_type.unwrap_or(AquiferType::Unconfined);

    FeatureVector {
        current_level: station
            .latest_water_level_m
            .unwrap_or(DEFAULT_CURRENT_LEVEL_M),
        has_latest_reading: if station.latest_water_level_m.is_some() {
            1.0
        } else {
            0.0
        },
        latest_reading_confidence: station.latest_reading_confidence.unwrap_or(0) as f64,
        status: status.encoded(),
        station_distance: station.distance_km,
        well_depth: station.well_depth_m.unwrap_or(DEFAULT_WELL_DEPTH_M),
        annual_rainfall: environment
            .annual_rainfall_mm
            .unwrap_or(DEFAULT_ANNUAL_RAINFALL_MM),
        monsoon_rainfall: environment
            .seasonal_rainfall
            .map(|s| s.monsoon)
            .unwrap_or(DEFAULT_MONSOON_RAINFALL_MM),
        river_distance: environment
            .nearest_river_distance_km
            .unwrap_or(DEFAULT_RIVER_DISTANCE_KM),
        river_influence: influence.encoded(),
        water_body_distance: environment
            .nearest_water_body_distance_km
            .unwrap_or(DEFAULT_WATER_BODY_DISTANCE_KM),
        soil_permeability: permeability.encoded(),
        aquifer_type: aquifer.encoded(),
        aquifer_depth: environment
            .aquifer_depth_m
            .unwrap_or(DEFAULT_AQUIFER_DEPTH_M),
        trend_direction: trend.direction.encoded(),
        trend_significance: trend.significance.encoded(),
        trend_magnitude: trend.slope_per_day.abs(),
        trend_slope: trend.slope_per_day,
        seasonal_cv: seasonality.coefficient_of_variation.unwrap_or(0.0),
        autocorrelation: seasonality.autocorrelation_lag1,
    }
}
