use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat numeric inputs to the availability models.
///
/// Every field is always populated; absent source data is replaced with a
/// fixed default during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub current_level: f64,
    pub has_latest_reading: f64,
    pub latest_reading_confidence: f64,
    pub status: f64,
    pub station_distance: f64,
    pub well_depth: f64,
    pub annual_rainfall: f64,
    pub monsoon_rainfall: f64,
    pub river_distance: f64,
    pub river_influence: f64,
    pub water_body_distance: f64,
    pub soil_permeability: f64,
    pub aquifer_type: f64,
    pub aquifer_depth: f64,
    pub trend_direction: f64,
    pub trend_significance: f64,
    pub trend_magnitude: f64,
    pub trend_slope: f64,
    pub seasonal_cv: f64,
    pub autocorrelation: f64,
}

impl FeatureVector {
    /// Name/value pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 20] {
        [
            ("current_level", self.current_level),
            ("has_latest_reading", self.has_latest_reading),
            ("latest_reading_confidence", self.latest_reading_confidence),
            ("status", self.status),
            ("station_distance", self.station_distance),
            ("well_depth", self.well_depth),
            ("annual_rainfall", self.annual_rainfall),
            ("monsoon_rainfall", self.monsoon_rainfall),
            ("river_distance", self.river_distance),
            ("river_influence", self.river_influence),
            ("water_body_distance", self.water_body_distance),
            ("soil_permeability", self.soil_permeability),
            ("aquifer_type", self.aquifer_type),
            ("aquifer_depth", self.aquifer_depth),
            ("trend_direction", self.trend_direction),
            ("trend_significance", self.trend_significance),
            ("trend_magnitude", self.trend_magnitude),
            ("trend_slope", self.trend_slope),
            ("seasonal_cv", self.seasonal_cv),
            ("autocorrelation", self.autocorrelation),
        ]
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.entries()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
