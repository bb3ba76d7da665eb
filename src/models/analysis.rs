use super::{
    AvailabilityEstimate, EnvironmentalContext, Reading, Recommendation, SeasonalityResult,
    StationContext, SustainabilityEstimate, TrendResult, UsageSuitability, WaterQuality,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the engine needs for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub readings: Vec<Reading>,
    #[serde(default)]
    pub environment: EnvironmentalContext,
    #[serde(default)]
    pub station: StationContext,
    #[serde(default)]
    pub water_quality: WaterQuality,
    pub extraction_rate_l_per_day: f64,
    /// Estimated recharge, supplied by the caller.
    pub recharge_rate_l_per_day: f64,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthEstimate {
    pub estimated_m: f64,
    pub min_m: f64,
    pub max_m: f64,
    /// Estimated level twelve months out at the current Sen's slope.
    pub projected_12_month_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analyzed_at: DateTime<Utc>,
    pub availability: AvailabilityEstimate,
    pub depth: DepthEstimate,
    pub sustainability: SustainabilityEstimate,
    pub recommendations: Vec<Recommendation>,
    pub suitability: UsageSuitability,
    pub feature_importance: BTreeMap<String, f64>,
    pub features: BTreeMap<String, f64>,
    pub trend: TrendResult,
    pub seasonality: SeasonalityResult,
    pub disclaimer: String,
}
