use super::{
    depth::estimate_depth,
    ensemble::{feature_importance, EnsemblePredictor},
    features::extract_features,
    rules::{RuleContext, RulesEngine},
    seasonality::analyze_seasonality,
    suitability::score_suitability,
    sustainability::calculate_sustainability,
    trend::analyze_trend,
};
use crate::models::{AnalysisRequest, AnalysisResult};

pub const DISCLAIMER: &str = "Heuristic estimate for screening purposes. \
    Scores combine fixed-weight models over a single station's readings \
    and do not model aquifer volume, groundwater flow or calibrated recharge.";

/// Runs the full analysis pipeline for one location.
///
/// Holds no per-request state, so one instance can serve any number of
/// analyses.
pub struct Analyzer {
    predictor: EnsemblePredictor,
    rules: RulesEngine,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            predictor: EnsemblePredictor::new(),
            rules: RulesEngine::new(),
        }
    }

    pub fn rules(&self) -> &RulesEngine {
        &self.rules
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let trend = analyze_trend(&request.readings);
        let seasonality = analyze_seasonality(&request.readings);

        let features = extract_features(
            &request.station,
            &request.environment,
            &trend,
            &seasonality,
        );
        let availability = self.predictor.predict(&features);

        let current_level = request.station.latest_water_level_m;
        let sustainability = calculate_sustainability(
            current_level,
            request.extraction_rate_l_per_day,
            request.recharge_rate_l_per_day,
        );
        let suitability = score_suitability(current_level, &request.water_quality);
        let depth = estimate_depth(&features, availability.confidence);

        let recommendations = self.rules.evaluate(&RuleContext {
            availability: &availability,
            sustainability: &sustainability,
            trend: &trend,
            features: &features,
        });

        tracing::debug!(
            readings = request.readings.len(),
            score = availability.score,
            status = %availability.status,
            recommendations = recommendations.len(),
            "Analysis complete"
        );

        AnalysisResult {
            analyzed_at: request.analyzed_at,
            availability,
            depth,
            sustainability,
            recommendations,
            suitability,
            feature_importance: feature_importance(),
            features: features.to_map(),
            trend,
            seasonality,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyse a request with the default model and rule set.
pub fn analyze(request: &AnalysisRequest) -> AnalysisResult {
    Analyzer::new().analyze(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AvailabilityStatus, EnvironmentalContext, Reading, Significance, StationContext,
        TrendDirection, WaterBalance, WaterQuality,
    };
    use chrono::{Duration, TimeZone, Utc};

    fn request(readings: Vec<Reading>) -> AnalysisRequest {
        AnalysisRequest {
            readings,
            environment: EnvironmentalContext::default(),
            station: StationContext::default(),
            water_quality: WaterQuality::default(),
            extraction_rate_l_per_day: 1000.0,
            recharge_rate_l_per_day: 240.0,
            analyzed_at: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_series_still_produces_a_result() {
        let result = analyze(&request(Vec::new()));
        assert_eq!(result.trend.significance, Significance::InsufficientData);
        assert!(!result.seasonality.has_verdict());
        assert_eq!(result.sustainability.balance, WaterBalance::Unknown);
        assert_eq!(result.depth.estimated_m, 15.0);
        assert_eq!(result.availability.status, AvailabilityStatus::Good);
        assert_eq!(result.feature_importance.len(), 7);
    }

    #[test]
    fn result_is_deterministic() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let readings: Vec<Reading> = (0..24)
            .map(|i| {
                let level = 10.0 + (i as f64 * 0.7).sin() * 2.0 + i as f64 * 0.05;
                Reading::new(start + Duration::days(i * 15), level)
            })
            .collect();
        let mut req = request(readings);
        req.station.latest_water_level_m = Some(11.0);

        let analyzer = Analyzer::new();
        assert_eq!(analyzer.analyze(&req), analyzer.analyze(&req));
    }

    #[test]
    fn uses_station_level_for_projection() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let readings: Vec<Reading> = (0..6)
            .map(|i| Reading::new(start + Duration::days(i * 30), 12.0 + i as f64))
            .collect();
        let mut req = request(readings);
        req.station.latest_water_level_m = Some(17.0);

        let result = analyze(&req);
        assert_eq!(result.trend.direction, TrendDirection::Rising);
        assert_eq!(result.depth.estimated_m, 17.0);
        assert_eq!(result.sustainability.balance, WaterBalance::Deficit);
        // 17_000 L / (760 L/day * 365)
        assert_eq!(result.sustainability.years_remaining, 0.0);
    }

    #[test]
    fn serializes_to_json() {
        let result = analyze(&request(Vec::new()));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["availability"]["status"], "good");
        assert_eq!(json["sustainability"]["balance"], "unknown");
        assert_eq!(json["trend"]["significance"], "insufficient_data");
        assert!(json["features"]["current_level"].is_number());
    }
}
