use crate::error::{GroundwatchError, Result};
use crate::models::{AvailabilityEstimate, AvailabilityStatus, FeatureVector, ModelScores};
use std::collections::BTreeMap;

/// Static importance table reported alongside every estimate.
///
/// This is a fixed presentation table, not a sensitivity derived from the
/// models below.
pub const FEATURE_IMPORTANCE: [(&str, f64); 7] = [
    ("current_level", 0.25),
    ("annual_rainfall", 0.20),
    ("trend_direction", 0.15),
    ("river_distance", 0.15),
    ("soil_permeability", 0.10),
    ("monsoon_rainfall", 0.10),
    ("trend_significance", 0.05),
];

// TODO: the 0.4/0.4/0.2 split and the status bands are product-tuned;
// revisit once calibration data exists.
const LINEAR_WEIGHT: f64 = 0.4;
const WEIGHTED_WEIGHT: f64 = 0.4;
const TREND_WEIGHT: f64 = 0.2;

pub fn feature_importance() -> BTreeMap<String, f64> {
    FEATURE_IMPORTANCE
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}

/// A heuristic availability scorer over the feature vector.
pub trait AvailabilityModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Score in [0, 100]. Fails when a feature it reads is not finite.
    fn score(&self, features: &FeatureVector) -> Result<f64>;
}

fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GroundwatchError::NonFiniteFeature(name))
    }
}

/// Base 50 plus fixed per-feature weights.
pub struct LinearModel;

impl AvailabilityModel for LinearModel {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn score(&self, f: &FeatureVector) -> Result<f64> {
        let score = 50.0
            + finite("current_level", f.current_level)? * -2.5
            + finite("annual_rainfall", f.annual_rainfall)? * 0.05
            + finite("monsoon_rainfall", f.monsoon_rainfall)? * 0.08
            + finite("river_distance", f.river_distance)? * -0.3
            + finite("soil_permeability", f.soil_permeability)? * 15.0
            + finite("trend_direction", f.trend_direction)? * 10.0
            + finite("trend_significance", f.trend_significance)? * 5.0;

        Ok(score.clamp(0.0, 100.0))
    }
}

/// Weighted average of four normalised sub-scores.
pub struct WeightedCompositeModel;

impl AvailabilityModel for WeightedCompositeModel {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn score(&self, f: &FeatureVector) -> Result<f64> {
        let level = finite("current_level", f.current_level)?;
        let annual = finite("annual_rainfall", f.annual_rainfall)?;
        let monsoon = finite("monsoon_rainfall", f.monsoon_rainfall)?;
        let river = finite("river_distance", f.river_distance)?;
        let permeability = finite("soil_permeability", f.soil_permeability)?;

        let level_score = (100.0 - 3.0 * level).max(0.0);
        let rainfall_score = (annual / 10.0 + monsoon / 8.0).min(100.0);
        let proximity_score = (100.0 - 2.0 * river).max(0.0);
        let permeability_score = permeability * 25.0;

        let score = level_score * 0.40
            + rainfall_score * 0.25
            + proximity_score * 0.20
            + permeability_score * 0.15;

        Ok(score.clamp(0.0, 100.0))
    }
}

/// Scores direction and strength of the level trend.
pub struct TrendModel;

impl AvailabilityModel for TrendModel {
    fn name(&self) -> &'static str {
        "trend"
    }

    fn score(&self, f: &FeatureVector) -> Result<f64> {
        let direction = finite("trend_direction", f.trend_direction)?;
        let significance = finite("trend_significance", f.trend_significance)?;
        let magnitude = finite("trend_magnitude", f.trend_magnitude)?;

        let mut score = 50.0;
        if direction > 0.0 {
            score += 20.0;
        } else if direction < 0.0 {
            score -= 20.0;
        }
        score += 10.0 * significance;
        if magnitude > 0.5 {
            score += 15.0 * direction;
        }

        Ok(score.clamp(0.0, 100.0))
    }
}

/// Fixed-weight combination of the linear, weighted and trend models.
pub struct EnsemblePredictor {
    linear: Box<dyn AvailabilityModel>,
    weighted: Box<dyn AvailabilityModel>,
    trend: Box<dyn AvailabilityModel>,
}

impl EnsemblePredictor {
    pub fn new() -> Self {
        Self {
            linear: Box::new(LinearModel),
            weighted: Box::new(WeightedCompositeModel),
            trend: Box::new(TrendModel),
        }
    }

    /// Produce an availability estimate, falling back to a neutral result
    /// if any model fails.
    pub fn predict(&self, features: &FeatureVector) -> AvailabilityEstimate {
        match self.try_predict(features) {
            Ok(estimate) => estimate,
            Err(e) => {
                tracing::warn!("Availability scoring failed, using fallback: {}", e);
                AvailabilityEstimate::fallback()
            }
        }
    }

    fn try_predict(&self, features: &FeatureVector) -> Result<AvailabilityEstimate> {
        let scores = ModelScores {
            linear: self.checked_score(self.linear.as_ref(), features)?,
            weighted: self.checked_score(self.weighted.as_ref(), features)?,
            trend: self.checked_score(self.trend.as_ref(), features)?,
        };

        let combined = LINEAR_WEIGHT * scores.linear
            + WEIGHTED_WEIGHT * scores.weighted
            + TREND_WEIGHT * scores.trend;
        let score = combined.round().clamp(0.0, 100.0);

        tracing::debug!(
            linear = scores.linear,
            weighted = scores.weighted,
            trend = scores.trend,
            score,
            "Ensemble availability scored"
        );

        Ok(AvailabilityEstimate {
            score,
            status: AvailabilityStatus::from_score(score),
            confidence: confidence(features),
            features: features.names(),
            model_scores: Some(scores),
        })
    }

    fn checked_score(
        &self,
        model: &dyn AvailabilityModel,
        features: &FeatureVector,
    ) -> Result<f64> {
        let score = model.score(features)?;
        if score.is_finite() {
            Ok(score.clamp(0.0, 100.0))
        } else {
            Err(GroundwatchError::InvalidData(format!(
                "{} model produced a non-finite score",
                model.name()
            )))
        }
    }
}

impl Default for EnsemblePredictor {
    fn default() -> Self {
        Self::new()
    }
}

/// Confidence from corroborating signals, capped at 100.
pub fn confidence(f: &FeatureVector) -> u8 {
    let signals = [
        (f.has_latest_reading > 0.0, 20),
        (f.annual_rainfall > 0.0, 10),
        (f.river_distance < 20.0, 10),
        (f.trend_significance > 2.0, 10),
        (f.station_distance < 10.0, 10),
        (f.latest_reading_confidence > 80.0, 10),
    ];

    let total: u32 = 50 + signals
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| *points)
        .sum::<u32>();

    total.min(100) as u8
}
