pub mod conservation;
pub mod efficient_irrigation;
pub mod engine;
pub mod enhanced_monitoring;
pub mod rainwater_harvesting;

pub use engine::RulesEngine;

use crate::models::{
    AvailabilityEstimate, FeatureVector, Recommendation, SustainabilityEstimate, TrendResult,
};

/// Everything upstream of the recommendation rules for one analysis.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub availability: &'a AvailabilityEstimate,
    pub sustainability: &'a SustainabilityEstimate,
    pub trend: &'a TrendResult,
    /// Environment as seen by the models, defaults applied.
    pub features: &'a FeatureVector,
}

/// Trait for groundwater management rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a recommendation if conditions are met
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::logic::features::extract_features;
    use crate::models::{
        AvailabilityEstimate, AvailabilityStatus, EnvironmentalContext, FeatureVector,
        SeasonalityResult, StationContext, SustainabilityEstimate, TrendResult, WaterBalance,
    };

    pub struct Fixture {
        pub availability: AvailabilityEstimate,
        pub sustainability: SustainabilityEstimate,
        pub trend: TrendResult,
        pub features: FeatureVector,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                availability: AvailabilityEstimate {
                    score: 55.0,
                    status: AvailabilityStatus::Moderate,
                    confidence: 70,
                    features: Vec::new(),
                    model_scores: None,
                },
                sustainability: SustainabilityEstimate {
                    years_remaining: 999.0,
                    extraction_rate_l_per_day: 100.0,
                    recharge_rate_l_per_day: 100.0,
                    balance: WaterBalance::Balanced,
                },
                trend: TrendResult::insufficient(0),
                features: extract_features(
                    &StationContext::default(),
                    &EnvironmentalContext::default(),
                    &TrendResult::insufficient(0),
                    &SeasonalityResult::default(),
                ),
            }
        }

        pub fn with_score(mut self, score: f64) -> Self {
            self.availability.score = score;
            self.availability.status = AvailabilityStatus::from_score(score);
            self
        }

        pub fn with_rainfall(mut self, annual_mm: f64) -> Self {
            self.features.annual_rainfall = annual_mm;
            self
        }

        pub fn ctx(&self) -> super::RuleContext<'_> {
            super::RuleContext {
                availability: &self.availability,
                sustainability: &self.sustainability,
                trend: &self.trend,
                features: &self.features,
            }
        }
    }
}
