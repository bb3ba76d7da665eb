use super::{Rule, RuleContext};
use crate::models::{Priority, Recommendation, RecommendationKind};

const MIN_SCORE: f64 = 70.0;
const MIN_RAINFALL_MM: f64 = 800.0;

/// Efficient irrigation rule - good availability in a wet area is the time
/// to invest in efficient delivery before demand grows
pub struct EfficientIrrigationRule;

impl Rule for EfficientIrrigationRule {
    fn id(&self) -> &'static str {
        "efficient_irrigation"
    }

    fn name(&self) -> &'static str {
        "Efficient Irrigation"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        let score = ctx.availability.score;
        let rainfall = ctx.features.annual_rainfall;

        if score <= MIN_SCORE || rainfall <= MIN_RAINFALL_MM {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationKind::Infrastructure,
                Priority::Low,
                "Adopt Efficient Irrigation",
                format!(
                    "Availability is good (score {:.0}/100) with {:.0}mm annual rainfall. \
                     Sprinkler or drip systems keep it that way as demand grows.",
                    score, rainfall
                ),
            )
            .with_impact("Lower extraction per hectare irrigated")
            .with_cost("Medium")
            .with_timeline("6-12 months")
            .with_data_point("Availability Score", format!("{:.0}", score), "Ensemble model")
            .with_data_point("Annual Rainfall", format!("{:.0}mm", rainfall), "Environment"),
        )
    }
}
