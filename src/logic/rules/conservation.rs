use super::{Rule, RuleContext};
use crate::models::{Priority, Recommendation, RecommendationKind};

/// Water conservation rule - fires when the availability score is low
///
/// Priority levels:
/// - Critical: score below 30
/// - High: score below 50
pub struct ConservationRule;

impl Rule for ConservationRule {
    fn id(&self) -> &'static str {
        "water_conservation"
    }

    fn name(&self) -> &'static str {
        "Water Conservation"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        let score = ctx.availability.score;

        let priority = if score < 30.0 {
            Priority::Critical
        } else if score < 50.0 {
            Priority::High
        } else {
            return None;
        };

        Some(self.build_recommendation(priority, score))
    }
}

impl ConservationRule {
    fn build_recommendation(&self, priority: Priority, score: f64) -> Recommendation {
        let (title, description, timeline) = match priority {
            Priority::Critical => (
                "Immediate Water Conservation Required",
                format!(
                    "Groundwater availability is critically low (score {:.0}/100). \
                     Cut non-essential extraction now and prioritise drinking water.",
                    score
                ),
                "Immediate",
            ),
            _ => (
                "Implement Water Conservation Measures",
                format!(
                    "Groundwater availability is below average (score {:.0}/100). \
                     Reduce extraction through efficient use and leak repair.",
                    score
                ),
                "1-3 months",
            ),
        };

        Recommendation::new(
            self.id(),
            RecommendationKind::Conservation,
            priority,
            title,
            description,
        )
        .with_impact("Reduces drawdown and extends well life")
        .with_cost("Low")
        .with_timeline(timeline)
        .with_data_point("Availability Score", format!("{:.0}", score), "Ensemble model")
    }
}
