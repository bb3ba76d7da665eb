use super::{Rule, RuleContext};
use crate::models::{Priority, Recommendation, RecommendationKind, WaterBalance};

const MIN_RAINFALL_MM: f64 = 500.0;

/// Rainwater harvesting rule - suggests artificial recharge
///
/// Conditions:
/// - Extraction runs a deficit against recharge
/// - Annual rainfall above 500mm, so there is runoff worth capturing
pub struct RainwaterHarvestingRule;

impl Rule for RainwaterHarvestingRule {
    fn id(&self) -> &'static str {
        "rainwater_harvesting"
    }

    fn name(&self) -> &'static str {
        "Rainwater Harvesting"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        if ctx.sustainability.balance != WaterBalance::Deficit {
            return None;
        }

        let rainfall = ctx.features.annual_rainfall;
        if rainfall <= MIN_RAINFALL_MM {
            return None;
        }

        let deficit = ctx.sustainability.extraction_rate_l_per_day
            - ctx.sustainability.recharge_rate_l_per_day;

        Some(
            Recommendation::new(
                self.id(),
                RecommendationKind::Recharge,
                Priority::High,
                "Install Rainwater Harvesting for Recharge",
                format!(
                    "Extraction exceeds recharge by {:.0} L/day while the area receives \
                     {:.0}mm of rain a year. Recharge pits or rooftop harvesting can \
                     return part of that rainfall to the aquifer.",
                    deficit, rainfall
                ),
            )
            .with_impact("Offsets part of the extraction deficit")
            .with_cost("Medium")
            .with_timeline("Before the next monsoon")
            .with_data_point("Annual Rainfall", format!("{:.0}mm", rainfall), "Environment")
            .with_data_point(
                "Net Extraction",
                format!("{:.0} L/day", deficit),
                "Sustainability projection",
            ),
        )
    }
}
