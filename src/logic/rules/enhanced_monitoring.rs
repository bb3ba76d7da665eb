use super::{Rule, RuleContext};
use crate::models::{Priority, Recommendation, RecommendationKind, Significance, TrendDirection};

/// Enhanced monitoring rule - flags a statistically significant falling trend
pub struct EnhancedMonitoringRule;

impl Rule for EnhancedMonitoringRule {
    fn id(&self) -> &'static str {
        "enhanced_monitoring"
    }

    fn name(&self) -> &'static str {
        "Enhanced Monitoring"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        let trend = ctx.trend;
        if trend.direction != TrendDirection::Falling
            || !trend.significance.is_at_least(Significance::Significant)
        {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationKind::Monitoring,
                Priority::Medium,
                "Increase Monitoring Frequency",
                format!(
                    "Water levels show a {} falling trend ({:.3} m/day, p = {:.4}). \
                     Increase reading frequency to catch further change early.",
                    trend.significance, trend.slope_per_day, trend.p_value
                ),
            )
            .with_impact("Earlier detection of level changes")
            .with_cost("Low")
            .with_timeline("Ongoing")
            .with_data_point("Trend", trend.direction, "Mann-Kendall test")
            .with_data_point("Sample Size", trend.sample_size, "Mann-Kendall test"),
        )
    }
}
