use super::{
    conservation::ConservationRule, efficient_irrigation::EfficientIrrigationRule,
    enhanced_monitoring::EnhancedMonitoringRule, rainwater_harvesting::RainwaterHarvestingRule,
    Rule, RuleContext,
};
use crate::models::Recommendation;

/// Evaluates rules in a fixed order; output keeps that order.
pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(ConservationRule),
            Box::new(RainwaterHarvestingRule),
            Box::new(EnhancedMonitoringRule),
            Box::new(EfficientIrrigationRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Recommendation> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let rec = rule.evaluate(ctx);
                if rec.is_some() {
                    tracing::debug!(rule = rule.id(), "Rule fired");
                }
                rec
            })
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
