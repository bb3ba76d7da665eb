use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Conservation,
    Recharge,
    Monitoring,
    Restriction,
    Infrastructure,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Conservation => "Conservation",
            RecommendationKind::Recharge => "Recharge",
            RecommendationKind::Monitoring => "Monitoring",
            RecommendationKind::Restriction => "Restriction",
            RecommendationKind::Infrastructure => "Infrastructure",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
    pub source: String,
}

impl DataPoint {
    pub fn new(label: &str, value: impl std::fmt::Display, source: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            source: source.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    pub data_points: Vec<DataPoint>,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        kind: RecommendationKind,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            priority,
            title: title.into(),
            description: description.into(),
            impact: None,
            cost: None,
            timeline: None,
            data_points: Vec::new(),
        }
    }

    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    pub fn with_data_point(
        mut self,
        label: &str,
        value: impl std::fmt::Display,
        source: &str,
    ) -> Self {
        self.data_points.push(DataPoint::new(label, value, source));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let rec = Recommendation::new(
            "test",
            RecommendationKind::Monitoring,
            Priority::Medium,
            "Title",
            "Description",
        )
        .with_impact("Earlier warning")
        .with_cost("Low")
        .with_timeline("1-3 months")
        .with_data_point("Trend", "falling", "Trend analysis");

        assert_eq!(rec.impact.as_deref(), Some("Earlier warning"));
        assert_eq!(rec.cost.as_deref(), Some("Low"));
        assert_eq!(rec.timeline.as_deref(), Some("1-3 months"));
        assert_eq!(rec.data_points.len(), 1);
        assert_eq!(rec.data_points[0].value, "falling");
    }

    #[test]
    fn unset_optional_fields_are_omitted_from_json() {
        let rec = Recommendation::new(
            "test",
            RecommendationKind::Conservation,
            Priority::High,
            "Title",
            "Description",
        );
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("impact").is_none());
        assert_eq!(json["kind"], "conservation");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
