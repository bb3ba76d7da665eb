use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Critical,
    Low,
    #[default]
    Moderate,
    Good,
    Excellent,
}

impl AvailabilityStatus {
    /// Map a 0-100 score to its band. Each boundary value belongs to the upper band.
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            AvailabilityStatus::Critical
        } else if score < 40.0 {
            AvailabilityStatus::Low
        } else if score < 60.0 {
            AvailabilityStatus::Moderate
        } else if score < 80.0 {
            AvailabilityStatus::Good
        } else {
            AvailabilityStatus::Excellent
        }
    }

    /// 0 (critical) to 4 (excellent).
    pub fn encoded(&self) -> f64 {
        match self {
            AvailabilityStatus::Critical => 0.0,
            AvailabilityStatus::Low => 1.0,
            AvailabilityStatus::Moderate => 2.0,
            AvailabilityStatus::Good => 3.0,
            AvailabilityStatus::Excellent => 4.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Critical => "Critical",
            AvailabilityStatus::Low => "Low",
            AvailabilityStatus::Moderate => "Moderate",
            AvailabilityStatus::Good => "Good",
            AvailabilityStatus::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Individual sub-model scores behind an ensemble estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScores {
    pub linear: f64,
    pub weighted: f64,
    pub trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityEstimate {
    /// Rounded ensemble score, 0-100.
    pub score: f64,
    pub status: AvailabilityStatus,
    pub confidence: u8,
    /// Features that fed the models, or `["fallback"]`.
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_scores: Option<ModelScores>,
}

impl AvailabilityEstimate {
    /// Neutral estimate used when scoring cannot be completed.
    pub fn fallback() -> Self {
        Self {
            score: 50.0,
            status: AvailabilityStatus::Moderate,
            confidence: 30,
            features: vec!["fallback".to_string()],
            model_scores: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.model_scores.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_boundaries_belong_to_upper_band() {
        assert_eq!(AvailabilityStatus::from_score(0.0), AvailabilityStatus::Critical);
        assert_eq!(AvailabilityStatus::from_score(19.0), AvailabilityStatus::Critical);
        assert_eq!(AvailabilityStatus::from_score(20.0), AvailabilityStatus::Low);
        assert_eq!(AvailabilityStatus::from_score(39.0), AvailabilityStatus::Low);
        assert_eq!(AvailabilityStatus::from_score(40.0), AvailabilityStatus::Moderate);
        assert_eq!(AvailabilityStatus::from_score(59.0), AvailabilityStatus::Moderate);
        assert_eq!(AvailabilityStatus::from_score(60.0), AvailabilityStatus::Good);
        assert_eq!(AvailabilityStatus::from_score(79.0), AvailabilityStatus::Good);
        assert_eq!(AvailabilityStatus::from_score(80.0), AvailabilityStatus::Excellent);
        assert_eq!(AvailabilityStatus::from_score(100.0), AvailabilityStatus::Excellent);
    }

    #[test]
    fn status_is_monotonic_in_score() {
        let mut previous = AvailabilityStatus::Critical;
        for score in 0..=100 {
            let status = AvailabilityStatus::from_score(score as f64);
            assert!(status >= previous, "status dropped at score {}", score);
            previous = status;
        }
    }

    #[test]
    fn fallback_estimate() {
        let estimate = AvailabilityEstimate::fallback();
        assert_eq!(estimate.score, 50.0);
        assert_eq!(estimate.status, AvailabilityStatus::Moderate);
        assert_eq!(estimate.confidence, 30);
        assert_eq!(estimate.features, vec!["fallback".to_string()]);
        assert!(estimate.is_fallback());
    }
}
