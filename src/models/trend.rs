use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
        }
    }

    /// -1 falling, 0 stable, 1 rising.
    pub fn encoded(&self) -> f64 {
        match self {
            TrendDirection::Rising => 1.0,
            TrendDirection::Falling => -1.0,
            TrendDirection::Stable => 0.0,
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    NotSignificant,
    MarginallySignificant,
    Significant,
    VerySignificant,
    HighlySignificant,
    InsufficientData,
}

impl Significance {
    /// Bucket a two-sided p-value.
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < 0.001 {
            Significance::HighlySignificant
        } else if p_value < 0.01 {
            Significance::VerySignificant
        } else if p_value < 0.05 {
            Significance::Significant
        } else if p_value < 0.1 {
            Significance::MarginallySignificant
        } else {
            Significance::NotSignificant
        }
    }

    /// Strength rank, 0 (none) to 4 (highly significant).
    ///
    /// Insufficient data ranks with "not significant".
    pub fn rank(&self) -> u8 {
        match self {
            Significance::NotSignificant | Significance::InsufficientData => 0,
            Significance::MarginallySignificant => 1,
            Significance::Significant => 2,
            Significance::VerySignificant => 3,
            Significance::HighlySignificant => 4,
        }
    }

    pub fn encoded(&self) -> f64 {
        self.rank() as f64
    }

    pub fn is_at_least(&self, other: Significance) -> bool {
        self.rank() >= other.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::NotSignificant => "not significant",
            Significance::MarginallySignificant => "marginally significant",
            Significance::Significant => "significant",
            Significance::VerySignificant => "very significant",
            Significance::HighlySignificant => "highly significant",
            Significance::InsufficientData => "insufficient data",
        }
    }
}

impl std::fmt::Display for Significance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the Mann-Kendall test with Sen's slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Sen's slope in meters per day.
    pub slope_per_day: f64,
    pub direction: TrendDirection,
    pub significance: Significance,
    pub p_value: f64,
    pub sample_size: usize,
    /// Mann-Kendall S statistic.
    pub s_statistic: i64,
    pub variance: f64,
    pub z_score: f64,
}

impl TrendResult {
    pub fn insufficient(sample_size: usize) -> Self {
        Self {
            slope_per_day: 0.0,
            direction: TrendDirection::Stable,
            significance: Significance::InsufficientData,
            p_value: 1.0,
            sample_size,
            s_statistic: 0,
            variance: 0.0,
            z_score: 0.0,
        }
    }
}

/// Monthly seasonality verdict and lag-1 autocorrelation of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityResult {
    /// `None` when there are too few observations for a verdict.
    pub seasonal: Option<bool>,
    pub coefficient_of_variation: Option<f64>,
    /// Calendar month (1-12) with the highest mean level.
    pub peak_month: Option<u32>,
    /// Calendar month (1-12) with the lowest mean level.
    pub trough_month: Option<u32>,
    pub autocorrelation_lag1: f64,
}

impl SeasonalityResult {
    pub fn has_verdict(&self) -> bool {
        self.seasonal.is_some()
    }
}
