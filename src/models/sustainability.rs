use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterBalance {
    Deficit,
    Balanced,
    Surplus,
    /// No current level was available to project from.
    Unknown,
}

impl WaterBalance {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterBalance::Deficit => "Deficit",
            WaterBalance::Balanced => "Balanced",
            WaterBalance::Surplus => "Surplus",
            WaterBalance::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WaterBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityEstimate {
    /// Rounded projection; 999 means effectively unlimited.
    pub years_remaining: f64,
    pub extraction_rate_l_per_day: f64,
    pub recharge_rate_l_per_day: f64,
    pub balance: WaterBalance,
}
