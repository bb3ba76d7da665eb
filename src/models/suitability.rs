use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityStatus {
    Suitable,
    Moderate,
    Unsuitable,
}

impl SuitabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuitabilityStatus::Suitable => "Suitable",
            SuitabilityStatus::Moderate => "Moderate",
            SuitabilityStatus::Unsuitable => "Unsuitable",
        }
    }
}

impl std::fmt::Display for SuitabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseSuitability {
    pub score: f64,
    pub status: SuitabilityStatus,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSuitability {
    pub agriculture: UseSuitability,
    pub domestic: UseSuitability,
    pub industrial: UseSuitability,
}
