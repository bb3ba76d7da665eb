use super::AvailabilityStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiverInfluence {
    #[default]
    Low,
    Medium,
    High,
}

impl RiverInfluence {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiverInfluence::Low => "low",
            RiverInfluence::Medium => "medium",
            RiverInfluence::High => "high",
        }
    }

    /// Ordinal encoding, 1 (low) to 3 (high).
    pub fn encoded(&self) -> f64 {
        match self {
            RiverInfluence::Low => 1.0,
            RiverInfluence::Medium => 2.0,
            RiverInfluence::High => 3.0,
        }
    }
}

impl std::fmt::Display for RiverInfluence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilPermeability {
    Low,
    #[default]
    Medium,
    High,
}

impl SoilPermeability {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilPermeability::Low => "low",
            SoilPermeability::Medium => "medium",
            SoilPermeability::High => "high",
        }
    }

    /// Ordinal encoding, 1 (low) to 3 (high).
    pub fn encoded(&self) -> f64 {
        match self {
            SoilPermeability::Low => 1.0,
            SoilPermeability::Medium => 2.0,
            SoilPermeability::High => 3.0,
        }
    }
}

impl std::fmt::Display for SoilPermeability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AquiferType {
    #[default]
    Unconfined,
    Confined,
    #[serde(alias = "semi-confined")]
    SemiConfined,
    Leaky,
}

impl AquiferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AquiferType::Unconfined => "unconfined",
            AquiferType::Confined => "confined",
            AquiferType::SemiConfined => "semi-confined",
            AquiferType::Leaky => "leaky",
        }
    }

    /// Ordinal encoding, 1 (unconfined) to 4 (leaky).
    pub fn encoded(&self) -> f64 {
        match self {
            AquiferType::Unconfined => 1.0,
            AquiferType::Confined => 2.0,
            AquiferType::SemiConfined => 3.0,
            AquiferType::Leaky => 4.0,
        }
    }
}

impl std::fmt::Display for AquiferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rainfall split by season, in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRainfall {
    #[serde(default)]
    pub monsoon: f64,
    #[serde(default)]
    pub post_monsoon: f64,
    #[serde(default)]
    pub winter: f64,
    #[serde(default)]
    pub summer: f64,
}

/// Environmental context around the analysed location.
///
/// Every field is optional; missing values are replaced with fixed defaults
/// during feature extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalContext {
    pub annual_rainfall_mm: Option<f64>,
    pub seasonal_rainfall: Option<SeasonalRainfall>,
    pub nearest_river_distance_km: Option<f64>,
    pub river_influence: Option<RiverInfluence>,
    pub nearest_water_body_distance_km: Option<f64>,
    pub soil_permeability: Option<SoilPermeability>,
    pub aquifer_type: Option<AquiferType>,
    pub aquifer_depth_m: Option<f64>,
}

/// The monitoring station nearest to the analysed location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationContext {
    /// Distance from the analysed location to the station.
    pub distance_km: f64,
    pub well_depth_m: Option<f64>,
    pub latest_water_level_m: Option<f64>,
    /// Confidence the recorder reported for its latest reading, 0-100.
    pub latest_reading_confidence: Option<u8>,
    pub latest_status: Option<AvailabilityStatus>,
}

/// Water quality measurements used for usage suitability scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterQuality {
    pub ph: Option<f64>,
    /// Total dissolved solids, mg/L.
    pub tds_mg_l: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_encodings() {
        assert_eq!(RiverInfluence::Low.encoded(), 1.0);
        assert_eq!(RiverInfluence::High.encoded(), 3.0);
        assert_eq!(SoilPermeability::Medium.encoded(), 2.0);
        assert_eq!(AquiferType::Unconfined.encoded(), 1.0);
        assert_eq!(AquiferType::SemiConfined.encoded(), 3.0);
        assert_eq!(AquiferType::Leaky.encoded(), 4.0);
    }

    #[test]
    fn defaults_match_feature_defaults() {
        assert_eq!(RiverInfluence::default(), RiverInfluence::Low);
        assert_eq!(SoilPermeability::default(), SoilPermeability::Medium);
        assert_eq!(AquiferType::default(), AquiferType::Unconfined);
    }

    #[test]
    fn aquifer_type_accepts_hyphenated_name() {
        let parsed: AquiferType = serde_json::from_str("\"semi-confined\"").unwrap();
        assert_eq!(parsed, AquiferType::SemiConfined);
        let parsed: AquiferType = serde_json::from_str("\"semi_confined\"").unwrap();
        assert_eq!(parsed, AquiferType::SemiConfined);
    }

    #[test]
    fn partial_environment_deserializes() {
        let env: EnvironmentalContext =
            serde_json::from_str(r#"{"annual_rainfall_mm": 950.0}"#).unwrap();
        assert_eq!(env.annual_rainfall_mm, Some(950.0));
        assert!(env.seasonal_rainfall.is_none());
        assert!(env.soil_permeability.is_none());
    }
}
