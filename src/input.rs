use crate::config::AnalysisConfig;
use crate::error::{GroundwatchError, Result};
use crate::logic::features::DEFAULT_ANNUAL_RAINFALL_MM;
use crate::models::{
    sorted_by_time, AnalysisRequest, EnvironmentalContext, Reading, StationContext, WaterQuality,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Request file as written by callers; rates and timestamp may be omitted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestDocument {
    pub readings: Vec<Reading>,
    #[serde(default)]
    pub environment: EnvironmentalContext,
    #[serde(default)]
    pub station: StationContext,
    #[serde(default)]
    pub water_quality: WaterQuality,
    pub extraction_rate_l_per_day: Option<f64>,
    pub recharge_rate_l_per_day: Option<f64>,
    pub analyzed_at: Option<DateTime<Utc>>,
}

impl RequestDocument {
    /// Read a document from a JSON or YAML file, or JSON on stdin for `-`.
    pub fn load(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            return Ok(serde_json::from_str(&content)?);
        }

        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    /// Validate the document and fill host-side defaults.
    pub fn into_request(
        self,
        settings: &AnalysisConfig,
        now: DateTime<Utc>,
    ) -> Result<AnalysisRequest> {
        if let Some(bad) = self
            .readings
            .iter()
            .find(|r| !r.water_level.is_finite() || r.water_level < 0.0)
        {
            return Err(GroundwatchError::InvalidData(format!(
                "water level at {} must be a non-negative number, got {}",
                bad.timestamp, bad.water_level
            )));
        }

        let extraction = self
            .extraction_rate_l_per_day
            .unwrap_or(settings.default_extraction_rate_l_per_day);
        if !(extraction >= 0.0) {
            return Err(GroundwatchError::InvalidData(format!(
                "extraction rate must be non-negative, got {}",
                extraction
            )));
        }

        let recharge = match self.recharge_rate_l_per_day {
            Some(r) => r,
            None => {
                let rainfall = self
                    .environment
                    .annual_rainfall_mm
                    .unwrap_or(DEFAULT_ANNUAL_RAINFALL_MM);
                tracing::debug!(
                    rainfall,
                    factor = settings.recharge_factor,
                    "Estimating recharge from rainfall"
                );
                rainfall * settings.recharge_factor
            }
        };

        let mut readings = sorted_by_time(&self.readings);
        if readings.len() > settings.max_readings {
            let dropped = readings.len() - settings.max_readings;
            tracing::info!(dropped, "Keeping the most recent {} readings", settings.max_readings);
            readings.drain(..dropped);
        }

        Ok(AnalysisRequest {
            readings,
            environment: self.environment,
            station: self.station,
            water_quality: self.water_quality,
            extraction_rate_l_per_day: extraction,
            recharge_rate_l_per_day: recharge,
            analyzed_at: self.analyzed_at.unwrap_or(now),
        })
    }
}
