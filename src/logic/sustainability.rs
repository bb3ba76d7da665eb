use crate::models::{SustainabilityEstimate, WaterBalance};

/// Years reported when recharge keeps pace with extraction.
pub const UNLIMITED_YEARS: f64 = 999.0;

/// Liters of usable water assumed per meter of current level.
///
/// A deliberately crude stand-in for an aquifer volume model.
const LITERS_PER_METER: f64 = 1000.0;

/// Project how long the current level lasts under net extraction.
///
/// Without a current level no projection is made and the balance is
/// `Unknown`.
pub fn calculate_sustainability(
    current_level_m: Option<f64>,
    extraction_rate_l_per_day: f64,
    recharge_rate_l_per_day: f64,
) -> SustainabilityEstimate {
    let Some(level) = current_level_m else {
        return SustainabilityEstimate {
            years_remaining: 0.0,
            extraction_rate_l_per_day,
            recharge_rate_l_per_day,
            balance: WaterBalance::Unknown,
        };
    };

    let net_extraction = extraction_rate_l_per_day - recharge_rate_l_per_day;
    let available_l = level * LITERS_PER_METER;

    let years_remaining = if net_extraction > 0.0 {
        (available_l / (net_extraction * 365.0)).max(0.0).round()
    } else {
        UNLIMITED_YEARS
    };

    let balance = if net_extraction > 0.1 * recharge_rate_l_per_day {
        WaterBalance::Deficit
    } else if recharge_rate_l_per_day > 1.1 * extraction_rate_l_per_day {
        WaterBalance::Surplus
    } else {
        WaterBalance::Balanced
    };

    tracing::debug!(
        net_extraction,
        years_remaining,
        balance = %balance,
        "Sustainability projected"
    );

    SustainabilityEstimate {
        years_remaining,
        extraction_rate_l_per_day,
        recharge_rate_l_per_day,
        balance,
    }
}
