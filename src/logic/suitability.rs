use crate::models::{SuitabilityStatus, UsageSuitability, UseSuitability, WaterQuality};

/// Level assumed when no current reading is available.
pub const DEFAULT_SUITABILITY_LEVEL_M: f64 = 20.0;

struct UseProfile {
    suitable_at: f64,
    moderate_at: f64,
    /// Scores below this get the stronger suggestions, whatever the status band.
    major_below: f64,
    moderate_suggestions: &'static [&'static str],
    unsuitable_suggestions: &'static [&'static str],
}

const AGRICULTURE: UseProfile = UseProfile {
    suitable_at: 70.0,
    moderate_at: 40.0,
    major_below: 50.0,
    moderate_suggestions: &[
        "Schedule irrigation for early morning or evening",
        "Monitor soil moisture before each irrigation cycle",
    ],
    unsuitable_suggestions: &[
        "Switch to water-efficient, drought-tolerant crops",
        "Install drip irrigation",
        "Test and treat water before irrigating sensitive crops",
    ],
};

const DOMESTIC: UseProfile = UseProfile {
    suitable_at: 60.0,
    moderate_at: 30.0,
    major_below: 30.0,
    moderate_suggestions: &[
        "Use household filtration before drinking",
        "Install low-flow fixtures",
    ],
    unsuitable_suggestions: &[
        "Treat water (RO or equivalent) before domestic use",
        "Arrange a supplementary supply for drinking water",
    ],
};

const INDUSTRIAL: UseProfile = UseProfile {
    suitable_at: 50.0,
    moderate_at: 25.0,
    major_below: 25.0,
    moderate_suggestions: &["Recycle process water where possible"],
    unsuitable_suggestions: &[
        "Pre-treat water to protect process equipment",
        "Source process water from treated wastewater",
    ],
};

/// Score agriculture, domestic and industrial fitness from level and quality.
pub fn score_suitability(current_level_m: Option<f64>, quality: &WaterQuality) -> UsageSuitability {
    let level = current_level_m.unwrap_or(DEFAULT_SUITABILITY_LEVEL_M);
    let base = (100.0 - 2.0 * level).max(0.0);

    let ph_ok = quality.ph.is_some_and(|ph| ph > 6.5 && ph < 8.5);
    let tds = quality.tds_mg_l;

    let agriculture = base + if ph_ok { 20.0 } else { 0.0 };
    let domestic = base + if tds.is_some_and(|t| t < 500.0) { 15.0 } else { 0.0 };
    let industrial = base + if tds.is_some_and(|t| t < 1000.0) { 10.0 } else { 0.0 };

    UsageSuitability {
        agriculture: rate(agriculture, &AGRICULTURE),
        domestic: rate(domestic, &DOMESTIC),
        industrial: rate(industrial, &INDUSTRIAL),
    }
}

fn rate(score: f64, profile: &UseProfile) -> UseSuitability {
    let score = score.min(100.0);

    let status = if score >= profile.suitable_at {
        SuitabilityStatus::Suitable
    } else if score >= profile.moderate_at {
        SuitabilityStatus::Moderate
    } else {
        SuitabilityStatus::Unsuitable
    };

    let suggestions: &[&str] = if score >= profile.suitable_at {
        &[]
    } else if score >= profile.major_below {
        profile.moderate_suggestions
    } else {
        profile.unsuitable_suggestions
    };

    UseSuitability {
        score,
        status,
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}
