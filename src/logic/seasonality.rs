use super::calculations::{mean, population_std_dev, population_variance};
use crate::models::{sorted_by_time, Reading, SeasonalityResult};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Observations needed before a seasonality verdict is given.
pub const MIN_SEASONALITY_POINTS: usize = 12;

/// Monthly-mean coefficient of variation above which a series is seasonal.
const SEASONAL_CV_THRESHOLD: f64 = 0.1;

/// Group readings by calendar month and report seasonality plus lag-1
/// autocorrelation.
///
/// Fewer than twelve readings produce no verdict; the autocorrelation is
/// still reported when at least three readings exist.
pub fn analyze_seasonality(readings: &[Reading]) -> SeasonalityResult {
    let sorted = sorted_by_time(readings);
    let values: Vec<f64> = sorted.iter().map(|r| r.water_level).collect();
    let autocorrelation_lag1 = lag1_autocorrelation(&values);

    if sorted.len() < MIN_SEASONALITY_POINTS {
        return SeasonalityResult {
            autocorrelation_lag1,
            ..Default::default()
        };
    }

    let mut by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for reading in &sorted {
        by_month
            .entry(reading.timestamp.month())
            .or_default()
            .push(reading.water_level);
    }

    let monthly_means: Vec<(u32, f64)> = by_month
        .iter()
        .filter_map(|(month, levels)| mean(levels).map(|m| (*month, m)))
        .collect();
    let means: Vec<f64> = monthly_means.iter().map(|(_, m)| *m).collect();

    let overall = mean(&means).unwrap_or(0.0);
    let std_dev = population_std_dev(&means).unwrap_or(0.0);
    let cv = if overall == 0.0 { 0.0 } else { std_dev / overall };

    let (peak_month, trough_month) = extreme_months(&monthly_means);

    tracing::debug!(
        months = monthly_means.len(),
        cv,
        autocorrelation_lag1,
        "Seasonality computed"
    );

    SeasonalityResult {
        seasonal: Some(cv > SEASONAL_CV_THRESHOLD),
        coefficient_of_variation: Some(cv),
        peak_month,
        trough_month,
        autocorrelation_lag1,
    }
}

/// Months with the highest and lowest mean; ties keep the earliest month.
fn extreme_months(monthly_means: &[(u32, f64)]) -> (Option<u32>, Option<u32>) {
    let mut peak: Option<(u32, f64)> = None;
    let mut trough: Option<(u32, f64)> = None;

    for &(month, m) in monthly_means {
        if peak.map_or(true, |(_, best)| m > best) {
            peak = Some((month, m));
        }
        if trough.map_or(true, |(_, best)| m < best) {
            trough = Some((month, m));
        }
    }

    (peak.map(|(m, _)| m), trough.map(|(m, _)| m))
}

/// Lag-1 autocorrelation normalised by the population variance.
///
/// Returns 0 for fewer than three values or a zero-variance series.
pub fn lag1_autocorrelation(values: &[f64]) -> f64 {
    if values.len() < 3 {
        return 0.0;
    }

    let (Some(m), Some(variance)) = (mean(values), population_variance(values)) else {
        return 0.0;
    };
    if variance == 0.0 {
        return 0.0;
    }

    let pairs = (values.len() - 1) as f64;
    let covariance: f64 = values[..values.len() - 1]
        .iter()
        .zip(values[1..].iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / pairs;

    covariance / variance
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn monthly(values: &[f64]) -> Vec<Reading> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let month = (i % 12) as u32 + 1;
                let year = 2023 + (i / 12) as i32;
                Reading::new(Utc.with_ymd_and_hms(year, month, 15, 0, 0, 0).unwrap(), *v)
            })
            .collect()
    }

    #[test]
    fn too_few_points_has_no_verdict() {
        let result = analyze_seasonality(&monthly(&[5.0, 6.0, 7.0, 8.0, 9.0]));
        assert!(!result.has_verdict());
        assert!(result.coefficient_of_variation.is_none());
        assert!(result.peak_month.is_none());
        // Autocorrelation is still available
        assert!(result.autocorrelation_lag1 > 0.0);
    }

    #[test]
    fn constant_series_is_not_seasonal() {
        let result = analyze_seasonality(&monthly(&[10.0; 12]));
        assert_eq!(result.seasonal, Some(false));
        assert_eq!(result.coefficient_of_variation, Some(0.0));
        // All months tie, so the first month wins both extremes
        assert_eq!(result.peak_month, Some(1));
        assert_eq!(result.trough_month, Some(1));
        assert_eq!(result.autocorrelation_lag1, 0.0);
    }

    #[test]
    fn monsoon_swing_is_seasonal() {
        let levels = [
            12.0, 13.0, 14.0, 15.0, 16.0, 14.0, 8.0, 6.0, 7.0, 9.0, 10.0, 11.0,
        ];
        let result = analyze_seasonality(&monthly(&levels));
        assert_eq!(result.seasonal, Some(true));
        assert_eq!(result.peak_month, Some(5));
        assert_eq!(result.trough_month, Some(8));
        assert!(result.coefficient_of_variation.unwrap() > 0.1);
    }

    #[test]
    fn small_variation_is_not_seasonal() {
        let levels = [
            10.0, 10.2, 10.4, 10.6, 10.8, 11.0, 10.8, 10.6, 10.4, 10.2, 10.0, 10.1,
        ];
        let result = analyze_seasonality(&monthly(&levels));
        assert_eq!(result.seasonal, Some(false));
    }

    #[test]
    fn autocorrelation_edge_cases() {
        assert_eq!(lag1_autocorrelation(&[]), 0.0);
        assert_eq!(lag1_autocorrelation(&[1.0, 2.0]), 0.0);
        assert_eq!(lag1_autocorrelation(&[3.0, 3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn alternating_series_has_negative_autocorrelation() {
        let values = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        // covariance = -1 over 5 pairs, variance = 1
        assert!((lag1_autocorrelation(&values) - (-1.0)).abs() < 1e-12);
    }
}
