use super::calculations::{median, normal_cdf};
use crate::models::{sorted_by_time, Reading, Significance, TrendDirection, TrendResult};
use chrono::{DateTime, Utc};

/// Fewest observations the Mann-Kendall test will run on.
pub const MIN_TREND_POINTS: usize = 3;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Mann-Kendall S statistic and tie count over time-ordered values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannKendall {
    pub s: i64,
    /// Number of pairs with identical values.
    pub ties: u64,
    pub variance: f64,
    pub z: f64,
}

/// Run the Mann-Kendall trend test and Sen's slope over a reading series.
///
/// Readings are sorted by timestamp first. Fewer than three readings yield
/// an `InsufficientData` result with no further computation.
pub fn analyze_trend(readings: &[Reading]) -> TrendResult {
    let n = readings.len();
    if n < MIN_TREND_POINTS {
        tracing::debug!(sample_size = n, "Too few readings for trend test");
        return TrendResult::insufficient(n);
    }

    let sorted = sorted_by_time(readings);
    let values: Vec<f64> = sorted.iter().map(|r| r.water_level).collect();
    let timestamps: Vec<DateTime<Utc>> = sorted.iter().map(|r| r.timestamp).collect();

    let mk = mann_kendall(&values);
    let p_value = two_sided_p_value(mk.z);
    let slope_per_day = sens_slope(&values, &timestamps);

    let direction = match mk.s.signum() {
        1 => TrendDirection::Rising,
        -1 => TrendDirection::Falling,
        _ => TrendDirection::Stable,
    };

    tracing::debug!(
        s = mk.s,
        z = mk.z,
        p_value,
        slope_per_day,
        "Mann-Kendall trend computed"
    );

    TrendResult {
        slope_per_day,
        direction,
        significance: Significance::from_p_value(p_value),
        p_value,
        sample_size: n,
        s_statistic: mk.s,
        variance: mk.variance,
        z_score: mk.z,
    }
}

/// Mann-Kendall statistic over values already in time order.
///
/// The variance correction subtracts the raw count of tied pairs.
pub fn mann_kendall(values: &[f64]) -> MannKendall {
    let n = values.len();
    let mut s: i64 = 0;
    let mut ties: u64 = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            let diff = values[j] - values[i];
            if diff > 0.0 {
                s += 1;
            } else if diff < 0.0 {
                s -= 1;
            } else {
                ties += 1;
            }
        }
    }

    let nf = n as f64;
    let variance = (nf * (nf - 1.0) * (2.0 * nf + 5.0) - ties as f64) / 18.0;

    let z = if variance <= 0.0 {
        0.0
    } else if s > 0 {
        (s - 1) as f64 / variance.sqrt()
    } else if s < 0 {
        (s + 1) as f64 / variance.sqrt()
    } else {
        0.0
    };

    MannKendall {
        s,
        ties,
        variance,
        z,
    }
}

/// Two-sided p-value for a standard normal statistic, clamped to [0, 1].
pub fn two_sided_p_value(z: f64) -> f64 {
    (2.0 * (1.0 - normal_cdf(z.abs()))).clamp(0.0, 1.0)
}

/// Sen's slope: median of pairwise slopes in units per day.
///
/// Pairs without a positive time delta are skipped. Returns 0 when no pair
/// qualifies.
pub fn sens_slope(values: &[f64], timestamps: &[DateTime<Utc>]) -> f64 {
    let n = values.len().min(timestamps.len());
    let mut slopes = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            let delta_days =
                (timestamps[j] - timestamps[i]).num_milliseconds() as f64 / MILLIS_PER_DAY;
            if delta_days > 0.0 {
                slopes.push((values[j] - values[i]) / delta_days);
            }
        }
    }

    median(&slopes).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn daily_series(values: &[f64]) -> Vec<Reading> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Reading::new(start + Duration::days(i as i64), *v))
            .collect()
    }

    #[test]
    fn increasing_series_is_rising() {
        let readings = daily_series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let result = analyze_trend(&readings);
        assert_eq!(result.direction, TrendDirection::Rising);
        assert_eq!(result.s_statistic, 15);
        assert!(result.slope_per_day > 0.0);
    }

    #[test]
    fn decreasing_series_is_falling() {
        let readings = daily_series(&[9.0, 7.5, 6.0, 4.0, 3.0, 1.0]);
        let result = analyze_trend(&readings);
        assert_eq!(result.direction, TrendDirection::Falling);
        assert_eq!(result.s_statistic, -15);
        assert!(result.slope_per_day < 0.0);
    }

    #[test]
    fn constant_series_is_stable() {
        let readings = daily_series(&[8.0; 10]);
        let result = analyze_trend(&readings);
        assert_eq!(result.direction, TrendDirection::Stable);
        assert_eq!(result.s_statistic, 0);
        assert_eq!(result.z_score, 0.0);
        assert_eq!(result.slope_per_day, 0.0);
        assert_eq!(result.significance, Significance::NotSignificant);
        assert!(result.p_value > 0.99);
    }

    #[test]
    fn short_series_is_insufficient() {
        for values in [vec![], vec![4.0], vec![100.0, 0.0]] {
            let result = analyze_trend(&daily_series(&values));
            assert_eq!(result.significance, Significance::InsufficientData);
            assert_eq!(result.direction, TrendDirection::Stable);
            assert_eq!(result.p_value, 1.0);
            assert_eq!(result.slope_per_day, 0.0);
            assert_eq!(result.sample_size, values.len());
        }
    }

    #[test]
    fn unsorted_input_is_ordered_by_time() {
        let mut readings = daily_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        readings.reverse();
        let result = analyze_trend(&readings);
        assert_eq!(result.direction, TrendDirection::Rising);
        assert!((result.slope_per_day - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sens_slope_recovers_linear_rate() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let offsets = [0, 3, 10, 17, 45, 90, 200];
        let readings: Vec<Reading> = offsets
            .iter()
            .map(|d| Reading::new(start + Duration::days(*d), 12.0 - 0.035 * *d as f64))
            .collect();

        let result = analyze_trend(&readings);
        assert!((result.slope_per_day - (-0.035)).abs() < 1e-9);
    }

    #[test]
    fn sens_slope_skips_duplicate_timestamps() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let timestamps = [t, t, t + Duration::days(2)];
        let values = [1.0, 5.0, 3.0];
        // Only (0,2) and (1,2) have positive deltas: slopes 1.0 and -1.0
        assert!((sens_slope(&values, &timestamps) - 0.0).abs() < 1e-12);

        assert_eq!(sens_slope(&[1.0, 2.0], &[t, t]), 0.0);
    }

    #[test]
    fn mann_kendall_variance_with_ties() {
        let mk = mann_kendall(&[1.0, 1.0, 2.0, 3.0]);
        assert_eq!(mk.s, 5);
        assert_eq!(mk.ties, 1);
        // (4*3*13 - 1) / 18
        assert!((mk.variance - 155.0 / 18.0).abs() < 1e-12);
        assert!((mk.z - 4.0 / (155.0f64 / 18.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn strong_trend_is_highly_significant() {
        let values: Vec<f64> = (0..12).map(|i| 25.0 - i as f64).collect();
        let result = analyze_trend(&daily_series(&values));
        assert_eq!(result.s_statistic, -66);
        assert_eq!(result.significance, Significance::HighlySignificant);
        assert!(result.p_value < 0.001);
    }

    #[test]
    fn output_is_deterministic() {
        let readings = daily_series(&[3.2, 4.1, 3.9, 5.0, 4.4, 6.3, 5.8]);
        let a = analyze_trend(&readings);
        let b = analyze_trend(&readings);
        assert_eq!(a.slope_per_day.to_bits(), b.slope_per_day.to_bits());
        assert_eq!(a.p_value.to_bits(), b.p_value.to_bits());
        assert_eq!(a, b);
    }
}
