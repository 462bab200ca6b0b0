//! Percentile estimation from median and mean.

/// Estimates the percentile of an income within a population described only
/// by its median and mean.
///
/// This is a deliberately discontinuous piecewise approximation of a
/// right-skewed income distribution, not a true CDF inversion: below the
/// median it interpolates linearly to the 50th percentile; above it, fixed
/// anchor points at the mean (65), twice the mean (84), and three times the
/// mean (95) shape the curve, capping at 99.5. Downstream comparison logic
/// is calibrated against this exact shape.
pub fn estimate_percentile(income: f64, median: f64, mean: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }

    if income < median {
        // Below median: map 0..median onto 0..50.
        income / median * 50.0
    } else if income >= mean * 3.0 {
        (95.0 + (income - mean * 3.0) / (mean * 10.0) * 4.5).min(99.5)
    } else if income >= mean * 2.0 {
        84.0 + (income - mean * 2.0) / mean * 11.0
    } else if income >= mean {
        65.0 + (income - mean) / mean * 19.0
    } else {
        // Between median and mean.
        50.0 + (income - median) / (mean - median) * 15.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MEDIAN: f64 = 50_000.0;
    const MEAN: f64 = 65_000.0;

    #[test]
    fn test_zero_and_negative_income_is_percentile_zero() {
        assert_eq!(estimate_percentile(0.0, MEDIAN, MEAN), 0.0);
        assert_eq!(estimate_percentile(-10_000.0, MEDIAN, MEAN), 0.0);
    }

    #[test]
    fn test_median_income_is_exactly_50() {
        assert_eq!(estimate_percentile(MEDIAN, MEDIAN, MEAN), 50.0);
    }

    #[test]
    fn test_half_median_is_25() {
        assert_eq!(estimate_percentile(MEDIAN / 2.0, MEDIAN, MEAN), 25.0);
    }

    #[test]
    fn test_mean_income_is_65() {
        assert_eq!(estimate_percentile(MEAN, MEDIAN, MEAN), 65.0);
    }

    #[test]
    fn test_twice_mean_is_84() {
        assert_eq!(estimate_percentile(MEAN * 2.0, MEDIAN, MEAN), 84.0);
    }

    #[test]
    fn test_three_times_mean_is_95() {
        assert_eq!(estimate_percentile(MEAN * 3.0, MEDIAN, MEAN), 95.0);
    }

    #[test]
    fn test_extreme_income_caps_at_99_5() {
        assert_eq!(estimate_percentile(MEAN * 100.0, MEDIAN, MEAN), 99.5);
    }

    #[test]
    fn test_between_median_and_mean_interpolates() {
        let midway = (MEDIAN + MEAN) / 2.0;
        assert!((estimate_percentile(midway, MEDIAN, MEAN) - 57.5).abs() < 1e-9);
    }

    proptest! {
        /// Monotonically non-decreasing in income for fixed median < mean.
        #[test]
        fn prop_monotone_in_income(a in 0.0f64..1_000_000.0, b in 0.0f64..1_000_000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = estimate_percentile(lo, MEDIAN, MEAN);
            let p_hi = estimate_percentile(hi, MEDIAN, MEAN);
            prop_assert!(p_lo <= p_hi + 1e-9);
        }

        /// Always within [0, 99.5].
        #[test]
        fn prop_bounded(income in -100_000.0f64..10_000_000.0) {
            let p = estimate_percentile(income, MEDIAN, MEAN);
            prop_assert!((0.0..=99.5).contains(&p));
        }
    }
}
