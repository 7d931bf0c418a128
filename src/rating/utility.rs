/// Computes the arithmetic mean of a slice of values. Returns `None` for
/// empty input so callers never mistake "no data" for a real zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rounds to one decimal place, half away from zero (`f64::round` after
/// scaling by 10). 8.75 rounds up to 8.8, not down to 8.7.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_normal_values() {
        assert_eq!(mean(&[4.0, 6.0]), Some(5.0));
        assert_eq!(mean(&[1.0]), Some(1.0));
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(9.666666666666666), 9.7);
        assert_eq!(round_to_tenth(1.5), 1.5);
        assert_eq!(round_to_tenth(9.0), 9.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 8.75 and 1.25 are exactly representable, so these exercise the
        // true .05 boundary rather than a float artifact.
        assert_eq!(round_to_tenth(8.75), 8.8);
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(-1.25), -1.3);
    }
}
