#[inline]
pub fn logistic(energy: f64, center: f64, width: f64) -> f64 {
    1.0 / (((energy - center) / width).exp() + 1.0)
}

#[inline]
pub fn window_value(energy: f64, center: f64, width: f64, mirrored: bool) -> f64 {
    let value = logistic(energy, center, width);
    if mirrored { 1.0 - value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn logistic_is_one_half_at_center() {
        assert_eq!(logistic(6.0, 6.0, 0.25), 0.5);
    }

    #[test]
    fn logistic_saturates_far_from_center() {
        assert!(f64_approx_equal(logistic(-10.0, 0.0, 0.25), 1.0));
        assert!(f64_approx_equal(logistic(10.0, 0.0, 0.25), 0.0));
    }

    #[test]
    fn logistic_does_not_produce_nan_on_overflow() {
        let far_above = logistic(1e6, 0.0, 1e-3);
        let far_below = logistic(-1e6, 0.0, 1e-3);
        assert_eq!(far_above, 0.0);
        assert_eq!(far_below, 1.0);
    }

    #[test]
    fn mirrored_window_is_complement_of_direct() {
        for e in [-1.0, 0.0, 0.3, 2.0] {
            let direct = window_value(e, 0.0, 0.25, false);
            let mirrored = window_value(e, 0.0, 0.25, true);
            assert!(f64_approx_equal(direct + mirrored, 1.0));
        }
    }

    #[test]
    fn direct_window_at_two_sigma_matches_closed_form() {
        let expected = 1.0 / (2.0_f64.exp() + 1.0);
        assert!(f64_approx_equal(window_value(0.5, 0.0, 0.25, false), expected));
    }
}
