use super::error::NumericError;
use super::ordering::ensure_ascending;

pub const MIN_INTEGRATION_SAMPLES: usize = 2;

/// Cumulative trapezoidal integral of `ys` over `xs`, seeded with `0.0`.
///
/// The result has the same length as the input: element `i` is the integral
/// from `xs[0]` to `xs[i]`.
///
/// # Errors
///
/// * [`NumericError::InvalidInput`] if the arrays differ in length or `xs` is
///   not ascending.
/// * [`NumericError::InsufficientSamples`] if fewer than two samples are given.
pub fn cumulative_trapezoid(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>, NumericError> {
    if xs.len() != ys.len() {
        return Err(NumericError::length_mismatch("integrand", xs.len(), ys.len()));
    }
    if xs.len() < MIN_INTEGRATION_SAMPLES {
        return Err(NumericError::InsufficientSamples {
            found: xs.len(),
            required: MIN_INTEGRATION_SAMPLES,
        });
    }
    ensure_ascending(xs)?;

    let mut running = 0.0;
    let mut out = Vec::with_capacity(xs.len());
    out.push(running);
    for i in 1..xs.len() {
        running += 0.5 * (xs[i] - xs[i - 1]) * (ys[i] + ys[i - 1]);
        out.push(running);
    }
    Ok(out)
}

/// Width of the sampled domain, rejecting zero-width axes.
pub fn domain_span(xs: &[f64]) -> Result<f64, NumericError> {
    let (first, last) = match (xs.first(), xs.last()) {
        (Some(&first), Some(&last)) if xs.len() >= MIN_INTEGRATION_SAMPLES => (first, last),
        _ => {
            return Err(NumericError::InsufficientSamples {
                found: xs.len(),
                required: MIN_INTEGRATION_SAMPLES,
            });
        }
    };
    let span = last - first;
    if span == 0.0 {
        return Err(NumericError::DegenerateDomain { energy: first });
    }
    if !span.is_finite() {
        return Err(NumericError::InvalidInput(format!(
            "energy domain [{}, {}] has a non-finite span",
            first, last
        )));
    }
    Ok(span)
}

/// Cumulative trapezoid divided elementwise by the domain span.
///
/// The output is independent of the domain width: a constant integrand `c`
/// ends at exactly `c`.
pub fn normalized_cumulative_trapezoid(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>, NumericError> {
    let mut integral = cumulative_trapezoid(xs, ys)?;
    let span = domain_span(xs)?;
    integral.iter_mut().for_each(|v| *v /= span);
    Ok(integral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cumulative_trapezoid_of_constant_grows_linearly() {
        let xs = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
        let ys = [1.0; 6];
        let integral = cumulative_trapezoid(&xs, &ys).unwrap();
        assert_eq!(integral, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn cumulative_trapezoid_handles_non_uniform_steps() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 2.0, 2.0];
        let integral = cumulative_trapezoid(&xs, &ys).unwrap();
        assert_relative_eq!(integral[1], 1.0);
        assert_relative_eq!(integral[2], 5.0);
    }

    #[test]
    fn cumulative_trapezoid_rejects_single_sample() {
        let err = cumulative_trapezoid(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            NumericError::InsufficientSamples {
                found: 1,
                required: 2
            }
        );
    }

    #[test]
    fn cumulative_trapezoid_rejects_length_mismatch() {
        let err = cumulative_trapezoid(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, NumericError::InvalidInput(_)));
    }

    #[test]
    fn cumulative_trapezoid_rejects_unsorted_axis() {
        let err = cumulative_trapezoid(&[0.0, 2.0, 1.0], &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, NumericError::InvalidInput(_)));
    }

    #[test]
    fn domain_span_rejects_zero_width() {
        let err = domain_span(&[3.0, 3.0]).unwrap_err();
        assert_eq!(err, NumericError::DegenerateDomain { energy: 3.0 });
    }

    #[test]
    fn normalized_integral_of_constant_ends_at_constant() {
        let xs = [-1.0, 0.5, 4.0, 9.0];
        let ys = [0.25; 4];
        let integral = normalized_cumulative_trapezoid(&xs, &ys).unwrap();
        assert_relative_eq!(*integral.last().unwrap(), 0.25, epsilon = 1e-12);
        assert_eq!(integral[0], 0.0);
    }

    #[test]
    fn normalized_integral_never_returns_non_finite_on_degenerate_axis() {
        let result = normalized_cumulative_trapezoid(&[3.0, 3.0], &[1.0, 1.0]);
        assert!(matches!(result, Err(NumericError::DegenerateDomain { .. })));
    }
}
