use super::error::NumericError;

/// Returns `true` when every adjacent pair satisfies `a <= b`.
///
/// NaN entries never compare as ordered, so an axis containing one is rejected.
#[inline]
pub fn is_ascending(xs: &[f64]) -> bool {
    xs.windows(2).all(|pair| pair[0] <= pair[1])
}

pub fn ensure_ascending(xs: &[f64]) -> Result<(), NumericError> {
    match xs.windows(2).position(|pair| !(pair[0] <= pair[1])) {
        None => Ok(()),
        Some(i) => Err(NumericError::InvalidInput(format!(
            "energy axis is not ascending at index {}: {} followed by {}",
            i + 1,
            xs[i],
            xs[i + 1]
        ))),
    }
}

/// Stable permutation that sorts `xs` ascending.
///
/// Ties keep their original relative order. Uses the IEEE total order, so
/// positive NaN sorts last; callers validate the sorted result with
/// [`ensure_ascending`].
pub fn argsort(xs: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..xs.len()).collect();
    indices.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));
    indices
}

#[inline]
pub fn permute(values: &[f64], order: &[usize]) -> Vec<f64> {
    order.iter().map(|&i| values[i]).collect()
}
