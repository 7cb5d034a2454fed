use super::transferability::ChannelScore;
use crate::core::numeric::NumericError;

/// Sums per-channel cumulative curves elementwise.
///
/// All curves must have been computed on the same energy axis, so they must
/// share a length.
pub fn aggregate_scores(scores: &[ChannelScore]) -> Result<Vec<f64>, NumericError> {
    let Some(first) = scores.first() else {
        return Err(NumericError::InvalidInput(
            "cannot aggregate an empty set of channel scores".to_string(),
        ));
    };

    let mut total = vec![0.0; first.cumulative.len()];
    for score in scores {
        if score.cumulative.len() != total.len() {
            return Err(NumericError::InvalidInput(format!(
                "channel l={} has {} cumulative samples, expected {}",
                score.l,
                score.cumulative.len(),
                total.len()
            )));
        }
        total
            .iter_mut()
            .zip(&score.cumulative)
            .for_each(|(t, v)| *t += v);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(l: u32, cumulative: Vec<f64>) -> ChannelScore {
        let last = *cumulative.last().unwrap();
        ChannelScore {
            l,
            bound: true,
            cumulative,
            score: last,
            raw_score: last,
        }
    }

    #[test]
    fn sums_curves_elementwise() {
        let total = aggregate_scores(&[
            score(0, vec![0.0, 0.5, 1.0]),
            score(1, vec![0.0, 0.25, 0.75]),
        ])
        .unwrap();
        assert_eq!(total, vec![0.0, 0.75, 1.75]);
    }

    #[test]
    fn single_channel_aggregate_equals_channel_curve() {
        let total = aggregate_scores(&[score(0, vec![0.0, 0.1])]).unwrap();
        assert_eq!(total, vec![0.0, 0.1]);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let result = aggregate_scores(&[score(0, vec![0.0, 1.0]), score(1, vec![0.0, 1.0, 2.0])]);
        assert!(matches!(result, Err(NumericError::InvalidInput(_))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(aggregate_scores(&[]).is_err());
    }
}
