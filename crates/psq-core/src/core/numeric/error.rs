use thiserror::Error;

/// Errors raised by the numeric core when its data contract is violated.
///
/// Every variant is raised at the point of detection. None of them describes a
/// transient condition, so callers decide whether to abort the whole analysis
/// or skip the offending channel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericError {
    /// Arrays are misordered, misaligned, or a parameter is out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An integrated axis holds fewer samples than the trapezoid rule needs.
    #[error("Insufficient samples for integration: got {found}, need at least {required}")]
    InsufficientSamples { found: usize, required: usize },

    /// The energy domain has zero width, so normalization would divide by zero.
    #[error("Degenerate energy domain: first and last energies are both {energy}")]
    DegenerateDomain { energy: f64 },
}

impl NumericError {
    pub(crate) fn length_mismatch(what: &str, expected: usize, found: usize) -> Self {
        Self::InvalidInput(format!(
            "{} has {} samples but the energy axis has {}",
            what, found, expected
        ))
    }
}
