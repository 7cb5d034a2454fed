use crate::core::numeric::NumericError;
use crate::core::numeric::ordering::{argsort, is_ascending, permute};
use serde::Serialize;

/// A sampled curve over an energy axis.
///
/// Energies and values are stored as parallel arrays of equal length. The
/// curve does not require ascending energies on construction; integration
/// routines work on [`EnergyCurve::sorted`] copies instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EnergyCurve {
    energies: Vec<f64>,
    values: Vec<f64>,
}

impl EnergyCurve {
    /// Creates a curve from parallel energy and value arrays.
    ///
    /// # Arguments
    ///
    /// * `energies` - The sample energies, in Hartree.
    /// * `values` - The curve value at each energy.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidInput`] if the arrays differ in length.
    pub fn new(energies: Vec<f64>, values: Vec<f64>) -> Result<Self, NumericError> {
        if energies.len() != values.len() {
            return Err(NumericError::InvalidInput(format!(
                "curve has {} energies but {} values",
                energies.len(),
                values.len()
            )));
        }
        Ok(Self { energies, values })
    }

    /// Builds a curve from `(energy, value)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (energies, values) = points.into_iter().unzip();
        Self { energies, values }
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        is_ascending(&self.energies)
    }

    /// Returns the stable permutation that sorts this curve by energy.
    pub fn sort_order(&self) -> Vec<usize> {
        argsort(&self.energies)
    }

    /// Returns a copy sorted by energy, with values permuted identically.
    pub fn sorted(&self) -> Self {
        if self.is_sorted() {
            return self.clone();
        }
        self.reordered(&self.sort_order())
    }

    /// Applies an index permutation to both arrays.
    ///
    /// `order` must be a permutation of `0..self.len()`.
    pub fn reordered(&self, order: &[usize]) -> Self {
        Self {
            energies: permute(&self.energies, order),
            values: permute(&self.values, order),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies.iter().copied().zip(self.values.iter().copied())
    }
}
