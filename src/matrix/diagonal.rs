//! Packed diagonal operator

use crate::scalar::Scalar;

/// Diagonal matrix stored as its `min(m, n)` diagonal entries
///
/// Participates in scaling multiplication without materializing the
/// off-diagonal zeros: `scale_rows` applies `D` on the left of a matrix,
/// `scale_cols` applies it on the right.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagonal<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Diagonal<T> {
    /// Create a diagonal operator from its entries
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of diagonal entries
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the operator has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry `i` of the diagonal
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[i]
    }

    /// Iterate over the diagonal entries
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }
}
