//! Borrowed views over caller-owned observation data.

use faer::{Col, Mat};

/// An argument handed to a calculator before it has been validated.
///
/// Only `Column` is accepted as an observation vector. The other variants
/// exist so that callers holding the wrong kind of data get a precise
/// contract error instead of a silent conversion.
#[derive(Debug, Clone, Copy)]
pub enum ArrayInput<'a> {
    /// A one-dimensional numeric array.
    Column(&'a Col<f64>),
    /// A two-dimensional numeric array.
    Matrix(&'a Mat<f64>),
    /// A plain sequence of values that is not a numeric array.
    Sequence(&'a [f64]),
}

impl ArrayInput<'_> {
    /// Number of dimensions of the argument. Plain sequences report one.
    pub fn ndim(&self) -> usize {
        match self {
            ArrayInput::Matrix(_) => 2,
            ArrayInput::Column(_) | ArrayInput::Sequence(_) => 1,
        }
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        match self {
            ArrayInput::Column(col) => col.nrows(),
            ArrayInput::Matrix(mat) => mat.nrows() * mat.ncols(),
            ArrayInput::Sequence(values) => values.len(),
        }
    }
}

impl<'a> From<&'a Col<f64>> for ArrayInput<'a> {
    fn from(col: &'a Col<f64>) -> Self {
        ArrayInput::Column(col)
    }
}

impl<'a> From<&'a Mat<f64>> for ArrayInput<'a> {
    fn from(mat: &'a Mat<f64>) -> Self {
        ArrayInput::Matrix(mat)
    }
}

impl<'a> From<&'a [f64]> for ArrayInput<'a> {
    fn from(values: &'a [f64]) -> Self {
        ArrayInput::Sequence(values)
    }
}

impl<'a> From<&'a Vec<f64>> for ArrayInput<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        ArrayInput::Sequence(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ArrayInput<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        ArrayInput::Sequence(values.as_slice())
    }
}
