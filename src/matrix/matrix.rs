//! Dense 2-D numeric container with zero-copy views

use super::layout::Layout;
use super::storage::Storage;
use super::vector::Vector;
use crate::error::{Error, Result};
use crate::scalar::{Scalar, TryCast};
use std::fmt;
use std::ops::Range;

/// Dense matrix generic over a scalar algebra
///
/// Rectangular by construction: `m` rows of exactly `n` columns, `m, n ≥ 0`.
/// A `Matrix` may be an owned buffer or a window (view) into a larger one;
/// views share storage, and mutation through a view mutates the backing
/// store. `Clone` is zero-copy; use [`Matrix::to_vec`] for an owned
/// row-major copy of the elements.
pub struct Matrix<T: Scalar> {
    storage: Storage<T>,
    layout: Layout,
}

impl<T: Scalar> Matrix<T> {
    /// Create a matrix from row-major data
    ///
    /// Fails with `DimensionMismatch` when `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::dimension_mismatch(
                "Matrix::from_vec",
                &[rows * cols],
                &[data.len()],
            ));
        }
        Ok(Self {
            storage: Storage::from_vec(data),
            layout: Layout::contiguous(rows, cols),
        })
    }

    /// Create a matrix from rows, enforcing the rectangular invariant
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let m = rows.len();
        let n = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(m * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::dimension_mismatch(
                    "Matrix::from_rows",
                    &[n],
                    &[row.len()],
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, m, n)
    }

    /// Create an `m × n` zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            storage: Storage::from_vec(vec![T::zero(); rows * cols]),
            layout: Layout::contiguous(rows, cols),
        }
    }

    /// Create the `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        let m = Self::zeros(n, n);
        for i in 0..n {
            m.storage.set(m.layout.index(i, i), T::one());
        }
        m
    }

    /// Create a matrix from a function of the coordinates
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self {
            storage: Storage::from_vec(data),
            layout: Layout::contiguous(rows, cols),
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// `(rows, cols)` pair
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.layout.rows(), self.layout.cols())
    }

    /// Whether the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Whether the elements occupy a dense row-major region
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Element at `(i, j)`, unchecked beyond a debug assertion
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> T {
        self.storage.get(self.layout.index(i, j))
    }

    /// Write element at `(i, j)`, unchecked beyond a debug assertion
    #[inline]
    pub(crate) fn put(&self, i: usize, j: usize, value: T) {
        self.storage.set(self.layout.index(i, j), value);
    }

    /// Checked element read
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        if i >= self.rows() {
            return Err(Error::index_out_of_bounds(i, self.rows()));
        }
        if j >= self.cols() {
            return Err(Error::index_out_of_bounds(j, self.cols()));
        }
        Ok(self.at(i, j))
    }

    /// Checked element write
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        if i >= self.rows() {
            return Err(Error::index_out_of_bounds(i, self.rows()));
        }
        if j >= self.cols() {
            return Err(Error::index_out_of_bounds(j, self.cols()));
        }
        self.put(i, j, value);
        Ok(())
    }

    /// Zero-copy window over `rows × cols` of this matrix
    ///
    /// The view shares storage with `self`; writes through it are visible
    /// in the parent (and any other view of the same buffer).
    pub fn view(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Matrix<T>> {
        if rows.start > rows.end || rows.end > self.rows() {
            return Err(Error::index_out_of_bounds(rows.end, self.rows()));
        }
        if cols.start > cols.end || cols.end > self.cols() {
            return Err(Error::index_out_of_bounds(cols.end, self.cols()));
        }
        Ok(Matrix {
            storage: self.storage.clone(),
            layout: self
                .layout
                .view(rows.start, rows.end, cols.start, cols.end),
        })
    }

    /// Row `i` as a zero-copy strided vector view
    pub fn row(&self, i: usize) -> Result<Vector<T>> {
        if i >= self.rows() {
            return Err(Error::index_out_of_bounds(i, self.rows()));
        }
        let (offset, stride, len) = self.layout.row(i);
        Ok(Vector::from_raw(self.storage.clone(), offset, stride, len))
    }

    /// Column `j` as a zero-copy strided vector view
    pub fn col(&self, j: usize) -> Result<Vector<T>> {
        if j >= self.cols() {
            return Err(Error::index_out_of_bounds(j, self.cols()));
        }
        let (offset, stride, len) = self.layout.col(j);
        Ok(Vector::from_raw(self.storage.clone(), offset, stride, len))
    }

    /// Main diagonal (length `min(m, n)`) as a zero-copy vector view
    pub fn diagonal(&self) -> Vector<T> {
        let (offset, stride, len) = self.layout.diagonal();
        Vector::from_raw(self.storage.clone(), offset, stride, len)
    }

    /// Transpose as a zero-copy view (swapped strides, same buffer)
    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            storage: self.storage.clone(),
            layout: self.layout.transpose(),
        }
    }

    /// Iterate over the elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.rows()).flat_map(move |i| (0..self.cols()).map(move |j| self.at(i, j)))
    }

    /// Copy the elements into an owned row-major `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        if self.is_contiguous() {
            let start = self.layout.offset();
            return self.storage.as_slice()[start..start + self.rows() * self.cols()].to_vec();
        }
        self.iter().collect()
    }

    /// Apply `f` to every element, producing a new owned matrix
    pub fn map<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U> {
        Matrix::from_fn(self.rows(), self.cols(), |i, j| f(self.at(i, j)))
    }

    /// Convert every element into type `U`, failing with `Inexact` when a
    /// value cannot be represented (e.g. a complex value with nonzero
    /// imaginary part into a real target)
    pub fn try_cast<U: Scalar + TryCast<T>>(&self) -> Result<Matrix<U>> {
        let mut data = Vec::with_capacity(self.rows() * self.cols());
        for e in self.iter() {
            data.push(U::try_cast(e)?);
        }
        Matrix::from_vec(data, self.rows(), self.cols())
    }

    /// Shared backing storage handle (crate-internal)
    #[inline]
    pub(crate) fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Layout of this matrix (crate-internal)
    #[inline]
    pub(crate) fn layout(&self) -> &Layout {
        &self.layout
    }
}

impl<T: Scalar> Clone for Matrix<T> {
    /// Zero-copy clone sharing the backing buffer
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            layout: self.layout,
        }
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Scalar> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} [", self.rows(), self.cols())?;
        for i in 0..self.rows() {
            write!(f, "  [")?;
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", self.at(i, j))?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}
