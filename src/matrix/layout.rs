//! Layout: shape, strides, and offset for 2-D containers
//!
//! A [`Layout`] maps matrix coordinates to flat positions in a shared
//! [`Storage`](super::storage::Storage) buffer. Views are layouts with a
//! nonzero offset and/or non-canonical strides over the same buffer;
//! transposition swaps strides without touching data.

/// Mapping from `(row, col)` coordinates to flat buffer positions
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
    offset: usize,
}

impl Layout {
    /// Canonical row-major layout for an owned `rows × cols` buffer
    pub fn contiguous(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_stride: cols,
            col_stride: 1,
            offset: 0,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat buffer position of `(i, j)`
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        self.offset + i * self.row_stride + j * self.col_stride
    }

    /// Whether the layout covers a dense row-major region
    ///
    /// Contiguity is what enables slice-level fast paths: the covered flat
    /// range `offset .. offset + rows*cols` is exactly the view's elements
    /// in row-major order.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.col_stride == 1 && self.row_stride == self.cols
    }

    /// Start of the flat region covered by a contiguous layout
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Sub-layout over `rows [r0, r1) × cols [c0, c1)` of the same buffer
    pub fn view(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Self {
        debug_assert!(r0 <= r1 && r1 <= self.rows);
        debug_assert!(c0 <= c1 && c1 <= self.cols);
        Self {
            rows: r1 - r0,
            cols: c1 - c0,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
            offset: self.offset + r0 * self.row_stride + c0 * self.col_stride,
        }
    }

    /// Transposed layout: swapped extents and strides, same buffer
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
            offset: self.offset,
        }
    }

    /// `(offset, stride, len)` of row `i` as a 1-D view
    pub fn row(&self, i: usize) -> (usize, usize, usize) {
        debug_assert!(i < self.rows);
        (
            self.offset + i * self.row_stride,
            self.col_stride,
            self.cols,
        )
    }

    /// `(offset, stride, len)` of column `j` as a 1-D view
    pub fn col(&self, j: usize) -> (usize, usize, usize) {
        debug_assert!(j < self.cols);
        (
            self.offset + j * self.col_stride,
            self.row_stride,
            self.rows,
        )
    }

    /// `(offset, stride, len)` of the main diagonal as a 1-D view
    pub fn diagonal(&self) -> (usize, usize, usize) {
        (
            self.offset,
            self.row_stride + self.col_stride,
            self.rows.min(self.cols),
        )
    }
}
