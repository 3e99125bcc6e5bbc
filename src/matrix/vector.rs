//! Strided 1-D numeric container

use super::storage::Storage;
use crate::error::{Error, Result};
use crate::scalar::{Scalar, TryCast};
use std::fmt;
use std::ops::Range;

/// Dense vector generic over a scalar algebra
///
/// A `Vector` may own its buffer or be a strided view into a matrix row,
/// column, or diagonal; either way the buffer is shared through an `Arc`,
/// and writing through a view writes the backing store. `Clone` is
/// zero-copy (the clone aliases the same buffer); use [`Vector::to_vec`]
/// for an owned copy of the elements.
pub struct Vector<T: Scalar> {
    storage: Storage<T>,
    offset: usize,
    stride: usize,
    len: usize,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector owning the given elements
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            storage: Storage::from_vec(data),
            offset: 0,
            stride: 1,
            len,
        }
    }

    /// Create a vector copying the given elements
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Create a zero vector of length `n`
    pub fn zeros(n: usize) -> Self {
        Self::from_vec(vec![T::zero(); n])
    }

    /// Create a vector from a function of the index
    pub fn from_fn(n: usize, f: impl FnMut(usize) -> T) -> Self {
        Self::from_vec((0..n).map(f).collect())
    }

    /// View over an existing buffer (crate-internal, for matrix rows etc.)
    pub(crate) fn from_raw(storage: Storage<T>, offset: usize, stride: usize, len: usize) -> Self {
        debug_assert!(len == 0 || offset + (len - 1) * stride < storage.len());
        Self {
            storage,
            offset,
            stride,
            len,
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the elements occupy a dense unit-stride region
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == 1
    }

    /// Element at `i`, unchecked beyond a debug assertion
    #[inline]
    pub(crate) fn at(&self, i: usize) -> T {
        debug_assert!(i < self.len);
        self.storage.get(self.offset + i * self.stride)
    }

    /// Write element at `i`, unchecked beyond a debug assertion
    #[inline]
    pub(crate) fn put(&self, i: usize, value: T) {
        debug_assert!(i < self.len);
        self.storage.set(self.offset + i * self.stride, value);
    }

    /// Checked element read
    pub fn get(&self, i: usize) -> Result<T> {
        if i >= self.len {
            return Err(Error::index_out_of_bounds(i, self.len));
        }
        Ok(self.at(i))
    }

    /// Checked element write
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        if i >= self.len {
            return Err(Error::index_out_of_bounds(i, self.len));
        }
        self.put(i, value);
        Ok(())
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |i| self.at(i))
    }

    /// Copy the elements into an owned `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        if self.is_contiguous() {
            return self.storage.as_slice()[self.offset..self.offset + self.len].to_vec();
        }
        self.iter().collect()
    }

    /// Zero-copy view over `range`
    pub fn subvector(&self, range: Range<usize>) -> Result<Vector<T>> {
        if range.start > range.end || range.end > self.len {
            return Err(Error::index_out_of_bounds(range.end, self.len));
        }
        Ok(Vector {
            storage: self.storage.clone(),
            offset: self.offset + range.start * self.stride,
            stride: self.stride,
            len: range.end - range.start,
        })
    }

    /// Apply `f` to every element, producing a new owned vector
    pub fn map<U: Scalar>(&self, f: impl FnMut(T) -> U) -> Vector<U> {
        Vector::from_vec(self.iter().map(f).collect())
    }

    /// Convert every element into type `U`, failing with `Inexact` when a
    /// value cannot be represented
    pub fn try_cast<U: Scalar + TryCast<T>>(&self) -> Result<Vector<U>> {
        let mut data = Vec::with_capacity(self.len());
        for e in self.iter() {
            data.push(U::try_cast(e)?);
        }
        Ok(Vector::from_vec(data))
    }
}

impl<T: Scalar> Clone for Vector<T> {
    /// Zero-copy clone sharing the backing buffer
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            offset: self.offset,
            stride: self.stride,
            len: self.len,
        }
    }
}

impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Scalar> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
