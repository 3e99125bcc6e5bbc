//! Storage: typed backing buffers with Arc-based sharing
//!
//! A [`Storage`] wraps a heap allocation with reference counting, enabling
//! zero-copy views (sub-matrices, rows, columns, diagonals, transposes)
//! that share the underlying buffer. Memory is deallocated when the last
//! reference is dropped.
//!
//! Mutation goes through a shared handle: writing through any view writes
//! the backing store. This aliasing is part of the container contract; the
//! library itself is single-threaded per operation, and callers must not
//! mutate a view's backing store from another thread during an in-place
//! operation.

use std::sync::Arc;

/// Reference-counted typed buffer shared by containers and their views
pub struct Storage<T> {
    inner: Arc<StorageInner<T>>,
}

struct StorageInner<T> {
    /// Raw allocation, originally a `Box<[T]>`
    ptr: *mut T,
    /// Number of elements
    len: usize,
}

// The buffer is plain data behind an Arc; cross-thread mutation discipline
// is the caller's responsibility per the aliasing contract above.
unsafe impl<T: Send + Sync> Send for StorageInner<T> {}
unsafe impl<T: Send + Sync> Sync for StorageInner<T> {}

impl<T: Copy> Storage<T> {
    /// Create storage owning the given elements
    pub fn from_vec(data: Vec<T>) -> Self {
        let boxed = data.into_boxed_slice();
        let len = boxed.len();
        let ptr = Box::into_raw(boxed) as *mut T;
        Self {
            inner: Arc::new(StorageInner { ptr, len }),
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Number of handles sharing this buffer
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Read the element at a flat index
    #[inline]
    pub(crate) fn get(&self, index: usize) -> T {
        debug_assert!(index < self.inner.len);
        // SAFETY: index is within the allocation; elements are Copy and
        // always initialized.
        unsafe { *self.inner.ptr.add(index) }
    }

    /// Write the element at a flat index
    ///
    /// Takes `&self`: the buffer is shared between views by design, and
    /// mutation through any handle is the view contract.
    #[inline]
    pub(crate) fn set(&self, index: usize, value: T) {
        debug_assert!(index < self.inner.len);
        // SAFETY: index is within the allocation; single-threaded use per
        // the module-level aliasing contract.
        unsafe { *self.inner.ptr.add(index) = value }
    }

    /// View the whole buffer as a slice
    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: ptr/len describe a live allocation of initialized elements.
        unsafe { std::slice::from_raw_parts(self.inner.ptr, self.inner.len) }
    }

    /// View the whole buffer as a mutable slice
    ///
    /// # Safety
    ///
    /// The caller must ensure no other slice or element access overlaps this
    /// borrow. Used by the contiguous fast paths of in-place kernels, which
    /// hold it only for the duration of a single loop.
    #[inline]
    pub(crate) unsafe fn as_mut_slice(&self) -> &mut [T] {
        std::slice::from_raw_parts_mut(self.inner.ptr, self.inner.len)
    }
}

impl<T> Clone for Storage<T> {
    /// Clone increments the reference count (zero-copy)
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Drop for StorageInner<T> {
    fn drop(&mut self) {
        // SAFETY: ptr/len came from Box::into_raw of a Box<[T]>.
        unsafe {
            drop(Box::from_raw(std::slice::from_raw_parts_mut(
                self.ptr, self.len,
            )));
        }
    }
}

impl<T: Copy + std::fmt::Debug> std::fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.inner.len)
            .field("refs", &self.ref_count())
            .finish()
    }
}
