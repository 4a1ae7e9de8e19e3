//! Dense flat storage shared by vectors, matrices and tensors

use crate::dtype::Element;
use crate::error::{Error, Result};

/// Owned, zero-initialized flat element buffer
///
/// Storage is exclusive to one aggregate value; `Clone` is a deep copy.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Storage<T> {
    data: Vec<T>,
}

impl<T: Element> Storage<T> {
    /// Allocate `len` zero elements
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::default(); len],
        }
    }

    /// Wrap an existing buffer
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable elements in storage order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume into the underlying buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Reallocate to `len` zero elements unless the size is unchanged.
    ///
    /// Returns `true` if a new buffer was allocated. When the size is
    /// unchanged the old contents are left in place.
    pub fn alloc(&mut self, len: usize) -> bool {
        if self.data.len() == len {
            return false;
        }
        tracing::trace!(old = self.data.len(), new = len, "reallocating storage");
        self.data = vec![T::default(); len];
        true
    }

    /// Size to `len` elements, all zero
    pub fn init(&mut self, len: usize) {
        if !self.alloc(len) {
            self.zero_fill();
        }
    }

    /// Set every element to zero
    pub fn zero_fill(&mut self) {
        self.data.fill(T::default());
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Element at `offset`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` past the last element.
    #[inline]
    pub fn get(&self, offset: usize) -> Result<T> {
        self.data
            .get(offset)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index: offset,
                size: self.data.len(),
            })
    }

    /// Overwrite the element at `offset`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` past the last element.
    #[inline]
    pub fn set(&mut self, offset: usize, value: T) -> Result<()> {
        let size = self.data.len();
        match self.data.get_mut(offset) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                index: offset,
                size,
            }),
        }
    }

    /// Overwrite the element at `offset`, treating a zero written past the
    /// end as a no-op
    pub fn set_safe(&mut self, offset: usize, value: T) -> Result<()> {
        if offset >= self.data.len() {
            return outside_extents(&value, offset, self.data.len());
        }
        self.set(offset, value)
    }
}

/// Outcome of a safe write that falls outside declared extents: zero is a
/// no-op, anything else is an error.
pub(crate) fn outside_extents<T: Element>(value: &T, index: usize, size: usize) -> Result<()> {
    if value.is_zero() {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, size })
    }
}
