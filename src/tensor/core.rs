//! CartesianTensor: arbitrary-rank aggregate whose axes all share one size

use super::layout::Layout;
use super::matrix::Matrix;
use super::storage::{Storage, outside_extents};
use super::vector::Vector;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::literal::{FromLiteral, parse_literal, write_nested};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Dense Cartesian tensor
///
/// A tensor of rank `n` over `dim_count`-dimensional space holds
/// `dim_count^n` elements addressed by [`Layout`] (first axis fastest). A
/// rank-0 tensor holds exactly one element.
///
/// Every index is covariant. There is no metric, so indices can be lowered
/// (a no-op) but never raised.
///
/// # String form
///
/// The last (slowest) axis is the outermost bracket, so the printed nesting
/// follows storage order:
///
/// ```text
/// rank 0: 3
/// rank 1: [t0,t1]
/// rank 2: [[t00,t10],[t01,t11]]
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CartesianTensor<T: Element> {
    layout: Layout,
    storage: Storage<T>,
}

impl<T: Element> Default for CartesianTensor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> CartesianTensor<T> {
    /// Rank-0 tensor holding zero
    pub fn new() -> Self {
        Self {
            layout: Layout::scalar(),
            storage: Storage::new(1),
        }
    }

    /// Zero tensor of the given rank and per-axis size
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `dim_count^rank` overflows `usize`.
    pub fn with_shape(rank: usize, dim_count: usize) -> Result<Self> {
        let layout = Layout::checked_cartesian(rank, dim_count)?;
        let storage = Storage::new(layout.elem_count());
        Ok(Self { layout, storage })
    }

    /// Zero tensor with explicit per-axis sizes
    ///
    /// # Errors
    ///
    /// Returns `NonCartesianShape` if the sizes differ and `InvalidArgument`
    /// if their product overflows `usize`.
    pub fn from_dims(dims: &[usize]) -> Result<Self> {
        Layout::validate_cartesian(dims)?;
        let layout = Layout::checked(dims)?;
        let storage = Storage::new(layout.elem_count());
        Ok(Self { layout, storage })
    }

    /// Tensor from elements in storage order
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `data.len() != dim_count^rank` and
    /// `InvalidArgument` if that count overflows `usize`.
    pub fn from_vec(rank: usize, dim_count: usize, data: Vec<T>) -> Result<Self> {
        let layout = Layout::checked_cartesian(rank, dim_count)?;
        if data.len() != layout.elem_count() {
            return Err(Error::shape_mismatch(&[layout.elem_count()], &[data.len()]));
        }
        Ok(Self {
            layout,
            storage: Storage::from_vec(data),
        })
    }

    /// Rank-0 tensor holding `value`
    pub fn from_scalar(value: T) -> Self {
        Self {
            layout: Layout::scalar(),
            storage: Storage::from_vec(vec![value]),
        }
    }

    /// Rank-1 tensor with the vector's elements
    pub fn from_vector(v: &Vector<T>) -> Self {
        Self {
            layout: Layout::cartesian(1, v.len()),
            storage: Storage::from_vec(v.as_slice().to_vec()),
        }
    }

    /// Rank-2 tensor with `t[r, c] = m(r, c)`
    ///
    /// # Errors
    ///
    /// Returns `NonCartesianShape` if the matrix is not square.
    pub fn from_matrix(m: &Matrix<T>) -> Result<Self> {
        Layout::validate_cartesian(&m.shape())?;
        let n = m.rows();
        let mut out = Self::with_shape(2, n)?;
        // matrices are row-major, tensors first-axis-fastest
        for r in 0..n {
            for c in 0..n {
                out.storage.as_mut_slice()[r + c * n] = m.at(r, c);
            }
        }
        Ok(out)
    }

    /// Copy a rank-1 tensor into a vector
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the tensor has rank 1.
    pub fn to_vector(&self) -> Result<Vector<T>> {
        if self.rank() != 1 {
            return Err(Error::invalid_argument(
                "tensor",
                format!("expected rank 1, got rank {}", self.rank()),
            ));
        }
        Ok(Vector::from_slice(self.as_slice()))
    }

    /// Copy a rank-2 tensor into a square matrix with `m(r, c) = t[r, c]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the tensor has rank 2.
    pub fn to_matrix(&self) -> Result<Matrix<T>> {
        if self.rank() != 2 {
            return Err(Error::invalid_argument(
                "tensor",
                format!("expected rank 2, got rank {}", self.rank()),
            ));
        }
        let n = self.dim_count();
        let mut m = Matrix::zeros(n, n)?;
        for r in 0..n {
            for c in 0..n {
                *m.at_mut(r, c) = self.as_slice()[r + c * n];
            }
        }
        Ok(m)
    }

    /// Index layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of axes
    #[inline]
    pub fn rank(&self) -> usize {
        self.layout.rank()
    }

    /// Size shared by every axis (0 for rank 0)
    #[inline]
    pub fn dim_count(&self) -> usize {
        self.layout.dim_count()
    }

    /// Per-axis sizes
    #[inline]
    pub fn dims(&self) -> &[usize] {
        self.layout.dims()
    }

    /// Number of stored elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.storage.len()
    }

    /// Elements in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Mutable elements in storage order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Whether `other` has the same per-axis sizes
    #[inline]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.dims() == other.dims()
    }

    /// Element at a multi-index
    pub fn element(&self, index: &[usize]) -> Result<T> {
        self.storage.get(self.layout.index_to_offset(index)?)
    }

    /// Overwrite the element at a multi-index
    pub fn set_element(&mut self, index: &[usize], value: T) -> Result<()> {
        let offset = self.layout.index_to_offset(index)?;
        self.storage.set(offset, value)
    }

    /// Overwrite the element at a multi-index; a zero written outside the
    /// declared extents is a no-op
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` when a non-zero value falls outside the
    /// extents.
    pub fn set_element_safe(&mut self, index: &[usize], value: T) -> Result<()> {
        if !self.layout.contains(index) {
            let size = self.dim_count();
            let bad = index
                .iter()
                .copied()
                .find(|&x| x >= size)
                .unwrap_or(index.len());
            return outside_extents(&value, bad, size);
        }
        self.set_element(index, value)
    }

    /// Set per-axis sizes; storage is reallocated (and zeroed) only when the
    /// element count changes. Returns `true` on reallocation.
    ///
    /// Unchanged dims are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `NonCartesianShape` if the sizes differ and `InvalidArgument`
    /// if their product overflows `usize`.
    pub fn alloc(&mut self, dims: &[usize]) -> Result<bool> {
        Layout::validate_cartesian(dims)?;
        if self.layout.dims() == dims {
            return Ok(false);
        }
        self.layout = Layout::checked(dims)?;
        Ok(self.storage.alloc(self.layout.elem_count()))
    }

    /// Set per-axis sizes and zero every element
    ///
    /// # Errors
    ///
    /// Same as [`alloc`](Self::alloc).
    pub fn init(&mut self, dims: &[usize]) -> Result<()> {
        if !self.alloc(dims)? {
            self.storage.zero_fill();
        }
        Ok(())
    }

    /// [`init`](Self::init) with a Cartesian shape
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `dim_count^rank` overflows `usize`.
    pub fn init_cartesian(&mut self, rank: usize, dim_count: usize) -> Result<()> {
        let layout = Layout::checked_cartesian(rank, dim_count)?;
        if !self.storage.alloc(layout.elem_count()) {
            self.storage.zero_fill();
        }
        self.layout = layout;
        Ok(())
    }

    /// Whether `other` has the same shape
    #[inline]
    pub(crate) fn conforms(&self, other: &Self) -> bool {
        self.same_shape(other)
    }

    /// Take the shape of `other`; contents are unspecified afterwards
    pub(crate) fn conform(&mut self, other: &Self) {
        if self.layout != other.layout {
            self.layout = other.layout.clone();
            self.storage.alloc(self.layout.elem_count());
        }
    }

    /// Reshape to `rank` axes of `dim_count` without clearing reused storage
    pub(crate) fn alloc_cartesian(&mut self, rank: usize, dim_count: usize) -> Result<bool> {
        let layout = Layout::checked_cartesian(rank, dim_count)?;
        if self.layout == layout {
            return Ok(false);
        }
        self.layout = layout;
        Ok(self.storage.alloc(self.layout.elem_count()))
    }

    /// Set every element to zero, keeping the shape
    pub fn zero_fill(&mut self) {
        self.storage.zero_fill();
    }

    /// Deep copy `other` into `self`
    pub fn set(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Deep copy `self` into `other`
    pub fn get(&self, other: &mut Self) {
        other.clone_from(self);
    }
}

impl<T: Element> Hash for CartesianTensor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.rank());
        state.write_usize(self.dim_count());
        for e in self.as_slice() {
            e.hash_element(state);
        }
    }
}

impl<T: Element> fmt::Display for CartesianTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outer_first: Vec<usize> = self.dims().iter().rev().copied().collect();
        write_nested(f, &outer_first, self.as_slice())
    }
}

impl<T: Element> FromStr for CartesianTensor<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let literal = parse_literal(s)?;
        let dims: Vec<usize> = literal.shape.iter().rev().copied().collect();
        Layout::validate_cartesian(&dims)?;
        let layout = Layout::checked(&dims)?;
        let data = literal.elements()?;
        if data.len() != layout.elem_count() {
            return Err(Error::parse(s, "element count does not match shape"));
        }
        Ok(Self {
            layout,
            storage: Storage::from_vec(data),
        })
    }
}

impl<T: Element> FromLiteral for CartesianTensor<T> {
    fn from_literal(input: &str) -> Result<Self> {
        input.parse()
    }
}
