//! Matrix: a two-dimensional aggregate stored row-major

use super::layout::checked_elem_count;
use super::storage::{Storage, outside_extents};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::literal::{FromLiteral, parse_literal, write_nested};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Dense `rows × cols` matrix of scalar elements
///
/// Element `(r, c)` lives at flat offset `r * cols + c`. Prints and parses as
/// `[[r0c0,r0c1],[r1c0,r1c1]]`.
///
/// A matrix with no rows prints as `[]`, which reads back as 0×0: the column
/// count of a `0 × n` matrix does not survive the string form. An `n × 0`
/// matrix prints as `n` empty rows and round-trips exactly.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Matrix<T: Element> {
    rows: usize,
    cols: usize,
    storage: Storage<T>,
}

impl<T: Element> Matrix<T> {
    /// Empty 0×0 matrix
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            storage: Storage::new(0),
        }
    }

    /// `rows × cols` zero matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_elem_count(&[rows, cols])?;
        Ok(Self {
            rows,
            cols,
            storage: Storage::new(len),
        })
    }

    /// Matrix from row-major data
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `data.len() != rows * cols` and
    /// `InvalidArgument` if that product overflows `usize`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = checked_elem_count(&[rows, cols])?;
        if data.len() != len {
            return Err(Error::shape_mismatch(&[len], &[data.len()]));
        }
        Ok(Self {
            rows,
            cols,
            storage: Storage::from_vec(data),
        })
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

    /// `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Whether rows == cols
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Elements in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Mutable elements in row-major order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    fn offset(&self, r: usize, c: usize) -> Result<usize> {
        if r >= self.rows {
            return Err(Error::IndexOutOfBounds {
                index: r,
                size: self.rows,
            });
        }
        if c >= self.cols {
            return Err(Error::IndexOutOfBounds {
                index: c,
                size: self.cols,
            });
        }
        Ok(r * self.cols + c)
    }

    /// Element at row `r`, column `c`
    pub fn element(&self, r: usize, c: usize) -> Result<T> {
        self.storage.get(self.offset(r, c)?)
    }

    /// Unchecked-shape element access for kernels that already validated
    /// the extents
    #[inline]
    pub(crate) fn at(&self, r: usize, c: usize) -> T {
        self.as_slice()[r * self.cols + c]
    }

    /// Mutable element access for kernels that already validated extents
    #[inline]
    pub(crate) fn at_mut(&mut self, r: usize, c: usize) -> &mut T {
        let cols = self.cols;
        &mut self.as_mut_slice()[r * cols + c]
    }

    /// Overwrite element `(r, c)`
    pub fn set_element(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        let offset = self.offset(r, c)?;
        self.storage.set(offset, value)
    }

    /// Overwrite element `(r, c)`; a zero written outside the extents is a
    /// no-op
    pub fn set_element_safe(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        if r >= self.rows {
            return outside_extents(&value, r, self.rows);
        }
        if c >= self.cols {
            return outside_extents(&value, c, self.cols);
        }
        self.set_element(r, c, value)
    }

    /// Reshape to `rows × cols`; storage is reallocated (and zeroed) only
    /// when the element count changes. Returns `true` on reallocation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `rows * cols` overflows `usize`; the
    /// matrix is left unchanged.
    pub fn alloc(&mut self, rows: usize, cols: usize) -> Result<bool> {
        let len = checked_elem_count(&[rows, cols])?;
        self.rows = rows;
        self.cols = cols;
        Ok(self.storage.alloc(len))
    }

    /// Reshape to `rows × cols`, all zero
    ///
    /// # Errors
    ///
    /// Same as [`alloc`](Self::alloc).
    pub fn init(&mut self, rows: usize, cols: usize) -> Result<()> {
        let len = checked_elem_count(&[rows, cols])?;
        self.rows = rows;
        self.cols = cols;
        self.storage.init(len);
        Ok(())
    }

    /// Whether `other` has the same shape
    #[inline]
    pub(crate) fn conforms(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// Take the shape of `other`, reallocating only when the element count
    /// differs
    #[inline]
    pub(crate) fn conform(&mut self, other: &Self) {
        self.rows = other.rows;
        self.cols = other.cols;
        self.storage.alloc(other.storage.len());
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

impl<T: Element> Hash for Matrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.rows);
        state.write_usize(self.cols);
        for e in self.as_slice() {
            e.hash_element(state);
        }
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return f.write_str("[]");
        }
        write_nested(f, &[self.rows, self.cols], self.as_slice())
    }
}

impl<T: Element> FromStr for Matrix<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let literal = parse_literal(s)?;
        match literal.shape.as_slice() {
            [0] => Ok(Self::new()),
            &[rows, cols] => Self::from_vec(rows, cols, literal.elements()?),
            other => Err(Error::parse(
                s,
                format!("expected a rank-2 list, found shape {:?}", other),
            )),
        }
    }
}

impl<T: Element> FromLiteral for Matrix<T> {
    fn from_literal(input: &str) -> Result<Self> {
        input.parse()
    }
}
