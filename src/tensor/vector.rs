//! Vector: a one-dimensional aggregate (R-module member)

use super::storage::{Storage, outside_extents};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::literal::{FromLiteral, parse_literal, write_nested};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Dense vector of scalar elements
///
/// Prints and parses as `[e0,e1,...]`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Vector<T: Element> {
    storage: Storage<T>,
}

impl<T: Element> Vector<T> {
    /// Empty vector
    pub fn new() -> Self {
        Self {
            storage: Storage::new(0),
        }
    }

    /// Vector of `len` zeros
    pub fn with_len(len: usize) -> Self {
        Self {
            storage: Storage::new(len),
        }
    }

    /// Vector owning `data`
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            storage: Storage::from_vec(data),
        }
    }

    /// Vector copied from `data`
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the vector has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Elements in order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Mutable elements in order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Element `i`
    pub fn element(&self, i: usize) -> Result<T> {
        self.storage.get(i)
    }

    /// Element `i`, or zero past the end (zero extension)
    #[inline]
    pub fn element_or_zero(&self, i: usize) -> T {
        self.as_slice().get(i).copied().unwrap_or_default()
    }

    /// Overwrite element `i`
    pub fn set_element(&mut self, i: usize, value: T) -> Result<()> {
        self.storage.set(i, value)
    }

    /// Overwrite element `i`; a zero written past the end is a no-op
    pub fn set_element_safe(&mut self, i: usize, value: T) -> Result<()> {
        if i >= self.len() {
            return outside_extents(&value, i, self.len());
        }
        self.storage.set(i, value)
    }

    /// Resize to `len` elements; storage is reallocated (and zeroed) only if
    /// the length changes. Returns `true` on reallocation.
    pub fn alloc(&mut self, len: usize) -> bool {
        self.storage.alloc(len)
    }

    /// Resize to `len` elements, all zero
    pub fn init(&mut self, len: usize) {
        self.storage.init(len);
    }

    /// Whether `other` has the same length
    #[inline]
    pub(crate) fn conforms(&self, other: &Self) -> bool {
        self.len() == other.len()
    }

    /// Take the length of `other`, reallocating only when it differs
    #[inline]
    pub(crate) fn conform(&mut self, other: &Self) {
        self.storage.alloc(other.len());
    }

    /// Set every element to zero, keeping the length
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

impl<T: Element> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for e in self.as_slice() {
            e.hash_element(state);
        }
    }
}

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, &[self.len()], self.as_slice())
    }
}

impl<T: Element> FromStr for Vector<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let literal = parse_literal(s)?;
        if literal.rank() != 1 {
            return Err(Error::parse(
                s,
                format!("expected a rank-1 list, found rank {}", literal.rank()),
            ));
        }
        Ok(Self::from_vec(literal.elements()?))
    }
}

impl<T: Element> FromLiteral for Vector<T> {
    fn from_literal(input: &str) -> Result<Self> {
        input.parse()
    }
}
