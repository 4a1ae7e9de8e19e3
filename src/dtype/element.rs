//! Element trait for mapping Rust scalar types to ScalarKind

use super::ScalarKind;
use crate::error::{Error, Result};
use bytemuck::Pod;
use std::fmt;
use std::hash::Hasher;

/// Trait for scalar values that can be elements of a vector, matrix or tensor
///
/// This trait connects Rust's type system to numtower's scalar kinds.
/// `Default` must produce the zero value of the kind; aggregate storage relies
/// on it when allocating and zero-filling.
pub trait Element:
    Copy + Default + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The scalar kind of this Rust type
    const KIND: ScalarKind;

    /// Whether this value is the additive identity
    fn is_zero(&self) -> bool;

    /// Build a value from a list of decimal components, as produced by the
    /// literal reader.
    ///
    /// Missing trailing components are zero. Components beyond the kind's
    /// count are accepted only when they are zero.
    fn from_components(values: &[f64]) -> Result<Self>;

    /// Feed this value into `state` consistently with `PartialEq`
    ///
    /// Aggregates hash their elements through this, so any element type
    /// makes a hashable vector, matrix or tensor.
    fn hash_element<H: Hasher>(&self, state: &mut H);
}

/// Scalar values made of a fixed number of packed `f64` components
///
/// The component view is a zero-copy cast through bytemuck, so implementors
/// must be `#[repr(C)]` records of `f64` fields (or `f64` itself).
pub trait Components: Element + Pod {
    /// Number of float64 components
    const COUNT: usize;

    /// View the components as a slice, real component first
    #[inline]
    fn components(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Mutable view of the components
    #[inline]
    fn components_mut(&mut self) -> &mut [f64] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// Component at `index`, or 0 when `index` is past the last component
    #[inline]
    fn component(&self, index: usize) -> f64 {
        self.components().get(index).copied().unwrap_or(0.0)
    }

    /// Set component at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= COUNT`.
    fn set_component(&mut self, index: usize, value: f64) -> Result<()> {
        match self.components_mut().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                index,
                size: Self::COUNT,
            }),
        }
    }

    /// Set component at `index`, treating a zero written past the last
    /// component as a no-op
    ///
    /// This lets converters between kinds probe a wider component range
    /// without failing on zero padding.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if a non-zero value is written past the last
    /// component.
    fn set_component_safe(&mut self, index: usize, value: f64) -> Result<()> {
        if index >= Self::COUNT {
            if value == 0.0 {
                return Ok(());
            }
            return Err(Error::IndexOutOfBounds {
                index,
                size: Self::COUNT,
            });
        }
        self.set_component(index, value)
    }

    /// Build a value from components using safe-set semantics
    fn from_component_slice(values: &[f64]) -> Result<Self> {
        let mut out = Self::default();
        for (i, &v) in values.iter().enumerate() {
            out.set_component_safe(i, v)?;
        }
        Ok(out)
    }

    /// Whether any component is NaN
    #[inline]
    fn any_nan(&self) -> bool {
        self.components().iter().any(|c| c.is_nan())
    }

    /// Whether no component is NaN and at least one is infinite
    #[inline]
    fn any_infinite(&self) -> bool {
        !self.any_nan() && self.components().iter().any(|c| c.is_infinite())
    }
}

/// Feed components into a hasher consistently with `PartialEq`
///
/// `0.0` and `-0.0` compare equal and therefore hash equal; every NaN hashes
/// to the same value.
pub fn hash_components<H: Hasher>(components: &[f64], state: &mut H) {
    for &c in components {
        let bits = if c == 0.0 {
            0u64
        } else if c.is_nan() {
            f64::NAN.to_bits()
        } else {
            c.to_bits()
        };
        state.write_u64(bits);
    }
}

impl Element for f64 {
    const KIND: ScalarKind = ScalarKind::Real;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        Self::from_component_slice(values)
    }

    #[inline]
    fn hash_element<H: Hasher>(&self, state: &mut H) {
        hash_components(self.components(), state);
    }
}

impl Components for f64 {
    const COUNT: usize = 1;
}

impl Element for bool {
    const KIND: ScalarKind = ScalarKind::Boolean;

    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }

    fn from_components(values: &[f64]) -> Result<Self> {
        if let Some(index) = values.iter().skip(1).position(|&v| v != 0.0) {
            return Err(Error::IndexOutOfBounds {
                index: index + 1,
                size: 1,
            });
        }
        Ok(values.first().is_some_and(|&v| v != 0.0))
    }

    #[inline]
    fn hash_element<H: Hasher>(&self, state: &mut H) {
        state.write_u8(u8::from(*self));
    }
}
