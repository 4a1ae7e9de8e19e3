//! Shared boilerplate for the packed-component scalar records

/// Implement constructors, deep copy, `Element`, `Components`, hashing,
/// formatting, parsing and componentwise operators for a `#[repr(C)]`
/// record of `f64` fields.
///
/// The first field must be the real component `r`.
macro_rules! impl_scalar_value {
    ($name:ident, $kind:ident, $count:literal, [$($field:ident),+]) => {
        impl $name {
            /// Zero value
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            /// Create a value from its components, real component first
            #[inline]
            pub const fn new($($field: f64),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a value with only a real component
            #[inline]
            pub const fn from_real(r: f64) -> Self {
                let mut out = Self::ZERO;
                out.r = r;
                out
            }

            /// Deep copy `other` into `self`
            #[inline]
            pub fn set(&mut self, other: &Self) {
                *self = *other;
            }

            /// Deep copy `self` into `other`
            #[inline]
            pub fn get(&self, other: &mut Self) {
                *other = *self;
            }
        }

        impl crate::dtype::Element for $name {
            const KIND: crate::dtype::ScalarKind = crate::dtype::ScalarKind::$kind;

            #[inline]
            fn is_zero(&self) -> bool {
                true $(&& self.$field == 0.0)+
            }

            fn from_components(values: &[f64]) -> crate::error::Result<Self> {
                <Self as crate::dtype::Components>::from_component_slice(values)
            }

            #[inline]
            fn hash_element<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self, state);
            }
        }

        impl crate::dtype::Components for $name {
            const COUNT: usize = $count;
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                crate::dtype::hash_components(
                    <Self as crate::dtype::Components>::components(self),
                    state,
                );
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("(")?;
                let parts = [$(self.$field),+];
                for (n, c) in parts.iter().enumerate() {
                    if n > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", c)?;
                }
                f.write_str(")")
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::Error;

            fn from_str(s: &str) -> crate::error::Result<Self> {
                crate::literal::parse_scalar(s)
            }
        }

        impl crate::literal::FromLiteral for $name {
            fn from_literal(input: &str) -> crate::error::Result<Self> {
                crate::literal::parse_scalar(input)
            }
        }

        impl From<f64> for $name {
            #[inline]
            fn from(r: f64) -> Self {
                Self::from_real(r)
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        /// Scaling by a real factor; products of two values live in the
        /// algebra kernels
        impl std::ops::Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f64) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }
    };
}

pub(crate) use impl_scalar_value;
