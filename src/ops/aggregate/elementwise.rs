//! Traits every aggregate kernel lifts element by element

use crate::dtype::ScalarKind;

/// Aggregate shape family, used to name aggregate kinds
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Family {
    Vector,
    Matrix,
    Tensor,
}

/// Human-readable name such as `"quaternion matrix"`
pub(crate) const fn aggregate_name(kind: ScalarKind, family: Family) -> &'static str {
    use ScalarKind as K;
    match (family, kind) {
        (Family::Vector, K::Boolean) => "boolean vector",
        (Family::Vector, K::Real) => "real vector",
        (Family::Vector, K::Complex) => "complex vector",
        (Family::Vector, K::Quaternion) => "quaternion vector",
        (Family::Vector, K::Octonion) => "octonion vector",
        (Family::Matrix, K::Boolean) => "boolean matrix",
        (Family::Matrix, K::Real) => "real matrix",
        (Family::Matrix, K::Complex) => "complex matrix",
        (Family::Matrix, K::Quaternion) => "quaternion matrix",
        (Family::Matrix, K::Octonion) => "octonion matrix",
        (Family::Tensor, K::Boolean) => "boolean tensor",
        (Family::Tensor, K::Real) => "real tensor",
        (Family::Tensor, K::Complex) => "complex tensor",
        (Family::Tensor, K::Quaternion) => "quaternion tensor",
        (Family::Tensor, K::Octonion) => "octonion tensor",
    }
}

/// Implement the shape-preserving traits of an aggregate kernel
/// `$kernel<A>` whose value is `$value<A::Value>`.
///
/// The value type must provide `as_slice`, `as_mut_slice`, `zero_fill` and
/// `conform` (take another value's shape). Every generated impl requires
/// only the matching scalar capability, so e.g. a boolean vector gets
/// `Conjugate` but not `Rounding`.
macro_rules! impl_elementwise_ops {
    ($kernel:ident, $value:ident, $family:ident) => {
        impl<A> $crate::ops::traits::Algebra for $kernel<A>
        where
            A: $crate::ops::traits::Algebra,
            A::Value: $crate::dtype::Element,
        {
            type Value = $value<A::Value>;

            fn kind_name(&self) -> &'static str {
                $crate::ops::aggregate::elementwise::aggregate_name(
                    <A::Value as $crate::dtype::Element>::KIND,
                    $crate::ops::aggregate::elementwise::Family::$family,
                )
            }

            fn zero(&self, out: &mut Self::Value) {
                out.zero_fill();
            }

            fn is_zero(&self, a: &Self::Value) -> bool {
                a.as_slice().iter().all(|e| self.scalar.is_zero(e))
            }
        }

        impl<A> $crate::ops::traits::Conjugate for $kernel<A>
        where
            A: $crate::ops::traits::Conjugate,
            A::Value: $crate::dtype::Element,
        {
            fn conjugate(&self, a: &Self::Value, out: &mut Self::Value) -> $crate::error::Result<()> {
                out.conform(a);
                $crate::ops::common::map(a.as_slice(), out.as_mut_slice(), |x, o| {
                    self.scalar.conjugate(x, o)
                })
            }
        }

        /// Euclidean (Frobenius) norm over every component of every element
        impl<A> $crate::ops::traits::Norm for $kernel<A>
        where
            A: $crate::ops::traits::Norm,
            A::Value: $crate::dtype::Element,
        {
            fn norm(&self, a: &Self::Value) -> f64 {
                $crate::ops::common::scaled_norm(a.as_slice().iter().map(|e| self.scalar.norm(e)))
            }
        }

        impl<A> $crate::ops::traits::Rounding for $kernel<A>
        where
            A: $crate::ops::traits::Rounding,
            A::Value: $crate::dtype::Element,
        {
            fn round(
                &self,
                mode: $crate::ops::traits::RoundingMode,
                delta: f64,
                a: &Self::Value,
                out: &mut Self::Value,
            ) -> $crate::error::Result<()> {
                $crate::ops::common::validate_delta(delta)?;
                out.conform(a);
                $crate::ops::common::map(a.as_slice(), out.as_mut_slice(), |x, o| {
                    self.scalar.round(mode, delta, x, o)
                })
            }
        }

        impl<A> $crate::ops::traits::Random for $kernel<A>
        where
            A: $crate::ops::traits::Random,
            A::Value: $crate::dtype::Element,
        {
            fn random(&self, out: &mut Self::Value) -> $crate::error::Result<()> {
                $crate::ops::common::update(out.as_mut_slice(), |o| self.scalar.random(o))
            }
        }

        impl<A> $crate::ops::traits::NanOps for $kernel<A>
        where
            A: $crate::ops::traits::NanOps,
            A::Value: $crate::dtype::Element,
        {
            fn nan(&self, out: &mut Self::Value) -> $crate::error::Result<()> {
                $crate::ops::common::update(out.as_mut_slice(), |o| self.scalar.nan(o))
            }

            fn is_nan(&self, a: &Self::Value) -> bool {
                a.as_slice().iter().any(|e| self.scalar.is_nan(e))
            }
        }

        impl<A> $crate::ops::traits::InfiniteOps for $kernel<A>
        where
            A: $crate::ops::traits::InfiniteOps + $crate::ops::traits::NanOps,
            A::Value: $crate::dtype::Element,
        {
            fn infinite(&self, out: &mut Self::Value) -> $crate::error::Result<()> {
                $crate::ops::common::update(out.as_mut_slice(), |o| self.scalar.infinite(o))
            }

            fn is_infinite(&self, a: &Self::Value) -> bool {
                let elems = a.as_slice();
                !elems.iter().any(|e| self.scalar.is_nan(e))
                    && elems.iter().any(|e| self.scalar.is_infinite(e))
            }
        }

        impl<A> $crate::ops::traits::Tolerance for $kernel<A>
        where
            A: $crate::ops::traits::Tolerance,
            A::Value: $crate::dtype::Element,
        {
            /// Values of different shapes are never within tolerance
            fn within(&self, tol: f64, a: &Self::Value, b: &Self::Value) -> bool {
                a.conforms(b)
                    && a.as_slice()
                        .iter()
                        .zip(b.as_slice())
                        .all(|(x, y)| self.scalar.within(tol, x, y))
            }
        }

        impl<A> $crate::ops::traits::Scaling for $kernel<A>
        where
            A: $crate::ops::traits::Scaling,
            A::Value: $crate::dtype::Element,
        {
            fn scale_by_high_prec(
                &self,
                factor: &num_rational::BigRational,
                a: &Self::Value,
                out: &mut Self::Value,
            ) -> $crate::error::Result<()> {
                out.conform(a);
                $crate::ops::common::map(a.as_slice(), out.as_mut_slice(), |x, o| {
                    self.scalar.scale_by_high_prec(factor, x, o)
                })
            }

            fn scale_by_rational(
                &self,
                factor: &num_rational::Rational64,
                a: &Self::Value,
                out: &mut Self::Value,
            ) -> $crate::error::Result<()> {
                let factor = $crate::ops::common::big_rational(factor);
                self.scale_by_high_prec(&factor, a, out)
            }

            fn scale_by_double(
                &self,
                factor: f64,
                a: &Self::Value,
                out: &mut Self::Value,
            ) -> $crate::error::Result<()> {
                out.conform(a);
                $crate::ops::common::map(a.as_slice(), out.as_mut_slice(), |x, o| {
                    self.scalar.scale_by_double(factor, x, o)
                })
            }

            fn scale_by_one_half(
                &self,
                n: u32,
                a: &Self::Value,
                out: &mut Self::Value,
            ) -> $crate::error::Result<()> {
                self.scale_by_high_prec(&$crate::ops::common::power_of_one_half(n), a, out)
            }

            fn scale_by_two(
                &self,
                n: u32,
                a: &Self::Value,
                out: &mut Self::Value,
            ) -> $crate::error::Result<()> {
                self.scale_by_high_prec(&$crate::ops::common::power_of_two(n), a, out)
            }
        }
    };
}

pub(crate) use impl_elementwise_ops;
