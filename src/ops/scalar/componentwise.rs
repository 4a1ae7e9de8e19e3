//! Shared implementation of the componentwise kernel traits

/// Implement every trait whose semantics are independent per component:
/// construction, the additive group, conjugation, norm, real/unreal split,
/// rounding, random fill, special values, tolerance, scaling and named
/// constants.
macro_rules! impl_componentwise_kernel {
    ($kernel:ident, $value:ty, $name:literal) => {
        impl $crate::ops::traits::Algebra for $kernel {
            type Value = $value;

            fn kind_name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn zero(&self, out: &mut $value) {
                *out = <$value>::default();
            }

            #[inline]
            fn is_zero(&self, a: &$value) -> bool {
                $crate::dtype::Element::is_zero(a)
            }
        }

        impl $crate::ops::traits::AdditiveGroup for $kernel {
            fn add(&self, a: &$value, b: &$value, out: &mut $value) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                let (a, b) = (a.components(), b.components());
                for (k, o) in out.components_mut().iter_mut().enumerate() {
                    *o = a[k] + b[k];
                }
                Ok(())
            }

            fn subtract(
                &self,
                a: &$value,
                b: &$value,
                out: &mut $value,
            ) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                let (a, b) = (a.components(), b.components());
                for (k, o) in out.components_mut().iter_mut().enumerate() {
                    *o = a[k] - b[k];
                }
                Ok(())
            }

            fn negate(&self, a: &$value, out: &mut $value) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                for (o, x) in out.components_mut().iter_mut().zip(a.components()) {
                    *o = -x;
                }
                Ok(())
            }
        }

        impl $crate::ops::traits::Conjugate for $kernel {
            fn conjugate(&self, a: &$value, out: &mut $value) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                for (k, (o, x)) in out.components_mut().iter_mut().zip(a.components()).enumerate() {
                    *o = if k == 0 { *x } else { -x };
                }
                Ok(())
            }
        }

        impl $crate::ops::traits::Norm for $kernel {
            #[inline]
            fn norm(&self, a: &$value) -> f64 {
                use $crate::dtype::Components;
                $crate::ops::common::scaled_norm(a.components().iter().copied())
            }
        }

        impl $crate::ops::traits::RealUnreal for $kernel {
            #[inline]
            fn real_part(&self, a: &$value) -> f64 {
                use $crate::dtype::Components;
                a.components()[0]
            }

            fn unreal_part(&self, a: &$value, out: &mut $value) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                *out = *a;
                out.components_mut()[0] = 0.0;
                Ok(())
            }
        }

        impl $crate::ops::traits::Rounding for $kernel {
            fn round(
                &self,
                mode: $crate::ops::traits::RoundingMode,
                delta: f64,
                a: &$value,
                out: &mut $value,
            ) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                $crate::ops::common::round_components(
                    mode,
                    delta,
                    a.components(),
                    out.components_mut(),
                )
            }
        }

        impl $crate::ops::traits::Random for $kernel {
            fn random(&self, out: &mut $value) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                use rand::Rng;
                let mut rng = rand::rng();
                for c in out.components_mut() {
                    *c = rng.random::<f64>();
                }
                Ok(())
            }
        }

        impl $crate::ops::traits::NanOps for $kernel {
            fn nan(&self, out: &mut $value) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                out.components_mut().fill(f64::NAN);
                Ok(())
            }

            #[inline]
            fn is_nan(&self, a: &$value) -> bool {
                $crate::dtype::Components::any_nan(a)
            }
        }

        impl $crate::ops::traits::InfiniteOps for $kernel {
            fn infinite(&self, out: &mut $value) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                out.components_mut().fill(f64::INFINITY);
                Ok(())
            }

            #[inline]
            fn is_infinite(&self, a: &$value) -> bool {
                $crate::dtype::Components::any_infinite(a)
            }
        }

        impl $crate::ops::traits::Tolerance for $kernel {
            fn within(&self, tol: f64, a: &$value, b: &$value) -> bool {
                use $crate::dtype::Components;
                a.components()
                    .iter()
                    .zip(b.components())
                    .all(|(x, y)| x == y || (x - y).abs() <= tol)
            }
        }

        impl $crate::ops::traits::Scaling for $kernel {
            fn scale_by_high_prec(
                &self,
                factor: &num_rational::BigRational,
                a: &$value,
                out: &mut $value,
            ) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                $crate::ops::common::scale_components(factor, a.components(), out.components_mut());
                Ok(())
            }

            fn scale_by_rational(
                &self,
                factor: &num_rational::Rational64,
                a: &$value,
                out: &mut $value,
            ) -> $crate::error::Result<()> {
                let factor = $crate::ops::common::big_rational(factor);
                self.scale_by_high_prec(&factor, a, out)
            }

            fn scale_by_double(
                &self,
                factor: f64,
                a: &$value,
                out: &mut $value,
            ) -> $crate::error::Result<()> {
                use $crate::dtype::Components;
                for (o, x) in out.components_mut().iter_mut().zip(a.components()) {
                    *o = x * factor;
                }
                Ok(())
            }

            fn scale_by_one_half(
                &self,
                n: u32,
                a: &$value,
                out: &mut $value,
            ) -> $crate::error::Result<()> {
                self.scale_by_high_prec(&$crate::ops::common::power_of_one_half(n), a, out)
            }

            fn scale_by_two(&self, n: u32, a: &$value, out: &mut $value) -> $crate::error::Result<()> {
                self.scale_by_high_prec(&$crate::ops::common::power_of_two(n), a, out)
            }
        }

        impl $crate::ops::traits::Constants for $kernel {
            fn pi(&self, out: &mut $value) {
                *out = <$value>::from(std::f64::consts::PI);
            }

            fn e(&self, out: &mut $value) {
                *out = <$value>::from(std::f64::consts::E);
            }

            fn gamma(&self, out: &mut $value) {
                *out = <$value>::from($crate::dtype::EULER_GAMMA);
            }

            fn phi(&self, out: &mut $value) {
                *out = <$value>::from($crate::dtype::GOLDEN_RATIO);
            }
        }
    };
}

pub(crate) use impl_componentwise_kernel;
