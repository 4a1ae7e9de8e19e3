//! Delegated algorithms
//!
//! Kernels in [`crate::ops::aggregate`] stay thin and hand the numerically
//! involved work to this module:
//!
//! - [`linalg`] - LU determinant and Gauss-Jordan inverse with partial
//!   pivoting, generic over the element kernel
//! - [`matrix_functions_core`] - fixed-term series for `exp`, `log`,
//!   `sin`/`cos` and `sinh`/`cosh` over any ring kernel
//! - [`tensor_power`] - repeated tensor products with an up-front size check

pub mod linalg;
pub mod matrix_functions_core;
pub mod tensor_power;
