//! Numeric helpers shared across the scalar and aggregate kernels.

pub mod norm;
pub mod power;
pub mod rounding;
pub mod scaling;
pub mod sinc;
pub mod transform;

pub use norm::{max_abs, scaled_norm};
pub use power::{repeat_multiply, signed_power};
pub use rounding::{round_components, round_to, validate_delta};
pub use scaling::{big_rational, power_of_one_half, power_of_two, scale_components, scale_exact};
pub use sinc::{sinc_pi, sinhc_pi};
pub use transform::{PARALLEL_THRESHOLD, map, update, zip_map};
