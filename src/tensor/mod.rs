//! Aggregate values and their storage
//!
//! This module provides the dense aggregate types built from scalar
//! elements: [`Vector`], [`Matrix`] (row-major) and [`CartesianTensor`]
//! (mixed radix, first axis fastest). All three own a flat [`Storage`]
//! exclusively; `Clone` is a deep copy.

mod core;
mod index;
mod layout;
mod matrix;
mod storage;
mod vector;

pub use core::CartesianTensor;
pub use index::IntegerIndex;
pub use layout::{Dims, Layout, checked_elem_count};
pub use matrix::Matrix;
pub use storage::Storage;
pub use vector::Vector;
