//! Element-wise transform primitives shared by the aggregate kernels
//!
//! Every element-wise lift of a scalar operation goes through [`map`] or
//! [`zip_map`]. With the `rayon` feature, slices of at least
//! [`PARALLEL_THRESHOLD`] elements are split into chunks processed in
//! parallel; smaller slices run serially.

use crate::error::Result;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Parallelization threshold: skip Rayon for small aggregates (overhead > benefit)
pub const PARALLEL_THRESHOLD: usize = 4096;

#[cfg(feature = "rayon")]
const CHUNK_SIZE: usize = 4096;

/// dst[k] = f(src[k])
///
/// `src` and `dst` must have the same length. Stops at the first error.
pub fn map<T, F>(src: &[T], dst: &mut [T], f: F) -> Result<()>
where
    T: Send + Sync,
    F: Fn(&T, &mut T) -> Result<()> + Send + Sync,
{
    debug_assert_eq!(src.len(), dst.len());

    #[cfg(feature = "rayon")]
    if src.len() >= PARALLEL_THRESHOLD {
        return dst
            .par_chunks_mut(CHUNK_SIZE)
            .zip(src.par_chunks(CHUNK_SIZE))
            .try_for_each(|(out_chunk, in_chunk)| {
                for (o, i) in out_chunk.iter_mut().zip(in_chunk) {
                    f(i, o)?;
                }
                Ok(())
            });
    }

    // Serial fallback for small aggregates
    for (o, i) in dst.iter_mut().zip(src) {
        f(i, o)?;
    }
    Ok(())
}

/// dst[k] = f(a[k], b[k])
///
/// All three slices must have the same length. Stops at the first error.
pub fn zip_map<T, F>(a: &[T], b: &[T], dst: &mut [T], f: F) -> Result<()>
where
    T: Send + Sync,
    F: Fn(&T, &T, &mut T) -> Result<()> + Send + Sync,
{
    debug_assert_eq!(a.len(), dst.len());
    debug_assert_eq!(b.len(), dst.len());

    #[cfg(feature = "rayon")]
    if dst.len() >= PARALLEL_THRESHOLD {
        return dst
            .par_chunks_mut(CHUNK_SIZE)
            .zip(a.par_chunks(CHUNK_SIZE))
            .zip(b.par_chunks(CHUNK_SIZE))
            .try_for_each(|((out_chunk, a_chunk), b_chunk)| {
                for ((o, x), y) in out_chunk.iter_mut().zip(a_chunk).zip(b_chunk) {
                    f(x, y, o)?;
                }
                Ok(())
            });
    }

    for ((o, x), y) in dst.iter_mut().zip(a).zip(b) {
        f(x, y, o)?;
    }
    Ok(())
}

/// dst[k] = f(dst[k]) in place
pub fn update<T, F>(dst: &mut [T], f: F) -> Result<()>
where
    T: Send + Sync,
    F: Fn(&mut T) -> Result<()> + Send + Sync,
{
    #[cfg(feature = "rayon")]
    if dst.len() >= PARALLEL_THRESHOLD {
        return dst.par_chunks_mut(CHUNK_SIZE).try_for_each(|chunk| {
            for o in chunk.iter_mut() {
                f(o)?;
            }
            Ok(())
        });
    }

    for o in dst.iter_mut() {
        f(o)?;
    }
    Ok(())
}
