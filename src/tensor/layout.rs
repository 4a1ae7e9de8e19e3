//! Layout: per-axis dimensions and the multipliers that map a multi-index to
//! a flat storage offset

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Per-axis sizes (or per-axis multipliers)
pub type Dims = SmallVec<[usize; STACK_DIMS]>;

/// Layout describes how a multi-index addresses flat storage
///
/// The first axis varies fastest (mixed radix):
///
/// ```text
/// offset = x0 + x1*d0 + x2*d0*d1 + ... = Σ xi · Π(j<i) dj
/// ```
///
/// The multipliers `Π(j<i) dj` are recomputed whenever the dims change, so they
/// always agree with `dims`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Layout {
    dims: Dims,
    multipliers: Dims,
}

impl Layout {
    /// Create a layout from explicit per-axis sizes
    ///
    /// # Example
    /// ```
    /// use numtower::tensor::Layout;
    /// let layout = Layout::new(&[2, 3, 4]);
    /// assert_eq!(layout.multipliers(), &[1, 2, 6]);
    /// assert_eq!(layout.elem_count(), 24);
    /// ```
    pub fn new(dims: &[usize]) -> Self {
        let dims: Dims = dims.iter().copied().collect();
        let multipliers = Self::compute_multipliers(&dims);
        Self { dims, multipliers }
    }

    /// Create a Cartesian layout: `rank` axes each of size `dim_count`
    pub fn cartesian(rank: usize, dim_count: usize) -> Self {
        let dims: Dims = std::iter::repeat(dim_count).take(rank).collect();
        let multipliers = Self::compute_multipliers(&dims);
        Self { dims, multipliers }
    }

    /// [`new`](Self::new), rejecting sizes whose element count overflows
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the product of `dims` exceeds `usize`.
    pub fn checked(dims: &[usize]) -> Result<Self> {
        checked_elem_count(dims)?;
        Ok(Self::new(dims))
    }

    /// [`cartesian`](Self::cartesian), rejecting shapes whose element count
    /// overflows
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `dim_count^rank` exceeds `usize`.
    pub fn checked_cartesian(rank: usize, dim_count: usize) -> Result<Self> {
        let layout = Self::cartesian(rank, dim_count);
        checked_elem_count(layout.dims())?;
        Ok(layout)
    }

    /// Create a scalar (rank-0) layout with exactly one element
    pub fn scalar() -> Self {
        Self::default()
    }

    fn compute_multipliers(dims: &[usize]) -> Dims {
        let mut multipliers = Dims::with_capacity(dims.len());
        let mut m = 1usize;
        for &d in dims {
            multipliers.push(m);
            m = m.saturating_mul(d);
        }
        multipliers
    }

    /// Check that all per-axis sizes are equal
    ///
    /// # Errors
    ///
    /// Returns `NonCartesianShape` if any axis differs from the first.
    pub fn validate_cartesian(dims: &[usize]) -> Result<()> {
        match dims.split_first() {
            Some((first, rest)) if rest.iter().any(|d| d != first) => {
                Err(Error::NonCartesianShape {
                    dims: dims.to_vec(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Per-axis sizes
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Per-axis multipliers
    #[inline]
    pub fn multipliers(&self) -> &[usize] {
        &self.multipliers
    }

    /// Number of axes
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Size along `axis`
    #[inline]
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.dims.get(axis).copied()
    }

    /// Size shared by every axis of a Cartesian layout (0 for rank 0)
    #[inline]
    pub fn dim_count(&self) -> usize {
        self.dims.first().copied().unwrap_or(0)
    }

    /// Whether every axis has the same size
    pub fn is_cartesian(&self) -> bool {
        Self::validate_cartesian(&self.dims).is_ok()
    }

    /// Total number of elements (1 for rank 0)
    ///
    /// Saturates at `usize::MAX`; layouts built through
    /// [`checked`](Self::checked) never reach it.
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.dims.iter().fold(1, |n, &d| n.saturating_mul(d))
    }

    /// Whether the layout is rank 0
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    fn check_rank(&self, index: &[usize]) -> Result<()> {
        if index.len() != self.rank() {
            return Err(Error::invalid_argument(
                "index",
                format!(
                    "index has {} coordinates, layout has rank {}",
                    index.len(),
                    self.rank()
                ),
            ));
        }
        Ok(())
    }

    /// Whether `index` lies inside the declared extents
    pub fn contains(&self, index: &[usize]) -> bool {
        index.len() == self.rank() && index.iter().zip(&self.dims).all(|(x, d)| x < d)
    }

    /// Convert a multi-index into a flat offset
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the index has the wrong rank and
    /// `IndexOutOfBounds` if any coordinate exceeds its axis.
    pub fn index_to_offset(&self, index: &[usize]) -> Result<usize> {
        self.check_rank(index)?;
        let mut offset = 0;
        for ((&x, &d), &m) in index.iter().zip(&self.dims).zip(&self.multipliers) {
            if x >= d {
                return Err(Error::IndexOutOfBounds { index: x, size: d });
            }
            offset += x * m;
        }
        Ok(offset)
    }

    /// Convert a flat offset back into a multi-index, most significant axis
    /// first
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `offset` is past the last element.
    pub fn offset_to_index(&self, offset: usize, index: &mut [usize]) -> Result<()> {
        self.check_rank(index)?;
        let count = self.elem_count();
        if offset >= count {
            return Err(Error::IndexOutOfBounds {
                index: offset,
                size: count,
            });
        }
        let mut rem = offset;
        for axis in (0..self.rank()).rev() {
            let m = self.multipliers[axis];
            index[axis] = rem / m;
            rem %= m;
        }
        Ok(())
    }
}

/// Product of `dims` (1 when empty)
///
/// # Errors
///
/// Returns `InvalidArgument` if the product exceeds `usize`.
pub fn checked_elem_count(dims: &[usize]) -> Result<usize> {
    dims.iter()
        .try_fold(1usize, |n, &d| n.checked_mul(d))
        .ok_or_else(|| {
            Error::invalid_argument("dims", format!("element count of {:?} overflows usize", dims))
        })
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("dims", &self.dims.as_slice())
            .field("multipliers", &self.multipliers.as_slice())
            .finish()
    }
}
