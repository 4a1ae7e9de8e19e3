//! IntegerIndex: a multi-index that steps through a layout in storage order

use super::layout::{Dims, STACK_DIMS};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Multi-dimensional index into an aggregate
#[derive(Clone, PartialEq, Eq, Default)]
pub struct IntegerIndex(SmallVec<[usize; STACK_DIMS]>);

impl IntegerIndex {
    /// Create an all-zero index of the given rank
    pub fn zeros(rank: usize) -> Self {
        Self(SmallVec::from_elem(0, rank))
    }

    /// Number of coordinates
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// View as a slice
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Step to the next index in storage order (first axis fastest).
    ///
    /// Returns `false` after wrapping past the last index.
    pub fn increment(&mut self, dims: &[usize]) -> bool {
        for (x, &d) in self.0.iter_mut().zip(dims) {
            *x += 1;
            if *x < d {
                return true;
            }
            *x = 0;
        }
        false
    }

    /// Build an index of rank `rank + 2` by placing `value` on both `i` and
    /// `j`, with this index filling the remaining positions in order.
    ///
    /// Used by contraction to address the diagonal of two axes.
    pub fn with_pair(&self, i: usize, j: usize, value: usize) -> Dims {
        let rank = self.rank() + 2;
        let mut out = Dims::with_capacity(rank);
        let mut rest = self.0.iter();
        for axis in 0..rank {
            if axis == i || axis == j {
                out.push(value);
            } else {
                out.push(rest.next().copied().unwrap_or(0));
            }
        }
        out
    }
}

impl Deref for IntegerIndex {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl DerefMut for IntegerIndex {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut_slice()
    }
}

impl fmt::Debug for IntegerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&[usize]> for IntegerIndex {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for IntegerIndex {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_order() {
        let dims = [2, 3];
        let mut idx = IntegerIndex::zeros(2);
        let mut seen = vec![idx.as_slice().to_vec()];
        while idx.increment(&dims) {
            seen.push(idx.as_slice().to_vec());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[1], vec![1, 0]);
        assert_eq!(seen[2], vec![0, 1]);
        assert_eq!(seen[5], vec![1, 2]);
    }

    #[test]
    fn test_rank_zero_increment() {
        let mut idx = IntegerIndex::zeros(0);
        assert!(!idx.increment(&[]));
    }

    #[test]
    fn test_with_pair() {
        let idx = IntegerIndex::from([7, 8]);
        assert_eq!(idx.with_pair(1, 3, 5).as_slice(), &[7, 5, 8, 5]);
        assert_eq!(IntegerIndex::zeros(0).with_pair(0, 1, 2).as_slice(), &[2, 2]);
    }
}
