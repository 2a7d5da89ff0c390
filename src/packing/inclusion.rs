//! Inclusion vectors.

use serde::{Deserialize, Serialize};

use crate::models::MAX_TASKS;

/// The set of tasks a candidate requires to be performed.
///
/// Bit `i` stands for task `i`. Bits at or above `len` are always clear,
/// so two vectors over the same tasks compare equal iff they include the
/// same tasks.
///
/// Enumeration counters read the other way round: in
/// [`from_counter`](Self::from_counter) task 0 is the most significant
/// digit, so counting up visits subsets in the same order as a
/// depth-first walk that decides task 0 first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InclusionVector {
    bits: u64,
    len: usize,
}

impl InclusionVector {
    /// Mask with the lowest `len` bits set.
    ///
    /// Also the largest inclusion vector over `len` tasks, i.e. the last
    /// value of the bitmask enumeration.
    #[inline]
    pub fn full_mask(len: usize) -> u64 {
        debug_assert!(len <= MAX_TASKS);
        if len >= 64 {
            u64::MAX
        } else {
            (1u64 << len) - 1
        }
    }

    /// Creates a vector over `len` tasks. Extra bits are dropped.
    pub fn from_bits(bits: u64, len: usize) -> Self {
        Self {
            bits: bits & Self::full_mask(len),
            len,
        }
    }

    /// Creates the vector for enumeration counter `counter` over `len`
    /// tasks, task `i` being digit `len - 1 - i` of the counter.
    pub fn from_counter(counter: u64, len: usize) -> Self {
        if len == 0 {
            return Self::empty(0);
        }
        Self::from_bits(counter.reverse_bits() >> (64 - len), len)
    }

    /// Creates a vector from one flag per task.
    pub fn from_flags(flags: &[bool]) -> Self {
        let bits = flags
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .fold(0u64, |acc, (i, _)| acc | (1u64 << i));
        Self::from_bits(bits, flags.len())
    }

    /// Vector including no task.
    pub fn empty(len: usize) -> Self {
        Self { bits: 0, len }
    }

    /// Vector including every task.
    pub fn full(len: usize) -> Self {
        Self::from_bits(u64::MAX, len)
    }

    /// Number of tasks covered.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector covers no task at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw bit pattern.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Whether task `index` must be performed.
    #[inline]
    pub fn includes(&self, index: usize) -> bool {
        index < self.len && self.bits & (1u64 << index) != 0
    }

    /// Copy with task `index` included.
    #[inline]
    pub fn with(self, index: usize) -> Self {
        debug_assert!(index < self.len);
        Self {
            bits: self.bits | (1u64 << index),
            len: self.len,
        }
    }

    /// Number of included tasks.
    #[inline]
    pub fn included_count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Included task indices in ascending order.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&i| self.includes(i))
    }
}
