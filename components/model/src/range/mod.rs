use std::fmt::{self, Display, Formatter};

use crate::partition::MAX_VALUE;

/// Key range owned by a single partition, in form of `[from, to]` where both ends are inclusive.
///
/// `to` is `None` for the last partition of a table, which takes every key from `from` upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRange {
    /// The first key of the range, inclusive.
    from: u64,

    /// The last key of the range, inclusive.
    to: Option<u64>,
}

impl PartitionRange {
    pub fn new(from: u64, to: Option<u64>) -> Self {
        Self { from, to }
    }

    pub fn bounded(from: u64, to: u64) -> Self {
        Self::new(from, Some(to))
    }

    pub fn unbounded(from: u64) -> Self {
        Self::new(from, None)
    }

    pub fn from(&self) -> u64 {
        self.from
    }

    pub fn to(&self) -> Option<u64> {
        self.to
    }

    pub fn is_unbounded(&self) -> bool {
        self.to.is_none()
    }

    /// Test if the given key is within the range.
    pub fn contains(&self, key: u64) -> bool {
        if self.from > key {
            return false;
        }

        match self.to {
            None => true,
            Some(to) => key <= to,
        }
    }
}

impl Display for PartitionRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "[{}-{}]", self.from, to),
            None => write!(f, "[{}-{}]", self.from, MAX_VALUE),
        }
    }
}
