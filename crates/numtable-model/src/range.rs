//! Inclusive integer range driving table generation.

use serde::{Deserialize, Serialize};

/// Inclusive interval `[start, end]` of loop indices.
///
/// An inverted range (`start > end`) is not an error; it simply yields no
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Iterate the indices from `start` to `end` inclusive.
    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            usize::try_from(self.end - self.start + 1).unwrap_or(usize::MAX)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for Range {
    /// The initial range of the explorer: 1 through 12.
    fn default() -> Self {
        Self { start: 1, end: 12 }
    }
}
