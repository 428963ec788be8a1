//! Scoring combination types.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// A single scoring combination, such as `("Five brights", 15)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    /// Human-readable name of the combination.
    pub label: String,
    /// Points awarded.
    pub points: u32,
}

impl Combination {
    /// Creates a new combination.
    #[must_use]
    pub fn new(label: impl Into<String>, points: u32) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.points)
    }
}

/// Sums the points of a score.
#[must_use]
pub fn total_points(score: &[Combination]) -> u32 {
    score.iter().map(|combination| combination.points).sum()
}
