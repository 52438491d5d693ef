//! Simulation time model.
//!
//! Time advances in whole days.  `Day(0)` is the day the initial infections
//! are seeded; every recorded history entry is keyed by its `Day`.

use std::fmt;

/// An absolute simulation day counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The following day.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// The preceding day, or `None` on day zero.
    #[inline]
    pub fn previous(self) -> Option<Day> {
        self.0.checked_sub(1).map(Day)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Day) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}
