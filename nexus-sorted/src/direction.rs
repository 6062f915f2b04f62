//! Ordering direction of a chain.

use core::cmp::Ordering;
use core::fmt;

use crate::token;

/// Case-insensitive ordering enforced from head to tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `a` before `b` before `c`.
    #[default]
    Ascending,
    /// `c` before `b` before `a`.
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Returns `true` if `existing` belongs strictly after `incoming`.
    ///
    /// Insertion splices a new token before the first element for which
    /// this holds.
    #[inline]
    pub fn goes_after(self, existing: &str, incoming: &str) -> bool {
        let expected = match self {
            Direction::Ascending => Ordering::Greater,
            Direction::Descending => Ordering::Less,
        };
        token::compare(existing, incoming) == expected
    }

    /// Returns `true` if `a` may directly precede `b`.
    #[inline]
    pub fn in_order(self, a: &str, b: &str) -> bool {
        match self {
            Direction::Ascending => token::compare(a, b) != Ordering::Greater,
            Direction::Descending => token::compare(a, b) != Ordering::Less,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}
