//! Reasons an insert was refused.

use thiserror::Error;

/// Why [`SortedChain::try_add`](crate::SortedChain::try_add) left the chain
/// untouched.
///
/// [`SortedList::add`](crate::SortedList::add) discards this value; the chain
/// state is unchanged either way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    /// The value is empty or contains something other than ASCII letters.
    #[error("{0:?} is not a run of ASCII letters")]
    NotAlphabetic(String),
    /// A case-insensitively equal token is already stored.
    #[error("{0:?} is already present")]
    Duplicate(String),
}

impl Rejected {
    /// The value that was refused.
    pub fn value(&self) -> &str {
        match self {
            Rejected::NotAlphabetic(value) | Rejected::Duplicate(value) => value,
        }
    }
}
