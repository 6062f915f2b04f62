//! A self-ordering chain of alphabetic tokens.
//!
//! [`SortedChain`] keeps a set of unique, letters-only strings sorted
//! case-insensitively as they are inserted and removed. The ordering
//! direction can be flipped at any time; the chain does not re-sort, it turns
//! its links around in place.
//!
//! # Design
//!
//! Same split as the rest of nexus: storage owns the data, the list only
//! coordinates keys.
//!
//! ```text
//! Storage (slab::Slab<Node>)   - owns tokens, hands out stable keys
//! List                         - head/tail/len, prev/next keys per node
//! SortedChain                  - validation, sort position, direction
//! ```
//!
//! Links are integer keys, not pointers. A missing neighbour is the key
//! sentinel ([`Key::NONE`]), which never leaves the crate: public lookups
//! return `Option`.
//!
//! # Quick Start
//!
//! ```
//! use nexus_sorted::{Direction, SortedChain, SortedList};
//!
//! let mut chain = SortedChain::new();
//! chain.add("banana");
//! chain.add("Apple");
//! chain.add("cherry");
//!
//! assert_eq!(chain.to_string(), "Apple\nbanana\ncherry\n");
//! assert!(chain.is_present("APPLE"));
//!
//! chain.order_descending();
//! assert_eq!(chain.direction(), Direction::Descending);
//! assert_eq!(chain.first().map(|e| e.value()), Some("cherry"));
//! ```
//!
//! # Silent Rejection
//!
//! Inserts that would break the invariants are dropped without an error.
//! Use [`SortedChain::try_add`] to find out why.
//!
//! ```
//! use nexus_sorted::{Rejected, SortedChain, SortedList};
//!
//! let mut chain = SortedChain::new();
//! chain.add("Apple");
//! chain.add("apple");  // duplicate, ignored
//! chain.add("abc123"); // not letters, ignored
//! assert_eq!(chain.size(), 1);
//!
//! assert!(matches!(chain.try_add("APPLE"), Err(Rejected::Duplicate(_))));
//! ```
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `size`, `first`, `last`, `remove_first`, `remove_last` | O(1) |
//! | `add`, `get`, `is_present`, `remove`, `remove_at` | O(n) walk from head |
//! | `order_ascending`, `order_descending` | O(n) link swap, no copies |
//!
//! # Threading
//!
//! None. A chain is a plain single-owner value; share it behind a lock if
//! you must.

#![warn(missing_docs)]

pub mod chain;
pub mod direction;
pub mod element;
pub mod error;
pub mod iter;
pub mod key;
pub mod list;
pub mod node;
pub mod storage;
pub mod token;

pub use chain::{SortedChain, SortedList};
pub use direction::Direction;
pub use element::Element;
pub use error::Rejected;
pub use iter::Values;
pub use key::Key;
pub use list::{List, NodeSlab};
pub use node::Node;
pub use storage::Storage;
