//! # Singly Linked List
//!
//! An owning, singly linked list: every [`Node`] owns the rest of the chain
//! through a boxed next-link, and [`LinkedList`] owns the head.
//!
//! ## Core Components
//!
//! - [`traits::Link`]: anything holding a next-link. Implemented by both
//!   [`Node`] and [`LinkedList`] so positional operations only ever need the
//!   predecessor link of the position they touch.
//! - [`node::Node`]: a single cell holding a value.
//! - [`list::LinkedList`]: the list itself.
//! - [`error::IndexError`]: returned by the `try_*` positional operations.
//!
//! ## Out-of-range positions
//!
//! `at`, `insert_at`, `remove_at` and `pop` never panic. Out-of-range input
//! yields `None` or leaves the list untouched. Use `try_insert_at` and
//! `try_remove_at` to observe the failure as an [`IndexError`].

pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod traits;

pub use error::IndexError;
pub use list::LinkedList;
pub use node::Node;
pub use traits::Link;

#[cfg(test)]
mod tests;
