//! Linked list implementations.
//!
//! # Examples
//!
//! ```
//! use linked_lists::prelude::*;
//!
//! let mut list = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//! list.prepend(0);
//!
//! assert_eq!(list.size(), 4);
//! assert_eq!(list.to_string(), "( 0 ) -> ( 1 ) -> ( 2 ) -> ( 3 ) -> nil");
//!
//! list.insert_at(99, 2);
//! assert_eq!(list.find(&99), Some(2));
//! assert_eq!(list.remove_at(2), Some(99));
//!
//! assert_eq!(list.pop(), Some(3));
//! assert_eq!(list.tail().map(|node| *node.value()), Some(2));
//! assert!(!list.contains(&3));
//! ```
pub mod singly;
