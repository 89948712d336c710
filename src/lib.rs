#![no_std]

extern crate alloc;

pub mod linked_list;

pub mod prelude {
    pub use crate::linked_list::singly::{IndexError, Link, LinkedList, Node};
}
