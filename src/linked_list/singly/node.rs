use alloc::boxed::Box;
use core::{fmt, mem::ManuallyDrop, ptr};

use super::{iter::Iter, traits::Link};

/// A single cell of a singly linked list.
///
/// A node exclusively owns the remainder of the chain, so chains are always
/// finite and acyclic. Dropping, cloning and comparing a node walk that chain
/// iteratively.
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a node holding `value` followed by `next`.
    pub const fn new(value: T, next: Option<Box<Node<T>>>) -> Self {
        Self { value, next }
    }

    /// Get the value stored in the node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the value stored in the node
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the stored value, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    /// Consumes the node, dropping whatever chain it still owns.
    pub fn into_value(mut self) -> T {
        drop(self.next.take());
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped and its chain is already released,
        // so `value` is moved out exactly once and nothing leaks.
        unsafe { ptr::read(&this.value) }
    }

    pub(crate) fn split_mut(&mut self) -> (&mut T, Option<&mut Node<T>>) {
        (&mut self.value, self.next.as_deref_mut())
    }
}

impl<T> Link<T> for Node<T> {
    fn link(&self) -> &Option<Box<Node<T>>> {
        &self.next
    }

    fn link_mut(&mut self) -> &mut Option<Box<Node<T>>> {
        &mut self.next
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut head = Node::new(self.value.clone(), None);
        let mut slot = &mut head.next;
        let mut source = self.next.as_deref();
        while let Some(node) = source {
            let copy = Box::new(Node::new(node.value.clone(), None));
            slot = &mut slot.insert(copy).next;
            source = node.next.as_deref();
        }
        head
    }
}

/// Two nodes are equal when the chains starting at them hold equal values.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        Iter::new(Some(self)).eq(Iter::new(Some(other)))
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} )", self.value)
    }
}
