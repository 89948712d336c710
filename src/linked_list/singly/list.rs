use alloc::boxed::Box;
use core::fmt;

use super::{
    error::IndexError,
    iter::{IntoIter, Iter, IterMut},
    node::Node,
    traits::Link,
};

/// A singly linked list that owns its chain of nodes.
///
/// Only the head is stored. `size`, `tail` and `append` walk the chain on
/// every call.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList { head: None }
    }

    /// Get the head of the linked list
    pub fn head(&self) -> Option<&Node<T>> {
        self.next()
    }

    /// Get the head of the linked list mutably
    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.next_mut()
    }

    /// Check if the linked list is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` after the current tail.
    pub fn append(&mut self, value: T) {
        match self.tail_mut() {
            Some(tail) => tail.push_next(value),
            None => self.push_next(value),
        }
    }

    /// Adds `value` in front of the current head.
    pub fn prepend(&mut self, value: T) {
        self.push_next(value);
    }

    /// Counts the reachable nodes.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns the last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<&Node<T>> {
        let mut node = self.head()?;
        while let Some(next) = node.next() {
            node = next;
        }
        Some(node)
    }

    /// Get the last node mutably, or `None` if the list is empty.
    pub fn tail_mut(&mut self) -> Option<&mut Node<T>> {
        let mut node = self.head_mut()?;
        while node.next().is_some() {
            node = node.next_mut()?;
        }
        Some(node)
    }

    /// Returns the node at the zero-based `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head()?;
        for _ in 0..index {
            node = node.next()?;
        }
        Some(node)
    }

    /// Get the node at `index` mutably, or `None` past the end.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head_mut()?;
        for _ in 0..index {
            node = node.next_mut()?;
        }
        Some(node)
    }

    /// Removes the last node and returns its value.
    ///
    /// Popping an empty list is a no-op.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            tracing::trace!("pop on an empty list");
            return None;
        }

        // Stop on the link whose successor is the tail.
        let mut link: &mut dyn Link<T> = self;
        while link.next().is_some_and(|next| next.next().is_some()) {
            link = link.next_mut()?;
        }
        link.unlink_next()
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// `index == size()` appends. Any larger index leaves the list unchanged.
    pub fn insert_at(&mut self, value: T, index: usize) {
        if let Err(err) = self.try_insert_at(value, index) {
            tracing::trace!(%err, "insert_at ignored");
        }
    }

    /// Like [`insert_at`](Self::insert_at), but reports an out-of-range index.
    pub fn try_insert_at(&mut self, value: T, index: usize) -> Result<(), IndexError> {
        self.predecessor_mut(index)?.push_next(value);
        Ok(())
    }

    /// Removes the node at `index` and returns its value.
    ///
    /// Out-of-range indices leave the list unchanged and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.try_remove_at(index)
            .inspect_err(|err| tracing::trace!(%err, "remove_at ignored"))
            .ok()
    }

    /// Like [`remove_at`](Self::remove_at), but reports an out-of-range index.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        self.predecessor_mut(index)?
            .unlink_next()
            .ok_or(IndexError { index, len: index })
    }

    /// Get an iterator over the values, head first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head())
    }

    /// Get an iterator over mutable references to the values, head first
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head_mut())
    }

    /// Walks to the link owning the slot at `index`: the list itself for
    /// index 0, otherwise the node at `index - 1`.
    fn predecessor_mut(&mut self, index: usize) -> Result<&mut dyn Link<T>, IndexError> {
        let mut link: &mut dyn Link<T> = self;
        for len in 0..index {
            link = link.next_mut().ok_or(IndexError { index, len })?;
        }
        Ok(link)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Checks whether any node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Returns the index of the first node holding `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }
}

impl<T> Link<T> for LinkedList<T> {
    fn link(&self) -> &Option<Box<Node<T>>> {
        &self.head
    }

    fn link_mut(&mut self) -> &mut Option<Box<Node<T>>> {
        &mut self.head
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `( v1 ) -> ( v2 ) -> nil`; an empty list renders as `nil`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self.head();
        while let Some(node) = current {
            write!(f, "{node} -> ")?;
            current = node.next();
        }
        f.write_str("nil")
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = match self.tail_mut() {
            Some(tail) => tail.link_mut(),
            None => &mut self.head,
        };
        for value in iter {
            slot = slot.insert(Box::new(Node::new(value, None))).link_mut();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
