use alloc::boxed::Box;

use super::node::Node;

/// A trait for anything holding a next-link in a singly linked list.
///
/// `LinkedList` implements it through its head, so the list behaves like a
/// sentinel node sitting before index 0.
pub trait Link<T> {
    /// Get the owned link slot
    fn link(&self) -> &Option<Box<Node<T>>>;

    /// Get the owned link slot mutably
    fn link_mut(&mut self) -> &mut Option<Box<Node<T>>>;

    /// Get the next node
    fn next(&self) -> Option<&Node<T>> {
        self.link().as_deref()
    }

    /// Get the next node mutably
    fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.link_mut().as_deref_mut()
    }

    /// Replace the rest of the chain, returning the chain that was there.
    fn set_next(&mut self, next: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        core::mem::replace(self.link_mut(), next)
    }

    /// Detach and return the rest of the chain.
    fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.link_mut().take()
    }

    /// Splice a new node holding `value` directly after this link.
    fn push_next(&mut self, value: T) {
        let rest = self.take_next();
        *self.link_mut() = Some(Box::new(Node::new(value, rest)));
    }

    /// Unlink the node directly after this link and return its value.
    ///
    /// The removed node's successor takes its place.
    fn unlink_next(&mut self) -> Option<T> {
        let mut removed = self.take_next()?;
        *self.link_mut() = removed.take_next();
        Some(removed.into_value())
    }
}
