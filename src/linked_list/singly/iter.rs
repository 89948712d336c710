use super::{list::LinkedList, node::Node, traits::Link};

/// An iterator over the values of a linked list.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Self { current: head }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = Link::next(node);
            node.value()
        })
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// An iterator over mutable references to the values of a linked list.
pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: Option<&'a mut Node<T>>) -> Self {
        Self { current: head }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            let (value, next) = node.split_mut();
            self.current = next;
            value
        })
    }
}

/// An owning iterator that drains a linked list from the head.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> IntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> Self {
        Self(list)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.unlink_next()
    }
}
