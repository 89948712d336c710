extern crate std;

use alloc::{format, string::ToString, vec, vec::Vec};

use crate::linked_list::singly::{IndexError, Link, LinkedList};

fn list_of(values: &[i32]) -> LinkedList<i32> {
    let mut list = LinkedList::new();
    for &value in values {
        list.append(value);
    }
    list
}

fn values(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_append_renders_in_order() {
    let list = list_of(&[1, 2, 3]);
    assert_eq!(list.to_string(), "( 1 ) -> ( 2 ) -> ( 3 ) -> nil");
    assert_eq!(list.size(), 3);
    assert_eq!(*list.tail().unwrap().value(), 3);
}

#[test]
fn test_prepend() {
    let mut list = list_of(&[1, 2, 3]);
    list.prepend(0);
    assert_eq!(list.to_string(), "( 0 ) -> ( 1 ) -> ( 2 ) -> ( 3 ) -> nil");
    assert_eq!(*list.at(0).unwrap().value(), 0);

    let mut empty = LinkedList::new();
    empty.prepend(7);
    assert_eq!(*empty.head().unwrap().value(), 7);
    assert_eq!(*empty.tail().unwrap().value(), 7);
}

#[test]
fn test_pop_until_empty() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.pop(), Some(3));
    assert_eq!(list.to_string(), "( 1 ) -> ( 2 ) -> nil");
    assert_eq!(list.pop(), Some(2));
    assert_eq!(list.to_string(), "( 1 ) -> nil");
    assert_eq!(list.pop(), Some(1));
    assert_eq!(list.to_string(), "nil");

    // Popping an empty list is silent
    assert_eq!(list.pop(), None);
    assert_eq!(list.to_string(), "nil");
    assert_eq!(list.size(), 0);
    assert!(list.is_empty());
}

#[test]
fn test_insert_at() {
    let mut list = list_of(&[10, 20, 30]);
    list.insert_at(99, 1);
    assert_eq!(
        list.to_string(),
        "( 10 ) -> ( 99 ) -> ( 20 ) -> ( 30 ) -> nil"
    );

    // Head and one-past-the-end
    list.insert_at(5, 0);
    list.insert_at(40, 5);
    assert_eq!(values(&list), vec![5, 10, 99, 20, 30, 40]);
    assert_eq!(*list.tail().unwrap().value(), 40);

    // Far out of range is a no-op
    list.insert_at(0, list.size() + 5);
    assert_eq!(values(&list), vec![5, 10, 99, 20, 30, 40]);

    let mut empty = LinkedList::new();
    empty.insert_at(1, 1);
    assert!(empty.is_empty());
    empty.insert_at(1, 0);
    assert_eq!(values(&empty), vec![1]);
}

#[test]
fn test_remove_at() {
    let mut list = list_of(&[10, 20, 30]);
    assert_eq!(list.remove_at(1), Some(20));
    assert_eq!(list.to_string(), "( 10 ) -> ( 30 ) -> nil");

    // One past the end leaves the list untouched
    assert_eq!(list.remove_at(list.size()), None);
    assert_eq!(list.remove_at(17), None);
    assert_eq!(values(&list), vec![10, 30]);

    assert_eq!(list.remove_at(0), Some(10));
    assert_eq!(list.remove_at(0), Some(30));
    assert_eq!(list.remove_at(0), None);
    assert!(list.is_empty());
}

#[test]
fn test_try_positional_errors() {
    let mut list = list_of(&[1, 2]);

    assert_eq!(list.try_insert_at(3, 2), Ok(()));
    assert_eq!(
        list.try_insert_at(9, 5),
        Err(IndexError { index: 5, len: 3 })
    );
    assert_eq!(list.try_remove_at(3), Err(IndexError { index: 3, len: 3 }));
    assert_eq!(list.try_remove_at(8), Err(IndexError { index: 8, len: 3 }));
    assert_eq!(list.try_remove_at(0), Ok(1));
    assert_eq!(values(&list), vec![2, 3]);

    let err = LinkedList::<i32>::new().try_remove_at(0).unwrap_err();
    assert_eq!(err, IndexError { index: 0, len: 0 });
    assert_eq!(
        err.to_string(),
        "index 0 is out of bounds for list of length 0"
    );
}

#[test]
fn test_empty_list_queries() {
    let list = LinkedList::<i32>::new();
    assert_eq!(list.find(&5), None);
    assert!(!list.contains(&5));
    assert!(list.at(0).is_none());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
    assert_eq!(list.size(), 0);
    assert_eq!(list.to_string(), "nil");
}

#[test]
fn test_find_and_contains() {
    let mut list = list_of(&[4, 8, 15, 8]);
    assert!(list.contains(&15));
    assert!(!list.contains(&16));

    // First match wins
    assert_eq!(list.find(&8), Some(1));
    assert_eq!(list.find(&4), Some(0));

    list.append(23);
    assert_eq!(list.find(&23), Some(list.size() - 1));

    list.remove_at(2);
    assert!(!list.contains(&15));
}

#[test]
fn test_at_and_mutation_through_nodes() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(*list.at(2).unwrap().value(), 3);
    assert!(list.at(3).is_none());

    *list.at_mut(1).unwrap().value_mut() = 20;
    *list.tail_mut().unwrap().value_mut() = 30;
    *list.head_mut().unwrap().value_mut() = 10;
    assert_eq!(values(&list), vec![10, 20, 30]);
    assert!(list.at_mut(5).is_none());
}

#[test]
fn test_insert_then_remove_restores() {
    let original = list_of(&[1, 2, 3]);
    for index in 0..=original.size() {
        let mut list = original.clone();
        list.insert_at(42, index);
        assert_eq!(list.size(), original.size() + 1);
        assert_eq!(list.remove_at(index), Some(42));
        assert_eq!(list, original);
    }
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<i32> = (1..=4).collect();

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(values(&list), vec![10, 20, 30, 40]);

    for value in &mut list {
        *value += 1;
    }
    let borrowed: Vec<_> = (&list).into_iter().copied().collect();
    assert_eq!(borrowed, vec![11, 21, 31, 41]);

    let owned: Vec<_> = list.into_iter().collect();
    assert_eq!(owned, vec![11, 21, 31, 41]);
}

#[test]
fn test_extend_appends_after_tail() {
    let mut list = list_of(&[1]);
    list.extend([2, 3]);
    list.extend(core::iter::empty());
    assert_eq!(values(&list), vec![1, 2, 3]);

    let mut empty = LinkedList::new();
    empty.extend(vec![7, 8]);
    assert_eq!(values(&empty), vec![7, 8]);
}

#[test]
fn test_std_traits() {
    let list = list_of(&[1, 2]);
    assert_eq!(format!("{:?}", list), "[1, 2]");
    assert_eq!(list.clone(), list);
    assert_ne!(list, list_of(&[1, 2, 3]));
    assert!(LinkedList::<i32>::default().is_empty());

    let words: LinkedList<&str> = ["a", "b"].into_iter().collect();
    assert_eq!(words.to_string(), "( a ) -> ( b ) -> nil");
}

#[test]
fn test_long_list_drop() {
    let list: LinkedList<u32> = (0..200_000).collect();
    assert_eq!(list.size(), 200_000);
    drop(list);
}

#[test]
fn test_detached_chain_drop() {
    let mut list: LinkedList<u32> = (0..1_000_000).collect();
    let chain = list.take_next();
    assert!(list.is_empty());
    drop(chain);

    let mut list: LinkedList<u32> = (0..1_000_000).collect();
    let rest = list.head_mut().unwrap().set_next(None);
    assert_eq!(list.size(), 1);
    drop(rest);
}
