//! The list itself: a chain of heap nodes owned from the head, with a cached
//! raw pointer to the last node for O(1) appends.

use std::fmt;
use std::ptr;

use num::ToPrimitive;

use crate::error::ListError;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T, next: Option<Box<Node<T>>>) -> Node<T> {
        Node { value, next }
    }
}

/// A singly linked list.
///
/// `head` owns the whole chain; each node owns its successor. `tail` is a
/// non-owning pointer into that chain (null when the list is empty), kept
/// fresh by every structural mutation so appends never have to walk.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: *mut Node<T>,
    size: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: ptr::null_mut(),
            size: 0,
        }
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Appends a value at the tail. O(1).
    pub fn push_back(&mut self, value: T) {
        let mut new_node = Box::new(Node::new(value, None));
        let raw: *mut Node<T> = &mut *new_node;

        if self.tail.is_null() {
            self.head = Some(new_node);
        } else {
            // SAFETY: a non-null tail points at the last node of the chain
            // owned by head, and every mutation that moves or removes that
            // node rewrites the pointer before returning.
            unsafe {
                (*self.tail).next = Some(new_node);
            }
        }

        self.tail = raw;
        self.size += 1;
    }

    /// Prepends a value at the head. O(1).
    pub fn push_front(&mut self, value: T) {
        let mut new_node = Box::new(Node::new(value, self.head.take()));

        if self.tail.is_null() {
            self.tail = &mut *new_node;
        }

        self.head = Some(new_node);
        self.size += 1;
    }

    /// Removes and returns the tail value. O(n): without back pointers the
    /// predecessor of the tail can only be found by walking from the head.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.size > 1 {
            let prev = self.node_at_mut(self.size - 2)?;
            let new_tail: *mut Node<T> = &mut *prev;
            let old_tail = prev.next.take().ok_or(ListError::Empty)?;
            self.tail = new_tail;
            self.size -= 1;
            Ok(old_tail.value)
        } else {
            let node = self.head.take().ok_or(ListError::Empty)?;
            self.tail = ptr::null_mut();
            self.size = 0;
            Ok(node.value)
        }
    }

    /// Removes and returns the head value. O(1).
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::Empty)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        self.size -= 1;
        Ok(node.value)
    }

    /// Returns a reference to the value at `index`. O(index).
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.node_at(index).map(|node| &node.value)
    }

    /// Overwrites the value at `index`, leaving the structure untouched.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let node = self.node_at_mut(index)?;
        node.value = value;
        Ok(())
    }

    /// Inserts `value` so it becomes the node at `index`, shifting the rest
    /// back. `index` may equal the length, which is the same as `push_back`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.size {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.size,
            });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == self.size {
            self.push_back(value);
        } else {
            let prev = self.node_at_mut(index - 1)?;
            let new_node = Box::new(Node::new(value, prev.next.take()));
            prev.next = Some(new_node);
            self.size += 1;
        }

        Ok(())
    }

    /// Removes and returns the value at `index`, shifting the rest forward.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.size;
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        if index == 0 {
            self.pop_front()
        } else if index == len - 1 {
            self.pop_back()
        } else {
            // strictly interior, so the node at index - 1 and its successor
            // both exist and neither is the tail
            let prev = self.node_at_mut(index - 1)?;
            match prev.next.take() {
                Some(mut removed) => {
                    prev.next = removed.next.take();
                    self.size -= 1;
                    Ok(removed.value)
                }
                None => Err(ListError::IndexOutOfRange { index, len }),
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn node_at(&self, index: usize) -> Result<&Node<T>, ListError> {
        let mut remaining = index;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if remaining == 0 {
                return Ok(node);
            }
            current = node.next.as_deref();
            remaining -= 1;
        }
        Err(ListError::IndexOutOfRange {
            index,
            len: self.size,
        })
    }

    fn node_at_mut(&mut self, index: usize) -> Result<&mut Node<T>, ListError> {
        let len = self.size;
        let mut remaining = index;
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if remaining == 0 {
                return Ok(node);
            }
            current = node.next.as_deref_mut();
            remaining -= 1;
        }
        Err(ListError::IndexOutOfRange { index, len })
    }
}

impl<T: ToPrimitive> LinkedList<T> {
    /// Arithmetic mean of all values as plain `f64` division, with `0.0` as
    /// the defined result for an empty list. Only available for element types
    /// that convert to a primitive number.
    pub fn average(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total: f64 = self.iter().filter_map(ToPrimitive::to_f64).sum();
        total / self.size as f64
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        // rebuilt by appending so the clone's tail pointer is its own
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // iterative teardown; the default recursive drop glue would blow the
        // stack on a long chain
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}
