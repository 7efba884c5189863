//! A singly linked list with positional access.
//!
//! The list owns its chain of nodes from head to tail and keeps a cached
//! pointer to the last node so appending is O(1). Everything else is a
//! linear walk from the head, as you'd expect from a list with no back
//! pointers.

pub mod error;
pub mod linked_list;

pub use error::ListError;
pub use linked_list::LinkedList;
