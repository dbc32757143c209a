//! An ordered set backed by a treap.
//!
//! `treap::TreapSet` keeps unique values in a binary search tree whose shape is fixed by random
//! priorities, so insertion, removal, and lookup take expected `O(log N)` time regardless of
//! the order in which values arrive.

pub mod container;
pub mod error;
pub mod treap;
pub mod trees;
