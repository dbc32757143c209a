use crate::treap::tree;
use crate::trees::BinaryNode;

/// A struct representing an internal node of a treap.
pub struct Node<T> {
    pub value: T,
    pub priority: f64,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, priority: f64) -> Self {
        Node {
            value,
            priority,
            left: None,
            right: None,
        }
    }
}

impl<T> BinaryNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_ref().map(|node| &**node)
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_ref().map(|node| &**node)
    }
}
