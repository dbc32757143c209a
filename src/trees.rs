//! Export, rendering, and iteration helpers shared by binary search trees.
//!
//! Nothing in this module depends on how a tree is balanced. Any node type that exposes its
//! value and children through `BinaryNode` can be walked in-order, copied into a vector, or
//! rendered as text.

use log::trace;
use std::fmt;

/// A node of a binary search tree whose in-order traversal yields values in ascending order.
pub trait BinaryNode {
    type Value;

    fn value(&self) -> &Self::Value;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

/// Returns an in-order iterator over the tree rooted at `root` that contains `len` values.
pub fn iter<N: BinaryNode>(root: Option<&N>, len: usize) -> Iter<'_, N> {
    Iter {
        current: root,
        stack: Vec::new(),
        remaining: len,
    }
}

/// Copies the values of a tree with `len` values into a new vector, in order.
pub fn to_vec<N>(root: Option<&N>, len: usize) -> Vec<N::Value>
where
    N: BinaryNode,
    N::Value: Clone,
{
    let mut ret = Vec::with_capacity(len);
    ret.extend(iter(root, len).cloned());
    ret
}

/// Copies the values of a tree with `len` values into `dest`, in order. `dest` is cleared and
/// reused if its capacity can hold `len` values. Otherwise a new vector is allocated.
pub fn to_vec_into<N>(root: Option<&N>, len: usize, mut dest: Vec<N::Value>) -> Vec<N::Value>
where
    N: BinaryNode,
    N::Value: Clone,
{
    if dest.capacity() < len {
        trace!(
            "destination capacity {} is less than {}; allocating",
            dest.capacity(),
            len,
        );
        return to_vec(root, len);
    }
    dest.clear();
    dest.extend(iter(root, len).cloned());
    dest
}

/// Writes the values of a tree in order as `[a, b, c]`.
pub fn render<N>(root: Option<&N>, len: usize, f: &mut fmt::Formatter) -> fmt::Result
where
    N: BinaryNode,
    N::Value: fmt::Display,
{
    write!(f, "[")?;
    for (index, value) in iter(root, len).enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}

/// An in-order iterator over a binary search tree.
///
/// This iterator yields immutable references to values in ascending order.
pub struct Iter<'a, N>
where
    N: 'a,
{
    current: Option<&'a N>,
    stack: Vec<&'a N>,
    remaining: usize,
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: 'a + BinaryNode,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            self.remaining = self.remaining.saturating_sub(1);
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N> ExactSizeIterator for Iter<'a, N> where N: 'a + BinaryNode {}

impl<'a, N> Clone for Iter<'a, N> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
