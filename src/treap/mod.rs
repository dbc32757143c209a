//! Probabilistic binary search tree where each node also maintains the heap invariant.
//!
//! Every mutation is expressed as splits and merges of subtrees, and both recurse once per
//! level of the tree. The expected height is logarithmic in the number of values, so the
//! recursion depth is too. A pathological sequence of priorities could produce a linear
//! height; this is vanishingly unlikely with a reasonable random number generator and is not
//! guarded against.

mod node;
mod set;
mod tree;

pub use self::set::{TreapSet, TreapSetIntoIter, TreapSetIter};
