use crate::container::Container;
use crate::error::{Error, Result};
use crate::treap::node::Node;
use crate::treap::tree;
use crate::trees;
use log::debug;
use rand::{self, Rng, SeedableRng, XorShiftRng};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

/// How a set orders its values. Fixed when the set is constructed.
enum Comparator<T> {
    Natural(fn(&T, &T) -> Ordering),
    Custom(Rc<dyn Fn(&T, &T) -> Ordering>),
}

impl<T> Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Comparator::Natural(cmp) => (*cmp)(a, b),
            Comparator::Custom(cmp) => (**cmp)(a, b),
        }
    }

    /// Returns `true` if both comparators are known to order values identically. `Natural`
    /// always holds `T::cmp`; custom comparators match only when they are the same closure.
    fn same_ordering(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparator::Natural(_), Comparator::Natural(_)) => true,
            (Comparator::Custom(a), Comparator::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        match self {
            Comparator::Natural(cmp) => Comparator::Natural(*cmp),
            Comparator::Custom(cmp) => Comparator::Custom(Rc::clone(cmp)),
        }
    }
}

/// An ordered set implemented using a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a value and a priority. The value of any node is greater than all values in
/// its left subtree and less than all values occuring in its right subtree. The priority of a
/// node is greater than the priority of all nodes in its subtrees. By randomly generating
/// priorities, the expected height of the tree is proportional to the logarithm of the number
/// of values.
///
/// Insertion and removal never rotate. They split the tree around the value and merge the
/// pieces back together.
///
/// Values are ordered by `Ord` unless a comparator is supplied at construction. Priorities are
/// drawn from the random number generator `R`, which defaults to an `XorShiftRng` seeded from
/// the operating system.
///
/// # Examples
///
/// ```
/// use treap_set::treap::TreapSet;
///
/// let mut set = TreapSet::new();
/// set.insert(5);
/// set.insert(3);
/// set.insert(8);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_vec(), vec![3, 5, 8]);
///
/// assert!(set.remove(&5));
/// assert!(!set.remove(&5));
/// assert_eq!(set.to_string(), "[3, 8]");
/// ```
pub struct TreapSet<T, R = XorShiftRng> {
    root: tree::Tree<T>,
    len: usize,
    rng: R,
    comparator: Comparator<T>,
}

impl<T> TreapSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapSet<T>` ordered by `Ord` whose priorities are drawn from
    /// an `XorShiftRng` seeded by the operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_rng(rand::weak_rng())
    }

    /// Constructs a new, empty `TreapSet<T>` ordered by `Ord` whose priorities are drawn from
    /// an `XorShiftRng` with a fixed seed. Two sets with the same seed that receive the same
    /// operations have the same shape.
    ///
    /// The generator cannot run from an all-zero seed, so that seed selects the generator's
    /// default unseeded state instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::with_seed([1, 2, 3, 4]);
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        if seed == [0; 4] {
            Self::with_rng(XorShiftRng::new_unseeded())
        } else {
            Self::with_rng(SeedableRng::from_seed(seed))
        }
    }
}

impl<T> TreapSet<T> {
    /// Constructs a new, empty `TreapSet<T>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.to_vec(), vec![2, 1]);
    /// ```
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_rng_and_comparator(rand::weak_rng(), comparator)
    }
}

impl<T, R> TreapSet<T, R>
where
    T: Ord,
    R: Rng,
{
    /// Constructs a new, empty `TreapSet<T, R>` ordered by `Ord` whose priorities are drawn
    /// from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate rand;
    /// use treap_set::treap::TreapSet;
    ///
    /// let set: TreapSet<u32, _> = TreapSet::with_rng(rand::thread_rng());
    /// assert!(set.is_empty());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        TreapSet {
            root: None,
            len: 0,
            rng,
            comparator: Comparator::Natural(T::cmp),
        }
    }
}

impl<T, R> TreapSet<T, R>
where
    R: Rng,
{
    /// Constructs a new, empty `TreapSet<T, R>` ordered by `comparator` whose priorities are
    /// drawn from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate rand;
    /// use rand::{SeedableRng, XorShiftRng};
    /// use treap_set::treap::TreapSet;
    ///
    /// let rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    /// let mut set = TreapSet::with_rng_and_comparator(rng, |a: &i32, b: &i32| {
    ///     a.abs().cmp(&b.abs())
    /// });
    /// set.insert(-2);
    /// set.insert(1);
    /// assert!(!set.insert(2));
    /// assert_eq!(set.to_vec(), vec![1, -2]);
    /// ```
    pub fn with_rng_and_comparator<F>(rng: R, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        TreapSet {
            root: None,
            len: 0,
            rng,
            comparator: Comparator::Custom(Rc::new(comparator)),
        }
    }

    /// Inserts a value into the set. Returns `false` and leaves the set unchanged if an equal
    /// value already exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        let &mut TreapSet {
            ref mut root,
            ref mut len,
            ref mut rng,
            ref comparator,
        } = self;
        let new_node = Node::new(value, rng.gen::<f64>());
        tree::insert(root, new_node, &|a: &T, b: &T| comparator.compare(a, b));
        *len += 1;
        true
    }

    /// Inserts a value that may be absent. Returns an error and leaves the set unchanged if
    /// `value` is `None`. Otherwise behaves like `insert`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::error::Error;
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert_eq!(set.try_insert(Some(1)), Ok(true));
    /// assert_eq!(set.try_insert(None), Err(Error::NullArgument));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn try_insert(&mut self, value: Option<T>) -> Result<bool> {
        value
            .map(|value| self.insert(value))
            .ok_or(Error::NullArgument)
    }

    /// Removes a value from the set. Returns `true` if the value was in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns it. Returns `None` if no equal value exists in
    /// the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let &mut TreapSet {
            ref mut root,
            ref mut len,
            ref comparator,
            ..
        } = self;
        let ret = tree::remove(root, value, &|a: &T, b: &T| comparator.compare(a, b));
        if ret.is_some() {
            *len -= 1;
        }
        ret
    }

    /// Checks if a value exists in the set. The tree is not restructured.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the set that is equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::with_comparator(|a: &String, b: &String| {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// });
    /// set.insert(String::from("Treap"));
    /// assert_eq!(set.get(&String::from("TREAP")), Some(&String::from("Treap")));
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.root, value, &|a: &T, b: &T| self.comparator.compare(a, b))
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!("clearing treap set of {} values", self.len);
        }
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Moves every value greater than or equal to `pivot` into a new set and returns it. The new
    /// set shares this set's comparator and starts with a copy of its random number generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.extend(vec![1, 2, 3, 4]);
    ///
    /// let upper = set.split_off(&3);
    /// assert_eq!(set.to_vec(), vec![1, 2]);
    /// assert_eq!(upper.to_vec(), vec![3, 4]);
    /// ```
    pub fn split_off(&mut self, pivot: &T) -> Self
    where
        R: Clone,
    {
        let &mut TreapSet {
            ref mut root,
            ref mut len,
            ref rng,
            ref comparator,
        } = self;
        let right = tree::split(root, pivot, false, &|a: &T, b: &T| comparator.compare(a, b));
        let right_len = tree::len(&right);
        *len -= right_len;
        TreapSet {
            root: right,
            len: right_len,
            rng: rng.clone(),
            comparator: comparator.clone(),
        }
    }

    /// Moves every value of `other` into this set, leaving `other` empty. Both sets must share
    /// an ordering: both ordered by `Ord`, or by the same comparator (as with the two halves of
    /// `split_off`). Every value of this set must be less than every value of `other`.
    /// Otherwise an error is returned and neither set is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut lower = TreapSet::new();
    /// lower.extend(vec![1, 2]);
    /// let mut upper = TreapSet::new();
    /// upper.extend(vec![3, 4]);
    ///
    /// assert!(lower.append(&mut upper).is_ok());
    /// assert_eq!(lower.to_vec(), vec![1, 2, 3, 4]);
    /// assert!(upper.is_empty());
    ///
    /// let mut overlapping = TreapSet::new();
    /// overlapping.insert(2);
    /// assert!(lower.append(&mut overlapping).is_err());
    /// ```
    pub fn append<S>(&mut self, other: &mut TreapSet<T, S>) -> Result<()>
    where
        S: Rng,
    {
        if !self.comparator.same_ordering(&other.comparator) {
            debug!("rejecting append of {} values ordered by another comparator", other.len);
            return Err(Error::InvalidOperation(
                "appended set must share the ordering of this set",
            ));
        }
        if let (Some(max), Some(min)) = (self.last(), other.first()) {
            if self.comparator.compare(max, min) != Ordering::Less {
                debug!("rejecting append of {} values that overlap", other.len);
                return Err(Error::InvalidOperation(
                    "appended values must all be greater than existing values",
                ));
            }
        }
        tree::merge(&mut self.root, other.root.take());
        self.len += other.len;
        other.len = 0;
        Ok(())
    }

    /// Returns the values of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        trees::to_vec(self.root_node(), self.len)
    }

    /// Returns the values of the set in ascending order, stored in `dest` if its capacity is
    /// large enough and in a newly allocated vector otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let values = set.to_vec_into(Vec::with_capacity(16));
    /// assert_eq!(values, vec![1, 3]);
    /// assert!(values.capacity() >= 16);
    /// ```
    pub fn to_vec_into(&self, dest: Vec<T>) -> Vec<T>
    where
        T: Clone,
    {
        trees::to_vec_into(self.root_node(), self.len, dest)
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_set::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapSetIter<'_, T> {
        trees::iter(self.root_node(), self.len)
    }
}

impl<T, R> TreapSet<T, R> {
    fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_ref().map(|node| &**node)
    }
}

/// An iterator for `TreapSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub type TreapSetIter<'a, T> = trees::Iter<'a, Node<T>>;

impl<T, R> IntoIterator for TreapSet<T, R> {
    type Item = T;
    type IntoIter = TreapSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        TreapSetIntoIter {
            current: self.root,
            stack: Vec::new(),
            remaining: self.len,
        }
    }
}

impl<'a, T, R> IntoIterator for &'a TreapSet<T, R>
where
    T: 'a,
    R: Rng,
{
    type Item = &'a T;
    type IntoIter = TreapSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreapSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct TreapSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
    remaining: usize,
}

impl<T> Iterator for TreapSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            self.remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for TreapSetIntoIter<T> {}

impl<T, R> Container<T> for TreapSet<T, R>
where
    R: Rng,
{
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        TreapSet::clear(self);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        TreapSet::to_vec(self)
    }

    fn to_vec_into(&self, dest: Vec<T>) -> Vec<T>
    where
        T: Clone,
    {
        TreapSet::to_vec_into(self, dest)
    }
}

impl<T, R> Extend<T> for TreapSet<T, R>
where
    R: Rng,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for TreapSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreapSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Default for TreapSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> fmt::Debug for TreapSet<T, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(trees::iter(self.root_node(), self.len)).finish()
    }
}

impl<T, R> fmt::Display for TreapSet<T, R>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        trees::render(self.root_node(), self.len, f)
    }
}
