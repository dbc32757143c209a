//! The contract shared by the ordered containers in this crate.

/// An ordered container of unique values.
///
/// Iteration is provided by implementing `IntoIterator` for a reference to the container.
pub trait Container<T> {
    /// Returns the number of values in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value from the container.
    fn clear(&mut self);

    /// Returns the values of the container in ascending order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;

    /// Returns the values of the container in ascending order, reusing `dest` if its capacity
    /// is large enough.
    fn to_vec_into(&self, dest: Vec<T>) -> Vec<T>
    where
        T: Clone;
}
