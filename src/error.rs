use std::result;
use thiserror::Error;

/// Convenience `Error` enum for `treap-set`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required value was absent.
    #[error("null argument: a value is required")]
    NullArgument,
    /// An order-dependent operation was attempted while its precondition did not hold.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Convenience `Result` type for `treap-set`.
pub type Result<T> = result::Result<T, Error>;
