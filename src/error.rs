//! Errors reported when checking a [`Tree`][crate::Tree]'s structure.

/// A violation of the Binary Search Tree ordering found by
/// [`Tree::check_invariant`][crate::Tree::check_invariant].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantError {
    /// A value does not lie strictly between the bounds set by its
    /// ancestors. A bound of `None` means that side is unbounded.
    #[error("value {value} is out of order: expected it strictly between {lower:?} and {upper:?}")]
    OutOfOrder {
        /// The misplaced value.
        value: i32,
        /// The exclusive lower bound, if any.
        lower: Option<i32>,
        /// The exclusive upper bound, if any.
        upper: Option<i32>,
    },
}
