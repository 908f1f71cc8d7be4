use std::collections::TryReserveError;

use thiserror::Error;

/// Error enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, Error, PartialEq)]
pub enum Error<K> {
    /// Arena could not grow to hold a new node or the sentinel.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    /// Node reference does not belong to this tree, or was already erased.
    #[error("invalid node reference")]
    InvalidNode,
    /// Fatal case, root must always be black.
    #[error("root node is red")]
    RedRoot,
    /// Fatal case, a red node has a red child.
    #[error("consecutive red nodes")]
    ConsecutiveReds,
    /// Fatal case, black-height differs between sibling subtrees. The String
    /// component of this variant can be used for debugging.
    #[error("unbalanced blacks, {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order.
    #[error("sort error, {0:?} placed before {1:?}")]
    SortError(K, K),
    /// Fatal case, parent and child links disagree.
    #[error("broken link, {0}")]
    BrokenLink(String),
    /// Fatal case, number of reachable nodes differs from the entry count.
    #[error("count mismatch, expected {expected} found {found}")]
    CountMismatch { expected: usize, found: usize },
}
