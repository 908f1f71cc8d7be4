//! Red-black tree index, holding totally ordered keys with logarithmic
//! insert, find, erase, min and max.
//!
//! ```
//! use rbtree_index::RbTree;
//!
//! let mut tree: RbTree<i64> = RbTree::new("example").unwrap();
//! for key in [5, 3, 8, 1, 4, 7, 9].iter() {
//!     tree.insert(*key).unwrap();
//! }
//! let min = tree.min().unwrap();
//! assert_eq!(tree.key(min), Some(&1));
//! assert_eq!(tree.erase(min), Ok(1));
//! assert_eq!(tree.to_vec(10), vec![3, 4, 5, 7, 8, 9]);
//! ```

mod depth;
mod error;
mod rbtree;

pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::rbtree::{NodeRef, RbTree, Stats};

#[cfg(test)]
mod prop_test;
