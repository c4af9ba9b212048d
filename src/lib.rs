#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # kdnode
//!
//! A small, pointer-based k-d tree: one point per node, the splitting axis
//! cycling through the dimensions as the tree gets deeper.
//!
//! Supports adding points, removing a point by exact co-ordinate match, and
//! finding the point with the smallest co-ordinate on any axis. The tree is
//! not balanced and offers no nearest-neighbour or range queries.
//!
//! ## Usage
//! ```rust
//! use kdnode::KdTree;
//!
//! let mut tree: KdTree<f64> = KdTree::new(2)?;
//!
//! for point in [[30.0, 40.0], [10.0, 12.0], [5.0, 25.0], [70.0, 70.0], [50.0, 30.0], [35.0, 45.0]] {
//!     tree.add(&point)?;
//! }
//!
//! assert_eq!(tree.size(), 6);
//! assert_eq!(tree.find_minimum(0)?.unwrap().coords(), &[5.0, 25.0]);
//!
//! tree.remove(&[30.0, 40.0])?;
//! assert_eq!(tree.root().unwrap().point().coords(), &[35.0, 45.0]);
//! # Ok::<(), kdnode::KdTreeError>(())
//! ```
//!
//! ## Features
//!
//! * `tracing` (default): emits `tracing` events for additions, removals
//!   and the substitutions removal performs.
//! * `test_utils`: seeded data generators and an invariant checker used by
//!   the tests and benchmarks.

pub mod error;
pub mod iter;
pub mod kdtree;
pub mod node;
pub mod point;
pub mod types;

mod construction;
mod query;

#[cfg(feature = "test_utils")]
#[doc(hidden)]
#[allow(missing_docs)]
pub mod test_utils;

pub use crate::error::KdTreeError;
pub use crate::kdtree::KdTree;
pub use crate::node::Node;
pub use crate::point::Point;
pub use crate::types::Axis;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
