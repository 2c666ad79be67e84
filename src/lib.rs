//! A generic, in-memory k-d tree for bulk-built k-nearest-neighbor and
//! axis-aligned orthogonal range queries.
//!
//! The tree is built once from a batch of points (bulk construction, with
//! opportunistic parallel fan-out above a size threshold) and is primarily a
//! *cached read index*: [`insert`](KdTree::insert) and
//! [`remove`](KdTree::remove) are supported for convenience but never
//! rebalance, so a caller expecting balanced query performance after many
//! mutations should periodically call [`rebuild`](KdTree::rebuild).
//!
//! ```
//! use kborea::{KdTree, TreeConfig};
//!
//! let points = vec![[1.0, 60.0], [2.0, 42.0], [3.0, 40.0], [4.0, 39.0], [5.0, 20.0]];
//! let tree = KdTree::build(points, TreeConfig::new(2)).unwrap();
//! let nearest = tree.knn(&[4.0, 39.0], 1, &|_| true).unwrap();
//! assert_eq!(nearest, vec![[4.0, 39.0]]);
//! ```

mod builder;
mod coord;
mod error;
mod heap;
mod knn;
mod node;
mod partition;
mod point;
mod point_implementations;
mod range;
mod rect;
mod tree;

pub use coord::Coord;
pub use error::{KdError, Result};
pub use point::KdPoint;
pub use rect::Rect;
pub use tree::{KdTree, TreeConfig};
