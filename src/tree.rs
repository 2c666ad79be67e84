//! Tree facade (C9): the public entry points, argument validation, and data
//! enumeration. Grounded on the facade wrapping a root node plus config in
//! `kd/kd.go` (the retrieved `downflux/go-kd` source).

use tracing::{debug, instrument, trace};

use crate::builder;
use crate::coord::Coord;
use crate::error::{KdError, Result};
use crate::knn;
use crate::node::Node;
use crate::point::KdPoint;
use crate::range;
use crate::rect::Rect;

/// Construction-time configuration for a [`KdTree`].
///
/// With the `serde` feature enabled this derives `Serialize`/`Deserialize`
/// so a host application can snapshot a tree's configuration alongside
/// `data()`'s point list for its own persistence needs; the library does
/// not define an on-disk layout for the node tree itself (see SPEC_FULL.md
/// §6) — on load, a host rebuilds via [`KdTree::build`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Ambient dimension of the tree. Must be `>= 1`.
    pub k: usize,
    /// Nominal leaf-bucket size. Must be `>= 1`.
    pub n_leaf: usize,
}

impl Default for TreeConfig {
    /// `n_leaf = 16` per SPEC_FULL §6's suggested default.
    fn default() -> Self {
        TreeConfig { k: 1, n_leaf: 16 }
    }
}

impl TreeConfig {
    /// Builds a config for dimension `k` with the default `n_leaf`.
    pub fn new(k: usize) -> Self {
        TreeConfig {
            k,
            ..TreeConfig::default()
        }
    }

    /// Overrides the nominal leaf-bucket size.
    pub fn with_n_leaf(mut self, n_leaf: usize) -> Self {
        self.n_leaf = n_leaf;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.k < 1 {
            return Err(KdError::invalid_config("K must be >= 1"));
        }
        if self.n_leaf < 1 {
            return Err(KdError::invalid_config("N_leaf must be >= 1"));
        }
        Ok(())
    }
}

/// A generic, in-memory k-d tree over points of type `P`.
///
/// Reads (`knn`, `range`, `data`) take `&self` and may run concurrently with
/// each other. Mutators (`insert`, `remove`, `rebuild`) take `&mut self`;
/// Rust's borrow checker prevents them from overlapping with readers or with
/// each other when the tree is owned directly. See SPEC_FULL.md §5 for the
/// contract a caller sharing a tree across threads (e.g. behind a
/// `RwLock`) must uphold.
#[derive(Debug, Clone)]
pub struct KdTree<P> {
    root: Option<Node<P>>,
    config: TreeConfig,
}

impl<P: KdPoint + Send + Sync> KdTree<P> {
    /// Builds a tree from `data`, copying it in.
    ///
    /// # Errors
    ///
    /// [`KdError::InvalidConfig`] if `config.k < 1` or `config.n_leaf < 1`.
    /// [`KdError::DimensionMismatch`] if any point's dimension disagrees
    /// with `config.k`.
    #[instrument(level = "debug", skip(data), fields(n = data.len(), k = config.k, n_leaf = config.n_leaf))]
    pub fn build(data: Vec<P>, config: TreeConfig) -> Result<Self> {
        config.validate()?;
        for p in &data {
            if p.dim() != config.k {
                return Err(KdError::DimensionMismatch {
                    expected: config.k,
                    actual: p.dim(),
                });
            }
        }
        debug!(n = data.len(), parallel = data.len() >= builder::PAR_THRESHOLD, "building kd-tree");
        let root = builder::build(data, config.k, config.n_leaf);
        Ok(KdTree { root, config })
    }

    /// The tree's configuration.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Returns the at-most-`k` points closest to `query` (squared Euclidean
    /// distance) that satisfy `filter`, in ascending distance order.
    ///
    /// # Errors
    ///
    /// [`KdError::DimensionMismatch`] if `query`'s dimension disagrees with
    /// the tree's `K`.
    pub fn knn(&self, query: &[f64], k: usize, filter: &dyn Fn(&P) -> bool) -> Result<Vec<P>> {
        if query.len() != self.config.k {
            return Err(KdError::DimensionMismatch {
                expected: self.config.k,
                actual: query.len(),
            });
        }
        let query = Coord::new(query.to_vec());
        Ok(knn::knn(self.root.as_ref(), &query, k, filter))
    }

    /// Returns every point inside `query_box` that satisfies `filter`, in
    /// unspecified order.
    ///
    /// # Errors
    ///
    /// [`KdError::DimensionMismatch`] if `query_box`'s dimension disagrees
    /// with the tree's `K`.
    pub fn range(&self, query_box: &Rect, filter: &(dyn Fn(&P) -> bool + Sync)) -> Result<Vec<P>> {
        if query_box.dim() != self.config.k {
            return Err(KdError::DimensionMismatch {
                expected: self.config.k,
                actual: query_box.dim(),
            });
        }
        Ok(range::range(self.root.as_ref(), query_box, filter))
    }

    /// Returns every live point in the tree, in unspecified order.
    pub fn data(&self) -> Vec<P> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect_into(&mut out);
        }
        out
    }

    /// Inserts `p` along a single leaf path (§4.5). Does not rebalance; see
    /// OQ-M.
    ///
    /// # Errors
    ///
    /// [`KdError::DimensionMismatch`] if `p`'s dimension disagrees with the
    /// tree's `K`.
    #[instrument(level = "trace", skip(self, p))]
    pub fn insert(&mut self, p: P) -> Result<()> {
        if p.dim() != self.config.k {
            return Err(KdError::DimensionMismatch {
                expected: self.config.k,
                actual: p.dim(),
            });
        }
        trace!("inserting point");
        match &mut self.root {
            Some(root) => root.insert(p),
            None => {
                self.root = Some(Node::Leaf {
                    data: vec![p],
                    axis: 0,
                })
            }
        }
        Ok(())
    }

    /// Removes the first point along the path to `v` satisfying
    /// `predicate`. Returns the removed point, or `None` if nothing along
    /// the path matched. Never restructures the tree; see OQ-R.
    ///
    /// # Errors
    ///
    /// [`KdError::DimensionMismatch`] if `v`'s dimension disagrees with the
    /// tree's `K`.
    #[instrument(level = "trace", skip(self, predicate))]
    pub fn remove(&mut self, v: &[f64], predicate: &dyn Fn(&P) -> bool) -> Result<Option<P>> {
        if v.len() != self.config.k {
            return Err(KdError::DimensionMismatch {
                expected: self.config.k,
                actual: v.len(),
            });
        }
        trace!("removing point");
        let v = Coord::new(v.to_vec());
        Ok(self.root.as_mut().and_then(|root| root.remove(&v, predicate)))
    }

    /// Rebuilds the tree from its current live point set, replacing the
    /// root atomically. Equivalent to `Self::build(self.data(), config)`,
    /// but reuses the existing, already-validated configuration.
    #[instrument(level = "debug", skip(self))]
    pub fn rebuild(&mut self) {
        let data = self.data();
        debug!(n = data.len(), "rebuilding kd-tree");
        self.root = builder::build(data, self.config.k, self.config.n_leaf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pt(f64, f64);
    impl KdPoint for Pt {
        fn dim(&self) -> usize {
            2
        }
        fn coord(&self, axis: usize) -> f64 {
            match axis {
                0 => self.0,
                1 => self.1,
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = TreeConfig { k: 0, n_leaf: 1 };
        assert!(matches!(
            KdTree::<Pt>::build(vec![], cfg),
            Err(KdError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_dimension_mismatch_on_build() {
        #[derive(Debug, Clone, PartialEq)]
        struct P1(f64);
        impl KdPoint for P1 {
            fn dim(&self) -> usize {
                1
            }
            fn coord(&self, _axis: usize) -> f64 {
                self.0
            }
        }
        let cfg = TreeConfig::new(2);
        assert!(matches!(
            KdTree::<P1>::build(vec![P1(0.0)], cfg),
            Err(KdError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn knn_rejects_query_dimension_mismatch() {
        let tree = KdTree::build(vec![Pt(0.0, 0.0)], TreeConfig::new(2)).unwrap();
        assert!(matches!(
            tree.knn(&[0.0, 0.0, 0.0], 1, &|_| true),
            Err(KdError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn insert_then_data_contains_point() {
        let mut tree = KdTree::build(vec![Pt(0.0, 0.0)], TreeConfig::new(2)).unwrap();
        tree.insert(Pt(5.0, 5.0)).unwrap();
        assert!(tree.data().contains(&Pt(5.0, 5.0)));
    }

    #[test]
    fn remove_then_data_drops_one_copy() {
        let mut tree = KdTree::build(
            vec![Pt(0.0, 0.0), Pt(1.0, 1.0), Pt(1.0, 1.0)],
            TreeConfig::new(2),
        )
        .unwrap();
        let removed = tree
            .remove(&[1.0, 1.0], &|p: &Pt| *p == Pt(1.0, 1.0))
            .unwrap();
        assert_eq!(removed, Some(Pt(1.0, 1.0)));
        assert_eq!(
            tree.data().iter().filter(|p| **p == Pt(1.0, 1.0)).count(),
            1
        );
    }

    #[test]
    fn remove_absent_point_returns_none() {
        let mut tree = KdTree::build(vec![Pt(0.0, 0.0)], TreeConfig::new(2)).unwrap();
        let removed = tree.remove(&[9.0, 9.0], &|_| true).unwrap();
        assert_eq!(removed, None);
    }

    #[test]
    fn rebuild_preserves_population_as_a_multiset() {
        let mut tree = KdTree::build(
            vec![Pt(0.0, 0.0), Pt(1.0, 1.0), Pt(2.0, 2.0)],
            TreeConfig::new(2).with_n_leaf(1),
        )
        .unwrap();
        let mut before = tree.data();
        before.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        tree.rebuild();
        let mut after = tree.data();
        after.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        assert_eq!(before, after);
    }

    #[test]
    fn build_on_empty_data_is_a_valid_empty_tree() {
        let tree = KdTree::<Pt>::build(vec![], TreeConfig::new(2)).unwrap();
        assert!(tree.data().is_empty());
        assert_eq!(tree.knn(&[0.0, 0.0], 3, &|_| true).unwrap(), Vec::new());
    }
}
