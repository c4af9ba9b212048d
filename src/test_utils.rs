//! Seeded data generators and structural checks shared by the unit tests,
//! integration tests and benchmarks. Enabled by the `test_utils` feature.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::kdtree::KdTree;
use crate::node::Node;
use crate::types::Axis;

/// Deterministic RNG so failures can be replayed from the seed alone.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn rand_point_f64<R: Rng>(rng: &mut R, dims: usize) -> Vec<f64> {
    (0..dims).map(|_| rng.random_range(-100.0..100.0)).collect()
}

pub fn rand_points_f64(seed: u64, qty: usize, dims: usize) -> Vec<Vec<f64>> {
    let mut rng = seeded_rng(seed);
    (0..qty).map(|_| rand_point_f64(&mut rng, dims)).collect()
}

/// Integer points drawn from `0..span` on every axis. A small `span` gives
/// plenty of shared co-ordinates and exact duplicates.
pub fn rand_points_i32(seed: u64, qty: usize, dims: usize, span: i32) -> Vec<Vec<i32>> {
    let mut rng = seeded_rng(seed);
    (0..qty)
        .map(|_| (0..dims).map(|_| rng.random_range(0..span)).collect())
        .collect()
}

/// Builds a tree by adding `points` in order.
pub fn build_tree<A: Axis>(dims: usize, points: &[Vec<A>]) -> KdTree<A> {
    let mut tree = KdTree::new(dims).expect("test trees have at least one dimension");
    for point in points {
        tree.add(point).expect("test points match the tree's dimensions");
    }
    tree
}

/// Checks every node against every point below it: left descendants must be
/// strictly less on the node's axis, right descendants greater or equal.
pub fn routing_invariant_holds<A: Axis>(tree: &KdTree<A>) -> bool {
    let mut stack: Vec<(&Node<A>, usize)> =
        tree.root().map(|n| (n, 0)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        let axis = depth % tree.dims();
        let split = node.point()[axis];

        if let Some(left) = node.left() {
            if left.iter().any(|p| !(p[axis] < split)) {
                return false;
            }
            stack.push((left, depth + 1));
        }
        if let Some(right) = node.right() {
            if right.iter().any(|p| p[axis] < split) {
                return false;
            }
            stack.push((right, depth + 1));
        }
    }
    true
}

/// Routes `tracing` output to the test harness' captured stdout.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {}
