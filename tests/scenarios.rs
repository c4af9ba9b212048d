use kdnode::{KdTree, KdTreeError, Point};
use rstest::rstest;

fn reference_tree() -> KdTree<f64> {
    let mut tree = KdTree::new(2).unwrap();
    for point in [
        [30.0, 40.0],
        [10.0, 12.0],
        [5.0, 25.0],
        [70.0, 70.0],
        [50.0, 30.0],
        [35.0, 45.0],
    ] {
        tree.add(&point).unwrap();
    }
    tree
}

#[test]
fn removing_the_root_of_the_reference_tree() {
    kdnode::test_utils::init_tracing();
    let mut tree = reference_tree();
    assert_eq!(tree.root().unwrap().point(), &Point::from([30.0, 40.0]));

    assert_eq!(tree.remove(&[30.0, 40.0]), Ok(true));

    // Root after deletion of (30, 40) should be (35, 45)
    assert_eq!(tree.root().unwrap().point(), &Point::from([35.0, 45.0]));
    assert_eq!(tree.size(), 5);
    assert!(kdnode::test_utils::routing_invariant_holds(&tree));
}

#[rstest]
#[case([10.0, 12.0])]
#[case([5.0, 25.0])]
#[case([70.0, 70.0])]
#[case([50.0, 30.0])]
#[case([35.0, 45.0])]
fn removing_any_reference_point(#[case] point: [f64; 2]) {
    let mut tree = reference_tree();

    assert_eq!(tree.remove(&point), Ok(true));

    assert_eq!(tree.size(), 5);
    assert_eq!(tree.contains(&point), Ok(false));
    assert_eq!(tree.iter().count(), 5);
    assert!(kdnode::test_utils::routing_invariant_holds(&tree));
}

#[test]
fn emptying_the_reference_tree_in_insertion_order() {
    let mut tree = reference_tree();

    for point in [
        [30.0, 40.0],
        [10.0, 12.0],
        [5.0, 25.0],
        [70.0, 70.0],
        [50.0, 30.0],
        [35.0, 45.0],
    ] {
        assert_eq!(tree.remove(&point), Ok(true));
        assert!(kdnode::test_utils::routing_invariant_holds(&tree));
    }

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.find_minimum(0), Ok(None));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
fn empty_tree_has_no_minimum_on_any_axis(#[case] dims: usize) {
    let tree: KdTree<i32> = KdTree::new(dims).unwrap();

    for axis in 0..dims {
        assert_eq!(tree.find_minimum(axis), Ok(None));
    }
    assert_eq!(
        tree.find_minimum(dims),
        Err(KdTreeError::AxisOutOfRange { axis: dims, dims })
    );
}

#[test]
fn single_point_tree_becomes_empty() {
    let mut tree: KdTree<f64> = KdTree::new(2).unwrap();
    tree.add(&[1.0, 1.0]).unwrap();

    assert_eq!(tree.remove(&[1.0, 1.0]), Ok(true));

    assert!(tree.root().is_none());
    assert_eq!(tree.remove(&[1.0, 1.0]), Ok(false));
}

#[test]
fn three_dimensional_removal_keeps_every_other_point() {
    let points = [
        [5, 5, 5],
        [2, 8, 1],
        [9, 1, 7],
        [1, 3, 9],
        [3, 9, 2],
        [8, 4, 4],
        [7, 2, 8],
        [6, 6, 6],
    ];
    let mut tree: KdTree<i16> = KdTree::new(3).unwrap();
    for point in &points {
        tree.add(point).unwrap();
    }

    assert_eq!(tree.remove(&[5, 5, 5]), Ok(true));

    for point in &points[1..] {
        assert_eq!(tree.contains(point), Ok(true), "lost {point:?}");
    }
    assert_eq!(tree.contains(&[5, 5, 5]), Ok(false));
    assert_eq!(tree.find_minimum(2).unwrap().unwrap().coords(), &[2, 8, 1]);
    assert!(kdnode::test_utils::routing_invariant_holds(&tree));
}

#[test]
fn malformed_input_is_rejected_before_any_change() {
    let mut tree = reference_tree();
    let before: Vec<Point<f64>> = tree.iter().cloned().collect();

    assert_eq!(
        tree.add(&[1.0, 2.0, 3.0]),
        Err(KdTreeError::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
    assert_eq!(
        tree.remove(&[f64::NAN, 40.0]),
        Err(KdTreeError::NonNumericCoordinate { axis: 0 })
    );
    assert_eq!(
        tree.contains(&[30.0]),
        Err(KdTreeError::DimensionMismatch {
            expected: 2,
            actual: 1
        })
    );

    let after: Vec<Point<f64>> = tree.iter().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(tree.size(), 6);
}
