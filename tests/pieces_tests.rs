//! Shape table and rotation transform properties.

use blockfall::core::{canonical_shape, rotated, SPAWN_POSITION};
use blockfall::types::PieceKind;

fn sorted(shape: &[(i8, i8); 4]) -> Vec<(i8, i8)> {
    let mut v = shape.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn spawn_pivot_is_centered_on_the_top_row() {
    assert_eq!(SPAWN_POSITION, (4, 0));
}

#[test]
fn every_shape_has_four_blocks_near_the_pivot() {
    for kind in PieceKind::ALL {
        let shape = canonical_shape(kind);
        assert_eq!(shape.len(), 4);
        for (dy, dx) in shape {
            assert!(dy.abs() <= 2 && dx.abs() <= 2, "{:?} strays from pivot", kind);
        }
    }
}

#[test]
fn four_rotations_are_the_identity() {
    for kind in PieceKind::ALL {
        let original = canonical_shape(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = rotated(&shape);
        }
        assert_eq!(sorted(&shape), sorted(&original), "{:?}", kind);
    }
}

#[test]
fn rotation_transform_is_a_quarter_turn() {
    // (dy, dx) -> (dx, -dy) on a lone block.
    let shape = [(0, 1), (0, 0), (0, 0), (0, 0)];
    let turned = rotated(&shape);
    assert_eq!(turned[0], (1, 0));
    let turned = rotated(&turned);
    assert_eq!(turned[0], (0, -1));
    let turned = rotated(&turned);
    assert_eq!(turned[0], (-1, 0));
}

#[test]
fn square_covers_a_two_by_two() {
    let shape = canonical_shape(PieceKind::O);
    assert_eq!(sorted(&shape), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn bar_is_a_horizontal_four() {
    let shape = canonical_shape(PieceKind::I);
    assert_eq!(sorted(&shape), vec![(0, -1), (0, 0), (0, 1), (0, 2)]);
}
