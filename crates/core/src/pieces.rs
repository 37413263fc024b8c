//! Piece shapes and rotation.
//!
//! Every kind is four `(dy, dx)` offsets around a pivot cell. A piece's
//! current shape is a copy of the canonical offsets that rotation rewrites in
//! place, so negative offsets (cells above or left of the pivot) are normal.

use crate::types::PieceKind;

/// Offset of a single block relative to the piece pivot, as `(dy, dx)`.
pub type BlockOffset = (i8, i8);

/// Shape of a piece: four block offsets around the pivot.
pub type PieceShape = [BlockOffset; 4];

/// Pivot spawn position `(x, y)`: horizontally centered on the top row.
pub const SPAWN_POSITION: (i8, i8) = (4, 0);

/// Canonical (unrotated) shape for a piece kind.
pub const fn canonical_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        PieceKind::J => [(-1, -1), (0, -1), (0, 0), (0, 1)],
        PieceKind::L => [(-1, 1), (0, -1), (0, 0), (0, 1)],
        PieceKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        PieceKind::S => [(0, 0), (0, 1), (-1, -1), (-1, 0)],
        PieceKind::T => [(-1, 0), (0, -1), (0, 0), (0, 1)],
        PieceKind::Z => [(-1, 0), (-1, 1), (0, -1), (0, 0)],
    }
}

/// Rotate a shape 90 degrees around its pivot: `(dy, dx) -> (dx, -dy)`.
///
/// Pure transform; whether the rotated shape fits on the board is the
/// caller's decision.
pub fn rotated(shape: &PieceShape) -> PieceShape {
    let mut out = *shape;
    for cell in &mut out {
        *cell = (cell.1, -cell.0);
    }
    out
}
