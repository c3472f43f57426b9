//! Rotation module - clockwise rotation with a fixed per-pose pivot
//!
//! Each pose rotates into its table successor with the anchor shifted by that pose's
//! pivot. There are no kicks: if the rotated piece would leave the field or cover a
//! settled cell, the rotation does nothing.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::field::Field;
use crate::geometry::Coord;
use crate::piece::Piece;
use crate::types::CellState;

/// Cells the proposed pose covers that the committed pose does not.
///
/// Only these can collide with settled cells; the rest are the piece's own.
pub fn newly_occupied(piece: &Piece) -> ArrayVec<Coord, 4> {
    let current = piece.cells();
    piece
        .proposed_cells()
        .into_iter()
        .filter(|cell| !current.contains(cell))
        .collect()
}

/// Rotate the piece clockwise if the rotated footprint fits.
///
/// Returns true if the pose changed. On failure pose, anchor and field are untouched.
pub fn rotate(field: &mut Field, piece: &mut Piece) -> bool {
    piece.propose_rotation();
    if piece.next_pose() == piece.pose() {
        piece.revert();
        return false;
    }

    let in_bounds = piece
        .proposed_cells()
        .iter()
        .all(|&(x, y)| field.in_bounds(x, y));
    let clear = newly_occupied(piece)
        .iter()
        .all(|&(x, y)| !field.occupied_by_settled(x, y));

    if !(in_bounds && clear) {
        trace!(
            pose = piece.pose().as_str(),
            x = piece.x(),
            y = piece.y(),
            in_bounds,
            "rotation rejected"
        );
        piece.revert();
        return false;
    }

    field.mark(&piece.cells(), CellState::Empty);
    piece.accept();
    field.mark(&piece.cells(), CellState::Falling);
    true
}
