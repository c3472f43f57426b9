//! Movement module - validates and commits proposed anchors
//!
//! Every translation goes through [`commit`]: gravity, soft drop, left/right, and the
//! single-step loop hard drop is built from. A blocked horizontal request is reverted;
//! a blocked vertical request locks the piece in place.

use tracing::{debug, trace};

use crate::field::Field;
use crate::piece::Piece;
use crate::types::{CellState, Commit};

/// Resolve the piece's pending anchor against the field.
///
/// The proposed x is clamped into the field first, so a push into a wall settles at
/// the wall instead of failing; a request clamped back onto the current anchor reports
/// [`Commit::Rejected`] since nothing moved. If the clamped target leaves the bottom
/// or overlaps a settled cell, a horizontal request is reverted ([`Commit::Rejected`])
/// and a vertical one locks the piece where it stands ([`Commit::Locked`]). Otherwise
/// the falling cells are repainted at the target ([`Commit::Moved`]).
///
/// Locking only settles the cells; spawning the next piece is the caller's job.
pub fn commit(field: &mut Field, piece: &mut Piece) -> Commit {
    debug_assert_eq!(piece.next_pose(), piece.pose(), "rotation pending in commit");

    piece.clamp_next_x(field.width());
    if !piece.has_pending() {
        return Commit::Rejected;
    }

    if is_blocked(field, &piece.proposed_cells()) {
        let (next_x, _) = piece.next_anchor();
        if next_x != piece.x() {
            trace!(x = piece.x(), next_x, "horizontal move rejected");
            piece.revert();
            return Commit::Rejected;
        }

        lock(field, piece);
        return Commit::Locked;
    }

    field.mark(&piece.cells(), CellState::Empty);
    piece.accept();
    field.mark(&piece.cells(), CellState::Falling);
    Commit::Moved
}

/// Shift one column left or right (`dx` = -1 or 1) and commit
pub fn shift(field: &mut Field, piece: &mut Piece, dx: i32) -> Commit {
    piece.propose_shift(dx);
    commit(field, piece)
}

/// Fall one row and commit
pub fn fall(field: &mut Field, piece: &mut Piece) -> Commit {
    piece.propose_drop();
    commit(field, piece)
}

/// Fall one row at a time until the piece locks.
///
/// Returns the number of rows fallen before locking.
pub fn drop_until_locked(field: &mut Field, piece: &mut Piece) -> u32 {
    let mut distance = 0;
    loop {
        match fall(field, piece) {
            Commit::Moved => distance += 1,
            Commit::Locked => return distance,
            // Only horizontal requests are rejected; a fall either moves or locks.
            Commit::Rejected => return distance,
        }
    }
}

/// Settle the piece's committed cells
pub fn lock(field: &mut Field, piece: &mut Piece) {
    piece.revert();
    field.mark(&piece.cells(), CellState::Settled);
    debug!(
        pose = piece.pose().as_str(),
        x = piece.x(),
        y = piece.y(),
        "piece locked"
    );
}

/// Whether any cell is below the floor, outside the walls, above the top, or settled
fn is_blocked(field: &Field, cells: &[(i32, i32)]) -> bool {
    cells
        .iter()
        .any(|&(x, y)| !field.in_bounds(x, y) || field.occupied_by_settled(x, y))
}
