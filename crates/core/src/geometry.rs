//! Geometry module - static pose table
//!
//! One row per pose: the four cells it covers relative to its anchor (the top-left
//! corner of its bounding box), the bounding box, its clockwise successor, and the
//! anchor adjustment applied when rotating into that successor.

use crate::types::{Pose, POSE_COUNT};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// The four cell offsets a pose occupies
pub type Footprint = [CellOffset; 4];

/// Absolute field coordinate (x, y)
pub type Coord = (i32, i32);

/// Reference geometry of one pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseGeometry {
    pub pose: Pose,
    pub footprint: Footprint,
    /// Bounding width, used for horizontal clamping
    pub width: u8,
    /// Bounding height
    pub height: u8,
    /// Next pose in the clockwise cycle (O maps to itself)
    pub successor: Pose,
    /// Anchor adjustment applied when rotating into `successor`
    pub pivot: (i8, i8),
}

const fn row(
    pose: Pose,
    footprint: Footprint,
    width: u8,
    height: u8,
    successor: Pose,
    pivot: (i8, i8),
) -> PoseGeometry {
    PoseGeometry {
        pose,
        footprint,
        width,
        height,
        successor,
        pivot,
    }
}

/// Indexed by [`Pose::index`]
pub static GEOMETRY: [PoseGeometry; POSE_COUNT] = [
    // I stands upright; rotating lays it flat one row lower, one column left.
    row(Pose::I, [(0, 0), (0, 1), (0, 2), (0, 3)], 1, 4, Pose::I90, (-1, 1)),
    row(Pose::I90, [(0, 0), (1, 0), (2, 0), (3, 0)], 4, 1, Pose::I, (1, -1)),
    row(Pose::J, [(1, 0), (1, 1), (1, 2), (0, 2)], 2, 3, Pose::J90, (0, 0)),
    row(Pose::J90, [(0, 0), (0, 1), (1, 1), (2, 1)], 3, 2, Pose::J180, (0, 0)),
    row(Pose::J180, [(0, 0), (1, 0), (0, 1), (0, 2)], 2, 3, Pose::J270, (0, 0)),
    row(Pose::J270, [(0, 0), (1, 0), (2, 0), (2, 1)], 3, 2, Pose::J, (0, 0)),
    row(Pose::L, [(0, 0), (0, 1), (0, 2), (1, 2)], 2, 3, Pose::L90, (0, 0)),
    row(Pose::L90, [(0, 0), (1, 0), (2, 0), (0, 1)], 3, 2, Pose::L180, (0, 0)),
    row(Pose::L180, [(0, 0), (1, 0), (1, 1), (1, 2)], 2, 3, Pose::L270, (0, 0)),
    row(Pose::L270, [(0, 1), (1, 1), (2, 1), (2, 0)], 3, 2, Pose::L, (0, 0)),
    row(Pose::O, [(0, 0), (1, 0), (0, 1), (1, 1)], 2, 2, Pose::O, (0, 0)),
    row(Pose::S, [(1, 0), (2, 0), (0, 1), (1, 1)], 3, 2, Pose::S90, (0, 0)),
    row(Pose::S90, [(0, 0), (0, 1), (1, 1), (1, 2)], 2, 3, Pose::S, (0, 0)),
    row(Pose::T, [(0, 0), (1, 0), (2, 0), (1, 1)], 3, 2, Pose::T90, (0, 0)),
    row(Pose::T90, [(1, 0), (0, 1), (1, 1), (1, 2)], 2, 3, Pose::T180, (0, 0)),
    row(Pose::T180, [(1, 0), (0, 1), (1, 1), (2, 1)], 3, 2, Pose::T270, (0, 0)),
    row(Pose::T270, [(0, 0), (0, 1), (1, 1), (0, 2)], 2, 3, Pose::T, (0, 0)),
    row(Pose::Z, [(0, 0), (1, 0), (1, 1), (2, 1)], 3, 2, Pose::Z90, (0, 0)),
    row(Pose::Z90, [(1, 0), (0, 1), (1, 1), (0, 2)], 2, 3, Pose::Z, (0, 0)),
];

/// Look up the geometry row for a pose
#[inline(always)]
pub fn geometry(pose: Pose) -> &'static PoseGeometry {
    &GEOMETRY[pose.index()]
}

/// Cell offsets for a pose
#[inline]
pub fn footprint(pose: Pose) -> &'static Footprint {
    &geometry(pose).footprint
}

/// Bounding width for a pose
#[inline]
pub fn width(pose: Pose) -> u8 {
    geometry(pose).width
}

/// Clockwise successor of a pose
#[inline]
pub fn successor(pose: Pose) -> Pose {
    geometry(pose).successor
}

/// Absolute cells a pose covers when anchored at (x, y)
pub fn cells_at(pose: Pose, x: i32, y: i32) -> [Coord; 4] {
    footprint(pose).map(|(dx, dy)| (x + dx as i32, y + dy as i32))
}
