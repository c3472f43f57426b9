//! Piece module - the active falling piece
//!
//! A piece carries its committed pose and anchor plus one proposed pose/anchor that
//! the movement and rotation engines either accept or revert. Between commits the
//! proposal equals the committed state.

use crate::geometry::{self, Coord};
use crate::types::{Pose, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pose: Pose,
    x: i32,
    y: i32,
    next_pose: Pose,
    next_x: i32,
    next_y: i32,
}

impl Piece {
    /// Piece at the given pose and anchor, nothing pending
    pub fn new(pose: Pose, x: i32, y: i32) -> Self {
        Self {
            pose,
            x,
            y,
            next_pose: pose,
            next_x: x,
            next_y: y,
        }
    }

    /// Fresh piece of `shape` in its base pose, horizontally centered, at y = 0
    pub fn spawn(shape: Shape, field_width: u16) -> Self {
        let pose = shape.base_pose();
        let x = (field_width as i32 - geometry::width(pose) as i32) / 2;
        Self::new(pose, x, 0)
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn shape(&self) -> Shape {
        self.pose.shape()
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn anchor(&self) -> Coord {
        (self.x, self.y)
    }

    pub fn next_pose(&self) -> Pose {
        self.next_pose
    }

    pub fn next_anchor(&self) -> Coord {
        (self.next_x, self.next_y)
    }

    /// Cells covered at the committed pose and anchor
    pub fn cells(&self) -> [Coord; 4] {
        geometry::cells_at(self.pose, self.x, self.y)
    }

    /// Cells the proposed pose and anchor would cover
    pub fn proposed_cells(&self) -> [Coord; 4] {
        geometry::cells_at(self.next_pose, self.next_x, self.next_y)
    }

    pub fn has_pending(&self) -> bool {
        self.next_pose != self.pose || self.next_x != self.x || self.next_y != self.y
    }

    /// Propose a horizontal shift of `dx` columns
    pub fn propose_shift(&mut self, dx: i32) {
        self.next_x += dx;
    }

    /// Propose a fall of one row
    pub fn propose_drop(&mut self) {
        self.next_y += 1;
    }

    /// Propose the clockwise successor pose with its pivot adjustment
    pub fn propose_rotation(&mut self) {
        let geo = geometry::geometry(self.pose);
        self.next_pose = geo.successor;
        self.next_x = self.x + geo.pivot.0 as i32;
        self.next_y = self.y + geo.pivot.1 as i32;
    }

    /// Clamp the proposed x so the bounding box stays within `field_width`
    pub(crate) fn clamp_next_x(&mut self, field_width: u16) {
        let max_x = field_width as i32 - geometry::width(self.next_pose) as i32;
        self.next_x = self.next_x.clamp(0, max_x.max(0));
    }

    /// Make the proposal the committed state
    pub(crate) fn accept(&mut self) {
        self.pose = self.next_pose;
        self.x = self.next_x;
        self.y = self.next_y;
    }

    /// Drop the proposal
    pub(crate) fn revert(&mut self) {
        self.next_pose = self.pose;
        self.next_x = self.x;
        self.next_y = self.y;
    }
}
