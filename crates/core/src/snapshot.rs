use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::types::{Pose, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub pose: Pose,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape(),
            pose: value.pose(),
            x: value.x(),
            y: value.y(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cell codes: 0 empty, 1 falling, 2 settled
    pub board: Vec<u8>,
    pub active: ActiveSnapshot,
    pub next: Shape,
    pub rows_cleared: u32,
    pub paused: bool,
    pub game_over: bool,
    pub seed: u32,
}

impl SessionSnapshot {
    /// Cell code at (x, y), `None` outside the field
    pub fn cell(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
