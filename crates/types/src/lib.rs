//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data shared by the engine and anything that drives or
//! observes it. Nothing here holds game state; the geometry of each pose lives in
//! `blockfall-core`.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, y grows downward)
//! - **Spawn**: y = 0, horizontally centered for the spawning pose
//!
//! # Cadence
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 1000 | Wall time between gravity steps |
//! | `INPUT_POLLS_PER_GRAVITY` | 5 | Input sub-polls per gravity step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{LogicalInput, Pose, Shape, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape.base_pose(), Pose::T);
//! assert_eq!(Pose::T.shape(), Shape::T);
//! assert_eq!(shape.cycle_len(), 4);
//!
//! assert_eq!(LogicalInput::from_str("hardDrop"), Some(LogicalInput::HardDrop));
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u16 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u16 = 20;

/// Wall time between two gravity steps (1 second per row)
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Number of input sub-polls sampled within one gravity interval
pub const INPUT_POLLS_PER_GRAVITY: u32 = 5;

/// Delay the caller should leave between two sub-polls
pub const POLL_INTERVAL_MS: u32 = GRAVITY_INTERVAL_MS / INPUT_POLLS_PER_GRAVITY;

/// Number of distinct shapes
pub const SHAPE_COUNT: usize = 7;

/// Number of distinct (shape, rotation) poses
pub const POSE_COUNT: usize = 19;


/// The seven tetromino shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Shape {
    /// All shapes, in the order the randomizer indexes them
    pub const ALL: [Shape; SHAPE_COUNT] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "o" => Some(Shape::O),
            "s" => Some(Shape::S),
            "t" => Some(Shape::T),
            "z" => Some(Shape::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::J => "j",
            Shape::L => "l",
            Shape::O => "o",
            Shape::S => "s",
            Shape::T => "t",
            Shape::Z => "z",
        }
    }

    /// Pose a freshly spawned piece of this shape takes
    pub fn base_pose(&self) -> Pose {
        match self {
            Shape::I => Pose::I,
            Shape::J => Pose::J,
            Shape::L => Pose::L,
            Shape::O => Pose::O,
            Shape::S => Pose::S,
            Shape::T => Pose::T,
            Shape::Z => Pose::Z,
        }
    }

    /// Number of distinct poses in this shape's clockwise cycle (1, 2 or 4)
    pub fn cycle_len(&self) -> usize {
        match self {
            Shape::O => 1,
            Shape::I | Shape::S | Shape::Z => 2,
            Shape::J | Shape::L | Shape::T => 4,
        }
    }
}

/// One (shape, rotation) variant.
///
/// The suffix is the clockwise rotation in degrees from the base pose. The base `I`
/// stands upright; `I90` lies flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pose {
    I,
    I90,
    J,
    J90,
    J180,
    J270,
    L,
    L90,
    L180,
    L270,
    O,
    S,
    S90,
    T,
    T90,
    T180,
    T270,
    Z,
    Z90,
}

impl Pose {
    /// All poses, in geometry table order
    pub const ALL: [Pose; POSE_COUNT] = [
        Pose::I,
        Pose::I90,
        Pose::J,
        Pose::J90,
        Pose::J180,
        Pose::J270,
        Pose::L,
        Pose::L90,
        Pose::L180,
        Pose::L270,
        Pose::O,
        Pose::S,
        Pose::S90,
        Pose::T,
        Pose::T90,
        Pose::T180,
        Pose::T270,
        Pose::Z,
        Pose::Z90,
    ];

    /// Row of this pose in the geometry table
    #[inline(always)]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Shape this pose belongs to
    pub fn shape(&self) -> Shape {
        match self {
            Pose::I | Pose::I90 => Shape::I,
            Pose::J | Pose::J90 | Pose::J180 | Pose::J270 => Shape::J,
            Pose::L | Pose::L90 | Pose::L180 | Pose::L270 => Shape::L,
            Pose::O => Shape::O,
            Pose::S | Pose::S90 => Shape::S,
            Pose::T | Pose::T90 | Pose::T180 | Pose::T270 => Shape::T,
            Pose::Z | Pose::Z90 => Shape::Z,
        }
    }

    /// Clockwise quarter turns from the shape's base pose
    pub fn rotation(&self) -> u8 {
        match self {
            Pose::I | Pose::J | Pose::L | Pose::O | Pose::S | Pose::T | Pose::Z => 0,
            Pose::I90 | Pose::J90 | Pose::L90 | Pose::S90 | Pose::T90 | Pose::Z90 => 1,
            Pose::J180 | Pose::L180 | Pose::T180 => 2,
            Pose::J270 | Pose::L270 | Pose::T270 => 3,
        }
    }

    /// Convert to string, e.g. `"t"`, `"t_90"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Pose::I => "i",
            Pose::I90 => "i_90",
            Pose::J => "j",
            Pose::J90 => "j_90",
            Pose::J180 => "j_180",
            Pose::J270 => "j_270",
            Pose::L => "l",
            Pose::L90 => "l_90",
            Pose::L180 => "l_180",
            Pose::L270 => "l_270",
            Pose::O => "o",
            Pose::S => "s",
            Pose::S90 => "s_90",
            Pose::T => "t",
            Pose::T90 => "t_90",
            Pose::T180 => "t_180",
            Pose::T270 => "t_270",
            Pose::Z => "z",
            Pose::Z90 => "z_90",
        }
    }
}

/// State of one field cell
///
/// - **Empty**: nothing here
/// - **Falling**: covered by the active piece, not yet locked
/// - **Settled**: permanently occupied; counts for line clears and loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Falling,
    Settled,
}

impl CellState {
    /// Compact encoding used by snapshots (0 empty, 1 falling, 2 settled)
    pub fn as_u8(&self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Falling => 1,
            CellState::Settled => 2,
        }
    }

    /// Character-cell glyph
    pub fn as_char(&self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Falling => '#',
            CellState::Settled => '@',
        }
    }
}

/// Logical inputs a player can press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalInput {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (may lock)
    SoftDrop,
    /// Fall until the piece locks
    HardDrop,
    /// Rotate piece clockwise
    Rotate,
    /// Toggle pause state
    Pause,
}

impl LogicalInput {
    pub const ALL: [LogicalInput; 6] = [
        LogicalInput::MoveLeft,
        LogicalInput::MoveRight,
        LogicalInput::SoftDrop,
        LogicalInput::HardDrop,
        LogicalInput::Rotate,
        LogicalInput::Pause,
    ];

    /// Slot of this input in per-input tables
    #[inline(always)]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse input from string (case-insensitive camelCase)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(LogicalInput::MoveLeft),
            "moveright" => Some(LogicalInput::MoveRight),
            "softdrop" => Some(LogicalInput::SoftDrop),
            "harddrop" => Some(LogicalInput::HardDrop),
            "rotate" => Some(LogicalInput::Rotate),
            "pause" => Some(LogicalInput::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalInput::MoveLeft => "moveLeft",
            LogicalInput::MoveRight => "moveRight",
            LogicalInput::SoftDrop => "softDrop",
            LogicalInput::HardDrop => "hardDrop",
            LogicalInput::Rotate => "rotate",
            LogicalInput::Pause => "pause",
        }
    }
}

/// A press or release of one logical input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub input: LogicalInput,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(input: LogicalInput) -> Self {
        Self {
            input,
            pressed: true,
        }
    }

    pub fn release(input: LogicalInput) -> Self {
        Self {
            input,
            pressed: false,
        }
    }
}

/// Result of committing a proposed anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The piece now sits at the proposed anchor
    Moved,
    /// The piece did not move (horizontal collision, or clamped onto its own anchor)
    Rejected,
    /// A downward request collided; the piece's cells are now settled
    Locked,
}

/// Result of a session command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The piece moved or rotated
    Moved,
    /// The request was invalid and nothing changed
    Rejected,
    /// The piece locked; the lookahead is now active
    Locked { rows_cleared: u32 },
    /// The piece locked and the session is lost
    GameOver { rows_cleared: u32 },
    /// The pause flag flipped; `paused` is its new value
    PauseToggled { paused: bool },
    /// The session is paused or already over; nothing was attempted
    Idle,
}

impl Outcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Outcome::GameOver { .. })
    }

    /// Rows removed by the lock this outcome reports, 0 if it did not lock
    pub fn rows_cleared(&self) -> u32 {
        match self {
            Outcome::Locked { rows_cleared } | Outcome::GameOver { rows_cleared } => *rows_cleared,
            _ => 0,
        }
    }
}

/// Summary of one input sub-poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PollReport {
    /// Press edges that reached a command
    pub commands: u32,
    /// Whether this sub-poll closed a gravity interval
    pub gravity_applied: bool,
    /// Pieces locked during this sub-poll
    pub locks: u32,
    /// Rows removed during this sub-poll
    pub rows_cleared: u32,
    pub game_over: bool,
}
