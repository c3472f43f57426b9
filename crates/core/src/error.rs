use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while setting up a session.
///
/// Gameplay itself never fails: rejected moves and rotations are reported as
/// outcomes, and a lost game is a terminal state rather than an error.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Field too small to hold every pose.
    #[error("field of {width}x{height} cells is too small (minimum {min_width}x{min_height})")]
    InvalidDimensions {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    /// Field storage could not be allocated.
    #[error("cannot allocate field of {cells} cells")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    /// A field handed to a session still carries cells of a falling piece.
    #[error("field cell ({x}, {y}) is marked falling")]
    UnexpectedFalling { x: i32, y: i32 },

    /// Environment variable holds an unparsable value.
    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
