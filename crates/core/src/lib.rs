//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game: the pose geometry, the
//! occupancy field, movement and locking, rotation, and line clearing. It has no
//! dependencies on rendering, input devices or clocks; those reach it through the
//! narrow [`DisplaySurface`] and [`InputSource`] traits.
//!
//! # Module Structure
//!
//! - [`geometry`]: static footprint, width, successor and pivot for all 19 poses
//! - [`field`]: width x height occupancy grid with row removal
//! - [`piece`]: the active piece with its committed and proposed pose/anchor
//! - [`movement`]: the single commit routine behind gravity, moves and hard drop
//! - [`rotation`]: clockwise rotation, no kicks
//! - [`line_clear`]: bottom-up removal of fully settled rows
//! - [`rng`]: seeded uniform shape generator
//! - [`input`]: edge-triggered input latch and the sub-poll cadence
//! - [`session`]: one game from first spawn to loss
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: every lookahead shape is drawn independently; no bag
//! - **Fixed Pivots**: each pose rotates into its successor with a fixed anchor shift
//! - **No Kicks**: a rotation that would leave the field or hit the stack does nothing
//! - **Clamped Moves**: horizontal moves stop at the walls instead of failing
//! - **Immediate Lock**: a piece locks the moment a fall is blocked
//! - **Loss**: any settled cell in row 0 after a lock, or a blocked spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig};
//! use blockfall_types::Outcome;
//!
//! let mut session = Session::new(SessionConfig::seeded(12345)).unwrap();
//!
//! session.move_right();
//! session.rotate();
//! let outcome = session.hard_drop();
//!
//! assert!(matches!(outcome, Outcome::Locked { .. }));
//! assert_eq!(session.field().settled_count(), 4);
//! ```
//!
//! # Timing
//!
//! The core never sleeps. A driver calls [`Session::poll`] every
//! [`POLL_INTERVAL_MS`](types::POLL_INTERVAL_MS); every fifth poll applies gravity,
//! giving one row per second.

pub mod config;
pub mod display;
pub mod error;
pub mod field;
pub mod geometry;
pub mod input;
pub mod line_clear;
pub mod movement;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use display::{DisplaySurface, TextSurface};
pub use error::{CoreError, Result};
pub use field::Field;
pub use geometry::{cells_at, Coord, PoseGeometry, GEOMETRY};
pub use input::{Cadence, InputLatch, InputSource};
pub use line_clear::clear_completed_rows;
pub use piece::Piece;
pub use rng::{ShapeGenerator, SimpleRng};
pub use session::Session;
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
