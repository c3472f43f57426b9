//! Session module - one game from first spawn to loss
//!
//! A [`Session`] exclusively owns the field, the active piece and the lookahead. Every
//! command runs to completion before returning; callers observe the result as an
//! [`Outcome`] and, if they want to draw it, through [`Session::repaint`] or
//! [`Session::snapshot`].
//!
//! # Lock sequence
//!
//! 1. The piece's cells become settled, and row 0 is sampled for settled cells.
//! 2. Completed rows are removed and counted.
//! 3. If the row 0 sample was set, the session is lost. Clearing rows below does not
//!    undo it.
//! 4. The lookahead spawns as the new active piece and a new lookahead is drawn. A
//!    spawn footprint that overlaps a settled cell also loses the session; the locked
//!    piece then stays as the active one.

use tracing::{debug, info, trace};

use crate::config::SessionConfig;
use crate::display::DisplaySurface;
use crate::error::{CoreError, Result};
use crate::field::Field;
use crate::geometry;
use crate::input::{Cadence, InputLatch, InputSource};
use crate::line_clear::clear_completed_rows;
use crate::movement;
use crate::piece::Piece;
use crate::rng::ShapeGenerator;
use crate::rotation;
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{
    CellState, Commit, InputEvent, LogicalInput, Outcome, PollReport, Pose, Shape,
};

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    field: Field,
    active: Piece,
    next: Shape,
    generator: ShapeGenerator,
    rows_cleared: u32,
    paused: bool,
    game_over: bool,
    latch: InputLatch,
    cadence: Cadence,
}

impl Session {
    /// Start a session on an empty field.
    ///
    /// Draws the first active shape and the lookahead from the configured seed (or a
    /// random one) and spawns the active piece.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let field = Field::new(config.width, config.height)?;
        let mut generator = ShapeGenerator::new(config.resolve_seed());
        let first = generator.draw();
        let next = generator.draw();
        Ok(Self::assemble(config, field, generator, first, next))
    }

    /// Start a session on a prepared field with chosen active and lookahead shapes.
    ///
    /// The field may hold settled cells but no falling ones. Its dimensions replace
    /// the configured ones. If the active piece cannot spawn the session starts lost.
    pub fn with_field(
        mut config: SessionConfig,
        field: Field,
        active: Shape,
        next: Shape,
    ) -> Result<Self> {
        if let Some((x, y)) = field.first_falling() {
            return Err(CoreError::UnexpectedFalling { x, y });
        }
        config.width = field.width();
        config.height = field.height();
        let generator = ShapeGenerator::new(config.resolve_seed());
        Ok(Self::assemble(config, field, generator, active, next))
    }

    fn assemble(
        config: SessionConfig,
        field: Field,
        generator: ShapeGenerator,
        active: Shape,
        next: Shape,
    ) -> Self {
        let piece = Piece::spawn(active, field.width());
        let mut session = Self {
            config,
            field,
            active: piece,
            next,
            generator,
            rows_cleared: 0,
            paused: false,
            game_over: false,
            latch: InputLatch::new(),
            cadence: Cadence::default(),
        };
        session.enter(piece);
        info!(
            width = session.field.width(),
            height = session.field.height(),
            seed = session.generator.seed(),
            "session started"
        );
        session
    }

    /// Start over after a loss has been acknowledged.
    ///
    /// Keeps dimensions and the generator's stream; resets the field, the cleared-row
    /// count, the pause flag and the input latches.
    pub fn restart(&mut self) {
        self.field.clear();
        self.rows_cleared = 0;
        self.paused = false;
        self.game_over = false;
        self.latch.reset();
        self.cadence.reset();

        let first = self.generator.draw();
        self.next = self.generator.draw();
        self.spawn(first);
        info!(seed = self.generator.seed(), "session restarted");
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The falling piece. After a blocked spawn this is the last piece that locked, or
    /// the unplaced first piece when the session started lost.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Lookahead shape
    pub fn next(&self) -> Shape {
        self.next
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Move the active piece to an explicit pose and anchor.
    ///
    /// Fails, leaving everything untouched, if the target leaves the field or covers a
    /// settled cell, or if the session is over.
    pub fn place_active(&mut self, pose: Pose, x: i32, y: i32) -> bool {
        if self.game_over {
            return false;
        }
        let target = geometry::cells_at(pose, x, y);
        let fits = target.iter().all(|&(cx, cy)| {
            self.field.in_bounds(cx, cy) && !self.field.occupied_by_settled(cx, cy)
        });
        if !fits {
            return false;
        }

        self.field.mark(&self.active.cells(), CellState::Empty);
        self.active = Piece::new(pose, x, y);
        self.field.mark(&self.active.cells(), CellState::Falling);
        true
    }

    pub fn move_left(&mut self) -> Outcome {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> Outcome {
        self.shift(1)
    }

    fn shift(&mut self, dx: i32) -> Outcome {
        if !self.playable() {
            return Outcome::Idle;
        }
        let commit = movement::shift(&mut self.field, &mut self.active, dx);
        self.resolve(commit)
    }

    /// Fall one row on request
    pub fn soft_drop(&mut self) -> Outcome {
        if !self.playable() {
            return Outcome::Idle;
        }
        let commit = movement::fall(&mut self.field, &mut self.active);
        self.resolve(commit)
    }

    /// Fall one row on the timer
    pub fn gravity_tick(&mut self) -> Outcome {
        if !self.playable() {
            return Outcome::Idle;
        }
        trace!(y = self.active.y(), "gravity");
        let commit = movement::fall(&mut self.field, &mut self.active);
        self.resolve(commit)
    }

    /// Fall until the piece locks
    pub fn hard_drop(&mut self) -> Outcome {
        if !self.playable() {
            return Outcome::Idle;
        }
        let distance = movement::drop_until_locked(&mut self.field, &mut self.active);
        trace!(distance, "hard drop");
        self.after_lock()
    }

    pub fn rotate(&mut self) -> Outcome {
        if !self.playable() {
            return Outcome::Idle;
        }
        if rotation::rotate(&mut self.field, &mut self.active) {
            Outcome::Moved
        } else {
            Outcome::Rejected
        }
    }

    pub fn toggle_pause(&mut self) -> Outcome {
        if self.game_over {
            return Outcome::Idle;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        Outcome::PauseToggled {
            paused: self.paused,
        }
    }

    /// Feed one input event.
    ///
    /// Returns the command's outcome on a press edge, `None` for releases and for
    /// presses of an input that is already held.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<Outcome> {
        if !self.latch.on_event(event) {
            return None;
        }
        let outcome = match event.input {
            LogicalInput::MoveLeft => self.move_left(),
            LogicalInput::MoveRight => self.move_right(),
            LogicalInput::SoftDrop => self.soft_drop(),
            LogicalInput::HardDrop => self.hard_drop(),
            LogicalInput::Rotate => self.rotate(),
            LogicalInput::Pause => self.toggle_pause(),
        };
        Some(outcome)
    }

    /// Run one input sub-poll.
    ///
    /// Every pending event is applied first; then the sub-poll is counted and, if it
    /// closes a gravity interval, one gravity tick runs. Sub-polls are not counted
    /// while paused or after a loss.
    pub fn poll(&mut self, source: &mut impl InputSource) -> PollReport {
        let mut report = PollReport::default();

        while let Some(event) = source.next_event() {
            if let Some(outcome) = self.handle_input(event) {
                report.commands += 1;
                tally(&mut report, outcome);
            }
        }

        if self.playable() && self.cadence.poll() {
            report.gravity_applied = true;
            let outcome = self.gravity_tick();
            tally(&mut report, outcome);
        }

        report.game_over = self.game_over;
        report
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut board = Vec::with_capacity(self.field.cells().len());
        self.field.write_u8_grid(&mut board);
        SessionSnapshot {
            width: self.field.width(),
            height: self.field.height(),
            board,
            active: ActiveSnapshot::from(self.active),
            next: self.next,
            rows_cleared: self.rows_cleared,
            paused: self.paused,
            game_over: self.game_over,
            seed: self.generator.seed(),
        }
    }

    /// Push the whole field, the lookahead and the cleared-row count to `surface`
    pub fn repaint(&self, surface: &mut impl DisplaySurface) {
        let width = self.field.width() as usize;
        for (idx, &cell) in self.field.cells().iter().enumerate() {
            surface.put_cell((idx % width) as u16, (idx / width) as u16, cell);
        }
        surface.show_lookahead(self.next);
        surface.show_rows_cleared(self.rows_cleared);
    }

    fn resolve(&mut self, commit: Commit) -> Outcome {
        match commit {
            Commit::Moved => Outcome::Moved,
            Commit::Rejected => Outcome::Rejected,
            Commit::Locked => self.after_lock(),
        }
    }

    fn after_lock(&mut self) -> Outcome {
        let reached_top = self.field.row_has_settled(0);
        let rows = clear_completed_rows(&mut self.field);
        self.rows_cleared += rows;

        if reached_top {
            self.game_over = true;
            info!(
                rows_cleared = self.rows_cleared,
                "game over: stack reached the top row"
            );
            return Outcome::GameOver { rows_cleared: rows };
        }

        let shape = self.next;
        self.next = self.generator.draw();
        if !self.spawn(shape) {
            return Outcome::GameOver { rows_cleared: rows };
        }
        Outcome::Locked { rows_cleared: rows }
    }

    /// Spawn a fresh piece of `shape`
    fn spawn(&mut self, shape: Shape) -> bool {
        self.enter(Piece::spawn(shape, self.field.width()))
    }

    /// Make `piece` the active piece; false (and lost) if its footprint is blocked.
    /// A blocked piece is neither painted nor made active.
    fn enter(&mut self, piece: Piece) -> bool {
        let blocked = piece.cells().iter().any(|&(x, y)| {
            !self.field.in_bounds(x, y) || self.field.occupied_by_settled(x, y)
        });
        if blocked {
            self.game_over = true;
            info!(
                shape = piece.shape().as_str(),
                rows_cleared = self.rows_cleared,
                "game over: spawn blocked"
            );
            return false;
        }

        self.active = piece;
        self.field.mark(&piece.cells(), CellState::Falling);
        debug!(
            shape = piece.shape().as_str(),
            x = piece.x(),
            next = self.next.as_str(),
            "piece spawned"
        );
        true
    }
}

fn tally(report: &mut PollReport, outcome: Outcome) {
    if matches!(outcome, Outcome::Locked { .. } | Outcome::GameOver { .. }) {
        report.locks += 1;
    }
    report.rows_cleared += outcome.rows_cleared();
}
