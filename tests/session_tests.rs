//! Session tests - commands, lock sequence, loss and lookahead

mod common;

use blockfall::core::{Field, Session, SessionConfig};
use blockfall::types::{CellState, Outcome, Pose, Shape};

use common::{assert_falling_matches_active, init_tracing, session_on, settle_row_except};

#[test]
fn test_o_piece_rests_on_floor() -> anyhow::Result<()> {
    init_tracing();
    let mut session = session_on(Field::new(10, 20)?, Shape::O, Shape::I)?;
    assert_eq!(session.active().anchor(), (4, 0));

    let mut outcomes = Vec::new();
    for _ in 0..19 {
        outcomes.push(session.gravity_tick());
    }

    assert!(outcomes[..18].iter().all(|&o| o == Outcome::Moved));
    assert_eq!(outcomes[18], Outcome::Locked { rows_cleared: 0 });
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(session.field().get(x, y), Some(CellState::Settled));
    }
    assert_eq!(session.field().settled_count(), 4);
    assert!(!session.is_game_over());
    Ok(())
}

#[test]
fn test_line_clear_increments_counter_by_one() -> anyhow::Result<()> {
    init_tracing();
    let mut field = Field::new(10, 20)?;
    settle_row_except(&mut field, 19, &[]);
    field.mark(&[(2, 18), (7, 18)], CellState::Settled);

    // Lock an I flat on the left, well away from the full row
    let mut session = session_on(field, Shape::I, Shape::T)?;
    assert!(session.place_active(Pose::I90, 0, 10));
    let before: Vec<Option<CellState>> = (0..10).map(|x| session.field().get(x, 18)).collect();

    let outcome = session.hard_drop();
    assert_eq!(outcome, Outcome::Locked { rows_cleared: 1 });
    assert_eq!(session.rows_cleared(), 1);

    // Row 19 now holds what row 18 held; the I locked on row 17 and moved to 18
    let after: Vec<Option<CellState>> = (0..10).map(|x| session.field().get(x, 19)).collect();
    assert_eq!(after, before);
    for x in 0..4 {
        assert_eq!(session.field().get(x, 18), Some(CellState::Settled));
    }
    Ok(())
}

#[test]
fn test_locking_below_top_row_is_not_loss() -> anyhow::Result<()> {
    let mut field = Field::new(10, 20)?;
    // Column stack reaching row 5
    let stack: Vec<(i32, i32)> = (5..20).map(|y| (4, y)).collect();
    field.mark(&stack, CellState::Settled);

    let mut session = session_on(field, Shape::O, Shape::T)?;
    // O rests on the stack covering rows 3-4
    for _ in 0..3 {
        assert_eq!(session.gravity_tick(), Outcome::Moved);
    }
    assert_eq!(session.gravity_tick(), Outcome::Locked { rows_cleared: 0 });
    assert!(!session.is_game_over());
    assert!(!session.field().row_has_settled(0));
    Ok(())
}

#[test]
fn test_locking_on_top_row_is_loss() -> anyhow::Result<()> {
    let mut field = Field::new(10, 20)?;
    let stack: Vec<(i32, i32)> = (2..20).map(|y| (5, y)).collect();
    field.mark(&stack, CellState::Settled);

    let mut session = session_on(field, Shape::O, Shape::T)?;
    let outcome = session.gravity_tick();
    assert_eq!(outcome, Outcome::GameOver { rows_cleared: 0 });
    assert!(session.is_game_over());

    // Terminal: every command idles
    assert_eq!(session.move_left(), Outcome::Idle);
    assert_eq!(session.move_right(), Outcome::Idle);
    assert_eq!(session.soft_drop(), Outcome::Idle);
    assert_eq!(session.hard_drop(), Outcome::Idle);
    assert_eq!(session.rotate(), Outcome::Idle);
    assert_eq!(session.gravity_tick(), Outcome::Idle);
    Ok(())
}

#[test]
fn test_top_row_lock_is_loss_even_when_a_row_clears() -> anyhow::Result<()> {
    init_tracing();
    let mut field = Field::new(10, 20)?;
    // Row 3 lacks only column 0; (0, 4) stops an upright I anchored at (0, 0)
    settle_row_except(&mut field, 3, &[0]);
    field.mark(&[(0, 4)], CellState::Settled);

    let mut session = session_on(field, Shape::O, Shape::O)?;
    assert!(session.place_active(Pose::I, 0, 0));

    // The I locks on rows 0-3 and completes row 3; clearing it moves the top cell
    // down to row 1, but the lock itself reached row 0
    let outcome = session.gravity_tick();
    assert_eq!(outcome, Outcome::GameOver { rows_cleared: 1 });
    assert!(session.is_game_over());
    assert_eq!(session.rows_cleared(), 1);
    assert!(!session.field().row_has_settled(0));
    for y in 1..4 {
        assert_eq!(session.field().get(0, y), Some(CellState::Settled));
    }
    Ok(())
}

#[test]
fn test_blocked_spawn_keeps_locked_piece_active() -> anyhow::Result<()> {
    let mut field = Field::new(10, 20)?;
    let stack: Vec<(i32, i32)> = (3..20).map(|y| (4, y)).collect();
    field.mark(&stack, CellState::Settled);

    let mut session = session_on(field, Shape::O, Shape::O)?;
    assert_eq!(session.gravity_tick(), Outcome::Moved);
    // O locks on rows 1-2, clear of row 0; the next O would overlap it
    assert_eq!(session.gravity_tick(), Outcome::GameOver { rows_cleared: 0 });
    assert!(session.is_game_over());
    assert!(!session.field().row_has_settled(0));

    assert_eq!(session.active().anchor(), (4, 1));
    for (x, y) in session.active().cells() {
        assert_eq!(session.field().get(x, y), Some(CellState::Settled));
    }
    assert!(!session.field().has_falling());
    Ok(())
}

#[test]
fn test_horizontal_move_clamps_at_wall() -> anyhow::Result<()> {
    let mut session = session_on(Field::new(10, 20)?, Shape::T, Shape::I)?;
    let mut moves = 0;
    while session.move_left() == Outcome::Moved {
        moves += 1;
        assert!(moves <= 10);
    }
    assert_eq!(session.active().x(), 0);
    assert_eq!(moves, 3);
    assert_eq!(session.move_left(), Outcome::Rejected);

    while session.move_right() == Outcome::Moved {}
    assert_eq!(session.active().x(), 7);
    assert_falling_matches_active(&session);
    Ok(())
}

#[test]
fn test_horizontal_move_blocked_by_stack_is_reverted() -> anyhow::Result<()> {
    let mut field = Field::new(10, 20)?;
    field.mark(&[(6, 0)], CellState::Settled);
    let mut session = session_on(field, Shape::T, Shape::I)?;

    // T at x=3 spans columns 3-5; one step right would cover (6, 0)
    assert_eq!(session.move_right(), Outcome::Rejected);
    assert_eq!(session.active().anchor(), (3, 0));
    assert_eq!(session.field().get(6, 0), Some(CellState::Settled));
    assert_falling_matches_active(&session);
    Ok(())
}

#[test]
fn test_rotation_blocked_by_stack() -> anyhow::Result<()> {
    let mut field = Field::new(10, 20)?;
    // T90 at (3, 0) would newly cover (3, 1) and (4, 2)
    field.mark(&[(4, 2)], CellState::Settled);
    let mut session = session_on(field, Shape::T, Shape::I)?;

    assert_eq!(session.rotate(), Outcome::Rejected);
    assert_eq!(session.active().pose(), Pose::T);
    assert_falling_matches_active(&session);
    Ok(())
}

#[test]
fn test_lookahead_becomes_active() -> anyhow::Result<()> {
    let mut session = session_on(Field::new(10, 20)?, Shape::O, Shape::S)?;
    assert_eq!(session.next(), Shape::S);

    assert!(matches!(session.hard_drop(), Outcome::Locked { .. }));
    assert_eq!(session.active().shape(), Shape::S);
    assert_eq!(session.active().pose(), Pose::S);
    assert_eq!(session.active().anchor(), (3, 0));
    assert_falling_matches_active(&session);
    Ok(())
}

#[test]
fn test_restart_keeps_dimensions() -> anyhow::Result<()> {
    let config = SessionConfig {
        width: 6,
        height: 8,
        seed: Some(5),
    };
    let mut session = Session::new(config)?;
    while !session.is_game_over() {
        session.hard_drop();
    }

    session.restart();
    assert!(!session.is_game_over());
    assert_eq!(session.field().width(), 6);
    assert_eq!(session.field().height(), 8);
    assert_eq!(session.field().settled_count(), 0);
    assert_eq!(session.rows_cleared(), 0);
    assert_falling_matches_active(&session);
    Ok(())
}
