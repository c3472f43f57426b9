//! Shared helpers for integration tests

#![allow(dead_code)]

use blockfall::core::{Field, Session, SessionConfig};
use blockfall::types::{CellState, Shape};

/// Route engine logs to the test writer; honors `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Settle every cell of row `y` except the listed columns
pub fn settle_row_except(field: &mut Field, y: i32, gaps: &[i32]) {
    let cells: Vec<(i32, i32)> = (0..field.width() as i32)
        .filter(|x| !gaps.contains(x))
        .map(|x| (x, y))
        .collect();
    field.mark(&cells, CellState::Settled);
}

/// Session on `field` with a fixed active and lookahead shape
pub fn session_on(field: Field, active: Shape, next: Shape) -> anyhow::Result<Session> {
    Ok(Session::with_field(
        SessionConfig::seeded(2024),
        field,
        active,
        next,
    )?)
}

/// Assert the falling cells on the field are exactly the active piece's cells
pub fn assert_falling_matches_active(session: &Session) {
    let field = session.field();
    let mut falling: Vec<(i32, i32)> = Vec::new();
    for y in 0..field.height() as i32 {
        for x in 0..field.width() as i32 {
            if field.get(x, y) == Some(CellState::Falling) {
                falling.push((x, y));
            }
        }
    }
    let mut expected = session.active().cells().to_vec();
    expected.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(falling, expected, "falling cells diverged from the active piece");
}
