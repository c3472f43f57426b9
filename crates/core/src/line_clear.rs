//! Line-clear module - removes fully settled rows
//!
//! Runs only right after a lock, before the next piece spawns, so the field holds no
//! falling cells while rows are compacted.

use tracing::info;

use crate::field::Field;

/// Remove every fully settled row, compacting the rows above downward.
///
/// Scans from the bottom up. After a removal the same row index is scanned again,
/// since it now holds what used to sit one row higher. Returns the number of rows
/// removed.
pub fn clear_completed_rows(field: &mut Field) -> u32 {
    debug_assert!(
        !field.has_falling(),
        "line clear must run after lock, with no falling piece on the field"
    );

    let mut cleared = 0;
    let mut y = field.height() as usize;
    while y > 0 {
        let row = y - 1;
        if field.is_row_settled(row) {
            field.remove_row(row);
            cleared += 1;
        } else {
            y -= 1;
        }
    }

    if cleared > 0 {
        info!(rows = cleared, "rows cleared");
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState;

    fn settle_row(field: &mut Field, y: i32) {
        let cells: Vec<(i32, i32)> = (0..field.width() as i32).map(|x| (x, y)).collect();
        field.mark(&cells, CellState::Settled);
    }

    #[test]
    fn test_no_rows_to_clear() {
        let mut field = Field::new(10, 20).unwrap();
        field.mark(&[(0, 19), (1, 19)], CellState::Settled);
        assert_eq!(clear_completed_rows(&mut field), 0);
        assert_eq!(field.settled_count(), 2);
    }

    #[test]
    fn test_clear_single_row_shifts_above() {
        let mut field = Field::new(10, 20).unwrap();
        settle_row(&mut field, 19);
        field.mark(&[(3, 18)], CellState::Settled);

        assert_eq!(clear_completed_rows(&mut field), 1);
        assert_eq!(field.get(3, 19), Some(CellState::Settled));
        assert_eq!(field.settled_count(), 1);
    }

    #[test]
    fn test_clear_adjacent_rows() {
        let mut field = Field::new(10, 20).unwrap();
        for y in 16..20 {
            settle_row(&mut field, y);
        }
        field.mark(&[(7, 15)], CellState::Settled);

        assert_eq!(clear_completed_rows(&mut field), 4);
        assert_eq!(field.get(7, 19), Some(CellState::Settled));
        assert_eq!(field.settled_count(), 1);
    }

    #[test]
    fn test_clear_separated_rows() {
        let mut field = Field::new(10, 20).unwrap();
        settle_row(&mut field, 19);
        field.mark(&[(0, 18)], CellState::Settled);
        settle_row(&mut field, 17);
        field.mark(&[(9, 16)], CellState::Settled);

        assert_eq!(clear_completed_rows(&mut field), 2);
        assert_eq!(field.get(0, 19), Some(CellState::Settled));
        assert_eq!(field.get(9, 18), Some(CellState::Settled));
        assert_eq!(field.settled_count(), 2);
    }

    #[test]
    fn test_clear_top_row() {
        let mut field = Field::new(4, 4).unwrap();
        settle_row(&mut field, 0);
        assert_eq!(clear_completed_rows(&mut field), 1);
        assert_eq!(field.settled_count(), 0);
    }
}
