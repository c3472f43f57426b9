//! Display contract
//!
//! The engine never draws. After any mutation a caller can ask the session to push a
//! full repaint through a [`DisplaySurface`]; how and when the surface shows it is the
//! surface's business.

use crate::types::{CellState, Shape};

pub trait DisplaySurface {
    /// Show the state of field cell (x, y)
    fn put_cell(&mut self, x: u16, y: u16, cell: CellState);

    /// Show the lookahead shape
    fn show_lookahead(&mut self, _shape: Shape) {}

    /// Show the number of rows cleared so far
    fn show_rows_cleared(&mut self, _rows: u32) {}
}

/// Surface that records a character-cell picture, one `String` per row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    rows: Vec<Vec<char>>,
    lookahead: Option<Shape>,
    rows_cleared: u32,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }

    pub fn lookahead(&self) -> Option<Shape> {
        self.lookahead
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }
}

impl DisplaySurface for TextSurface {
    fn put_cell(&mut self, x: u16, y: u16, cell: CellState) {
        let (x, y) = (x as usize, y as usize);
        if self.rows.len() <= y {
            self.rows.resize(y + 1, Vec::new());
        }
        let row = &mut self.rows[y];
        if row.len() <= x {
            row.resize(x + 1, CellState::Empty.as_char());
        }
        row[x] = cell.as_char();
    }

    fn show_lookahead(&mut self, shape: Shape) {
        self.lookahead = Some(shape);
    }

    fn show_rows_cleared(&mut self, rows: u32) {
        self.rows_cleared = rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_surface_grows_on_demand() {
        let mut surface = TextSurface::new();
        surface.put_cell(2, 1, CellState::Settled);
        surface.put_cell(0, 0, CellState::Falling);
        assert_eq!(surface.lines(), vec!["#".to_string(), "  @".to_string()]);
    }
}
