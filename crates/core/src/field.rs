//! Field module - manages the occupancy grid
//!
//! The field is a `width x height` grid of [`CellState`] stored as a flat row-major
//! vector, sized once when the session starts.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom, (0, 0)
//! being the top-left cell. Everything outside the grid is border and never stored.

use std::fmt;

use crate::error::{CoreError, Result};
use crate::geometry::Coord;
use crate::types::CellState;

/// Narrowest field that still fits the widest pose (flat I)
pub const MIN_FIELD_WIDTH: u16 = 4;

/// Shortest field that still fits the tallest pose (upright I)
pub const MIN_FIELD_HEIGHT: u16 = 4;

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
}

impl Field {
    /// Allocate an empty field.
    ///
    /// Fails on dimensions that cannot hold every pose and when the grid cannot be
    /// allocated, so no caller ever works on an undersized field.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width < MIN_FIELD_WIDTH || height < MIN_FIELD_HEIGHT {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                min_width: MIN_FIELD_WIDTH,
                min_height: MIN_FIELD_HEIGHT,
            });
        }

        let len = width as usize * height as usize;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| CoreError::Allocation { cells: len, source })?;
        cells.resize(len, CellState::Empty);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) is inside the grid and permanently occupied.
    ///
    /// Out-of-bounds coordinates answer `false`; callers that care about the border
    /// check [`Field::in_bounds`] themselves.
    pub fn occupied_by_settled(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(CellState::Settled)
    }

    /// Set every listed cell to `state`.
    /// Out-of-bounds cells are skipped; returns false if any was.
    pub fn mark(&mut self, cells: &[Coord], state: CellState) -> bool {
        let mut all_in_bounds = true;
        for &(x, y) in cells {
            match self.index(x, y) {
                Some(idx) => self.cells[idx] = state,
                None => all_in_bounds = false,
            }
        }
        all_in_bounds
    }

    fn row(&self, y: usize) -> &[CellState] {
        let width = self.width as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Check if every cell of row y is settled
    pub fn is_row_settled(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell == CellState::Settled)
    }

    /// Check if any cell of row y is settled
    pub fn row_has_settled(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().any(|&cell| cell == CellState::Settled)
    }

    /// Delete row y and shift every row above it down by one.
    ///
    /// Falling cells are pinned: a falling source is never copied, and a falling
    /// destination is never overwritten. The freed top row ends up empty apart from
    /// pinned falling cells. Returns false if y is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }

        let width = self.width as usize;
        for row in (1..=y).rev() {
            let dst_start = row * width;
            let src_start = (row - 1) * width;
            for x in 0..width {
                let src = self.cells[src_start + x];
                let dst = &mut self.cells[dst_start + x];
                if *dst != CellState::Falling && src != CellState::Falling {
                    *dst = src;
                }
            }
        }

        for cell in &mut self.cells[..width] {
            if *cell != CellState::Falling {
                *cell = CellState::Empty;
            }
        }

        true
    }

    /// Whether any cell is marked falling
    pub fn has_falling(&self) -> bool {
        self.cells.contains(&CellState::Falling)
    }

    /// First falling cell in row-major order
    pub fn first_falling(&self) -> Option<Coord> {
        let width = self.width as usize;
        self.cells
            .iter()
            .position(|&cell| cell == CellState::Falling)
            .map(|idx| ((idx % width) as i32, (idx / width) as i32))
    }

    /// Number of settled cells on the whole field
    pub fn settled_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == CellState::Settled)
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Write the grid as row-major `u8` codes (see [`CellState::as_u8`])
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(CellState::as_u8));
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl fmt::Display for Field {
    /// Character-cell picture of the field between `|` borders
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as usize {
            write!(f, "|")?;
            for cell in self.row(y) {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
