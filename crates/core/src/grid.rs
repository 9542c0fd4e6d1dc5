//! Grid module - fixed-size square matrix
//!
//! A `size x size` grid where each cell is either empty or holds a `T`.
//! Storage is a flat row-major vector (`y * size + x`), the same layout the
//! falling-block board used, so a row is a contiguous slice.

use crate::error::GridError;
use crate::types::Point;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    /// Row-major cells, `None` marks an empty cell
    cells: Vec<Option<T>>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell empty
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create a grid populated at the given `(x, y)` coordinates
    ///
    /// Fails with [`GridError::InvalidCoordinate`] if any entry lies outside
    /// `[0, size)`. Later entries overwrite earlier ones at the same position.
    pub fn from_entries<I>(size: usize, entries: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut grid = Self::new(size);
        for (x, y, value) in entries {
            grid.set(x, y, Some(value))?;
        }
        Ok(grid)
    }

    /// Build from explicit rows; every row must be `rows.len()` long
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> Result<Self, GridError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GridError::InvalidCoordinate {
                    x: row.len(),
                    y,
                    size,
                });
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Replace row `y` wholesale
    pub(crate) fn set_row(&mut self, y: usize, row: Vec<Option<T>>) {
        debug_assert_eq!(row.len(), self.size);
        let start = y * self.size;
        for (offset, cell) in row.into_iter().enumerate().take(self.size) {
            self.cells[start + offset] = cell;
        }
    }
}

impl<T> Grid<T> {
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(y * self.size + x)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(x, y)`; `None` when out of bounds, `Some(None)` when empty
    pub fn get(&self, x: usize, y: usize) -> Option<Option<&T>> {
        self.index(x, y).map(|idx| self.cells[idx].as_ref())
    }

    /// Write a cell
    pub fn set(&mut self, x: usize, y: usize, value: Option<T>) -> Result<(), GridError> {
        let size = self.size;
        let idx = self
            .index(x, y)
            .ok_or(GridError::InvalidCoordinate { x, y, size })?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Row `y` as a slice; `None` when out of bounds
    pub fn row(&self, y: usize) -> Option<&[Option<T>]> {
        if y >= self.size {
            return None;
        }
        let start = y * self.size;
        self.cells.get(start..start + self.size)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        // chunks(0) panics; an empty grid simply has no rows.
        self.cells.chunks(self.size.max(1))
    }

    /// Every empty cell, row-major
    pub fn empty_positions(&self) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| Point::new((idx % self.size) as i32, (idx / self.size) as i32))
            .collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Occupied cells as `(x, y, value)`, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_ref().map(|v| (idx % size, idx / size, v)))
    }

    /// Swap `(x, y)` with `(y, x)` for every cell, in place
    pub fn transpose(&mut self) {
        for y in 0..self.size {
            for x in (y + 1)..self.size {
                self.cells.swap(y * self.size + x, x * self.size + y);
            }
        }
    }

    /// Deep comparison with a caller-supplied cell comparator
    ///
    /// Grids of different size are never equal and the comparator is not
    /// consulted for them.
    pub fn equals_by<F>(&self, other: &Grid<T>, mut cell_equals: F) -> bool
    where
        F: FnMut(Option<&T>, Option<&T>) -> bool,
    {
        if self.size != other.size {
            return false;
        }
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(own, its)| cell_equals(own.as_ref(), its.as_ref()))
    }
}

impl<T: PartialEq> Grid<T> {
    /// Value-sensitive equality; empty vs non-empty is a mismatch
    pub fn equals(&self, other: &Grid<T>) -> bool {
        self.equals_by(other, |own, its| own == its)
    }
}
