//! Heap module - the settled cells of the falling-block board
//!
//! A sparse set of colored cells with unique points. Cells arrive in bulk
//! when a piece locks and leave in bulk when their row completes.

use crate::types::{ColorToken, HeapCell, Point};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heap {
    cells: Vec<HeapCell>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[HeapCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells.iter().any(|cell| cell.point == point)
    }

    pub fn color_at(&self, point: Point) -> Option<ColorToken> {
        self.cells
            .iter()
            .find(|cell| cell.point == point)
            .map(|cell| cell.color)
    }

    /// Number of settled cells in row `y`
    pub fn row_count(&self, y: i32) -> usize {
        self.cells.iter().filter(|cell| cell.point.y == y).count()
    }

    /// Add locked cells; a point already present takes the new color
    pub fn insert(&mut self, points: &[Point], color: ColorToken) {
        for &point in points {
            match self.cells.iter_mut().find(|cell| cell.point == point) {
                Some(cell) => cell.color = color,
                None => self.cells.push(HeapCell { point, color }),
            }
        }
    }

    /// Rows among `candidates` holding at least `cols` cells, ascending and deduplicated
    pub fn complete_rows(&self, candidates: impl IntoIterator<Item = i32>, cols: i32) -> Vec<i32> {
        let mut rows: Vec<i32> = candidates.into_iter().collect();
        rows.sort_unstable();
        rows.dedup();
        rows.retain(|&y| self.row_count(y) as i32 >= cols);
        rows
    }

    /// Delete every cell in `rows` and drop the cells above them
    ///
    /// A surviving cell moves down once per cleared row beneath it. The result
    /// is built into a fresh vector, so the order rows are given in does not
    /// matter.
    pub fn clear_rows(&mut self, rows: &[i32]) {
        if rows.is_empty() {
            return;
        }
        let cleared: Vec<HeapCell> = self
            .cells
            .iter()
            .filter(|cell| !rows.contains(&cell.point.y))
            .map(|cell| {
                let below = rows.iter().filter(|&&row| row > cell.point.y).count() as i32;
                HeapCell {
                    point: cell.point.offset(0, below),
                    color: cell.color,
                }
            })
            .collect();
        self.cells = cleared;
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(heap: &mut Heap, y: i32, cols: i32, color: ColorToken) {
        let points: Vec<Point> = (0..cols).map(|x| Point::new(x, y)).collect();
        heap.insert(&points, color);
    }

    #[test]
    fn test_insert_keeps_points_unique() {
        let mut heap = Heap::new();
        heap.insert(&[Point::new(1, 1), Point::new(2, 1)], ColorToken::Red);
        heap.insert(&[Point::new(1, 1)], ColorToken::Blue);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.color_at(Point::new(1, 1)), Some(ColorToken::Blue));
    }

    #[test]
    fn test_complete_rows_filters_and_sorts() {
        let mut heap = Heap::new();
        fill_row(&mut heap, 7, 4, ColorToken::Red);
        fill_row(&mut heap, 3, 4, ColorToken::Red);
        heap.insert(&[Point::new(0, 5)], ColorToken::Grey);
        assert_eq!(heap.complete_rows([7, 5, 3, 7], 4), vec![3, 7]);
    }

    #[test]
    fn test_clear_single_row_shifts_cells_above() {
        let mut heap = Heap::new();
        fill_row(&mut heap, 5, 4, ColorToken::Red);
        heap.insert(&[Point::new(1, 2), Point::new(3, 4)], ColorToken::Green);
        heap.insert(&[Point::new(2, 6)], ColorToken::Yellow);
        heap.clear_rows(&[5]);

        assert_eq!(heap.row_count(5), 1);
        assert_eq!(heap.color_at(Point::new(3, 5)), Some(ColorToken::Green));
        assert_eq!(heap.color_at(Point::new(1, 3)), Some(ColorToken::Green));
        // below the cleared row: untouched
        assert_eq!(heap.color_at(Point::new(2, 6)), Some(ColorToken::Yellow));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_clear_split_rows_cascade() {
        let mut heap = Heap::new();
        fill_row(&mut heap, 8, 3, ColorToken::Red);
        fill_row(&mut heap, 6, 3, ColorToken::Red);
        heap.insert(&[Point::new(0, 7)], ColorToken::Blue);
        heap.insert(&[Point::new(1, 5)], ColorToken::Grey);
        heap.clear_rows(&[6, 8]);

        assert_eq!(heap.len(), 2);
        assert_eq!(heap.color_at(Point::new(0, 8)), Some(ColorToken::Blue));
        assert_eq!(heap.color_at(Point::new(1, 7)), Some(ColorToken::Grey));
    }
}
