//! Pieces module - tetromino shape tables and rotation recovery
//!
//! Each kind has four literal rotation states. They are not derived from a
//! base shape at runtime; the kick search depends on the exact offsets.
//! Offsets are `(x, y)` relative to the piece anchor, `y` grows downward.

use crate::types::{PieceKind, Point};

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [Point; 4];

/// Horizontal cells tried on each side before a rotation is rejected
pub const KICK_RANGE: i32 = 3;

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Rotation states indexed by [`PieceKind::index`] then rotation
const SHAPES: [[PieceShape; 4]; 7] = [
    // S
    [
        [p(0, 0), p(1, 0), p(-1, 1), p(0, 1)],
        [p(0, -1), p(0, 0), p(1, 0), p(1, 1)],
        [p(0, 0), p(1, 0), p(-1, 1), p(0, 1)],
        [p(0, -1), p(0, 0), p(1, 0), p(1, 1)],
    ],
    // Z
    [
        [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
        [p(0, -1), p(-1, 0), p(0, 0), p(-1, 1)],
        [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
        [p(0, -1), p(-1, 0), p(0, 0), p(-1, 1)],
    ],
    // L
    [
        [p(0, -1), p(0, 0), p(0, 1), p(1, 1)],
        [p(-1, 0), p(0, 0), p(1, 0), p(-1, 1)],
        [p(-1, -1), p(0, -1), p(0, 0), p(0, 1)],
        [p(1, -1), p(-1, 0), p(0, 0), p(1, 0)],
    ],
    // J
    [
        [p(0, -1), p(0, 0), p(0, 1), p(-1, 1)],
        [p(-1, -1), p(-1, 0), p(0, 0), p(1, 0)],
        [p(0, -1), p(1, -1), p(0, 0), p(0, 1)],
        [p(-1, 0), p(0, 0), p(1, 0), p(1, 1)],
    ],
    // I
    [
        [p(-1, 0), p(0, 0), p(1, 0), p(2, 0)],
        [p(0, -1), p(0, 0), p(0, 1), p(0, 2)],
        [p(-1, 0), p(0, 0), p(1, 0), p(2, 0)],
        [p(0, -1), p(0, 0), p(0, 1), p(0, 2)],
    ],
    // O
    [
        [p(0, 0), p(1, 0), p(0, 1), p(1, 1)],
        [p(0, 0), p(1, 0), p(0, 1), p(1, 1)],
        [p(0, 0), p(1, 0), p(0, 1), p(1, 1)],
        [p(0, 0), p(1, 0), p(0, 1), p(1, 1)],
    ],
    // T
    [
        [p(-1, 0), p(0, 0), p(1, 0), p(0, 1)],
        [p(0, -1), p(0, 0), p(0, 1), p(-1, 0)],
        [p(-1, 0), p(0, 0), p(1, 0), p(0, -1)],
        [p(0, -1), p(0, 0), p(0, 1), p(1, 0)],
    ],
];

/// Get the shape for a piece kind and rotation (taken mod 4)
pub fn get_shape(kind: PieceKind, rotation: u8) -> PieceShape {
    SHAPES[kind.index()][(rotation % 4) as usize]
}

/// Rotation state reached by one rotate command
pub fn next_rotation(rotation: u8) -> u8 {
    (rotation + 1) % 4
}

/// Shape cells translated to an anchor
pub fn cells_at(shape: &PieceShape, anchor: Point) -> [Point; 4] {
    shape.map(|cell| cell.offset(anchor.x, anchor.y))
}

/// Anchor for a freshly spawned piece on a board `cols` wide
///
/// Horizontally centered; vertically placed so the lowest cell sits one row
/// above row 0.
pub fn spawn_anchor(shape: &PieceShape, cols: i32) -> Point {
    let lowest = shape.iter().map(|cell| cell.y).max().unwrap_or(0);
    Point::new(cols / 2 - 1, -lowest - 1)
}

/// Search for an anchor where `shape` fits, starting at `anchor`
///
/// Tries the anchor itself, then up to [`KICK_RANGE`] cells to the left and
/// then to the right. A direction's search stops early once the shape's
/// outermost column on that side overlaps the heap at the offset just
/// tried. Walls alone do not stop it.
///
/// `fits` reports whether every cell is in bounds and free; `in_heap`
/// reports whether a single point is a settled cell.
pub fn kick_search(
    shape: &PieceShape,
    anchor: Point,
    fits: impl Fn(&[Point; 4]) -> bool,
    in_heap: impl Fn(Point) -> bool,
) -> Option<Point> {
    if fits(&cells_at(shape, anchor)) {
        return Some(anchor);
    }

    let far_left = shape.iter().map(|c| c.x).min().unwrap_or(0);
    let far_right = shape.iter().map(|c| c.x).max().unwrap_or(0);

    for (step, edge_x) in [(-1, far_left), (1, far_right)] {
        let mut candidate = anchor;
        for _ in 0..KICK_RANGE {
            candidate = candidate.offset(step, 0);
            if fits(&cells_at(shape, candidate)) {
                return Some(candidate);
            }
            let blocked = shape
                .iter()
                .filter(|c| c.x == edge_x)
                .any(|c| in_heap(c.offset(candidate.x, candidate.y)));
            if blocked {
                break;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_state_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for rotation in 0..4 {
                let shape = get_shape(kind, rotation);
                let unique: HashSet<_> = shape.iter().collect();
                assert_eq!(unique.len(), 4, "{:?} rotation {}", kind, rotation);
            }
        }
    }

    #[test]
    fn test_every_state_contains_anchor_cell() {
        for kind in PieceKind::ALL {
            for rotation in 0..4 {
                assert!(get_shape(kind, rotation).contains(&Point::new(0, 0)));
            }
        }
    }

    #[test]
    fn test_o_piece_never_changes() {
        let base = get_shape(PieceKind::O, 0);
        for rotation in 1..4 {
            assert_eq!(get_shape(PieceKind::O, rotation), base);
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(next_rotation(3), 0);
        assert_eq!(get_shape(PieceKind::T, 5), get_shape(PieceKind::T, 1));
    }

    #[test]
    fn test_spawn_anchor_sits_above_board() {
        let shape = get_shape(PieceKind::I, 1);
        let anchor = spawn_anchor(&shape, 10);
        assert_eq!(anchor, Point::new(4, -3));
        let cells = cells_at(&shape, anchor);
        assert_eq!(cells.iter().map(|c| c.y).max(), Some(-1));
    }

    #[test]
    fn test_kick_accepts_in_place() {
        let shape = get_shape(PieceKind::T, 0);
        let found = kick_search(&shape, Point::new(4, 4), |_| true, |_| false);
        assert_eq!(found, Some(Point::new(4, 4)));
    }

    #[test]
    fn test_kick_moves_off_left_wall() {
        let shape = get_shape(PieceKind::I, 0);
        let in_bounds = |cells: &[Point; 4]| cells.iter().all(|c| c.x >= 0 && c.x < 10);
        let found = kick_search(&shape, Point::new(0, 5), in_bounds, |_| false);
        assert_eq!(found, Some(Point::new(1, 5)));
    }

    #[test]
    fn test_kick_rejects_when_nothing_fits() {
        let shape = get_shape(PieceKind::I, 0);
        assert_eq!(kick_search(&shape, Point::new(5, 5), |_| false, |_| false), None);
    }

    #[test]
    fn test_kick_left_search_stops_at_heap_contact() {
        let shape = get_shape(PieceKind::O, 0);
        let heap: HashSet<Point> = [Point::new(3, 5)].into_iter().collect();
        // only x = 1 would fit on the left, but the heap at x = 3 ends the
        // left search first; the right search then wins at x = 6
        let fits = |cells: &[Point; 4]| {
            let anchor_x = cells[0].x;
            anchor_x == 1 || anchor_x == 6
        };
        let found = kick_search(&shape, Point::new(4, 5), fits, |pt| heap.contains(&pt));
        assert_eq!(found, Some(Point::new(6, 5)));
    }
}
