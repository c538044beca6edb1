//! Board adjacency model
//!
//! Each cell connects to its 8-neighborhood (Chebyshev distance 1), clipped at
//! the edges and corners of the 4×4 grid.

use super::board::{BOARD_SIDE, CELL_COUNT, Cell};

/// Precomputed neighbor lists for every cell on the board
///
/// Immutable once built; solvers share a single table read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    neighbors: [Vec<Cell>; CELL_COUNT],
}

impl AdjacencyTable {
    /// Build the table from the grid geometry
    #[must_use]
    pub fn new() -> Self {
        let neighbors = std::array::from_fn(|index| compute_neighbors(index + 1));
        Self { neighbors }
    }

    /// Cells reachable from `cell` in one step, in ascending order
    ///
    /// # Panics
    /// Panics if the cell is outside 1..=16
    #[inline]
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        assert!((1..=CELL_COUNT).contains(&cell), "cell {cell} is off the board");
        &self.neighbors[cell - 1]
    }

    /// Check if two cells touch
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, a: Cell, b: Cell) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Check that every consecutive pair of cells in `path` touches
    ///
    /// Repeated cells are not checked here; callers discard those first.
    #[must_use]
    pub fn is_connected(&self, path: &[Cell]) -> bool {
        path.windows(2).all(|pair| self.is_adjacent(pair[0], pair[1]))
    }
}

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_neighbors(cell: Cell) -> Vec<Cell> {
    let row = (cell - 1) / BOARD_SIDE;
    let col = (cell - 1) % BOARD_SIDE;

    let mut result = Vec::with_capacity(8);
    for r in row.saturating_sub(1)..=(row + 1).min(BOARD_SIDE - 1) {
        for c in col.saturating_sub(1)..=(col + 1).min(BOARD_SIDE - 1) {
            if (r, c) != (row, col) {
                result.push(r * BOARD_SIDE + c + 1);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::cells;

    #[test]
    fn corner_neighbors() {
        let table = AdjacencyTable::new();
        assert_eq!(table.neighbors(1), &[2, 5, 6]);
        assert_eq!(table.neighbors(4), &[3, 7, 8]);
        assert_eq!(table.neighbors(13), &[9, 10, 14]);
        assert_eq!(table.neighbors(16), &[11, 12, 15]);
    }

    #[test]
    fn interior_neighbors() {
        let table = AdjacencyTable::new();
        assert_eq!(table.neighbors(6), &[1, 2, 3, 5, 7, 9, 10, 11]);
        assert_eq!(table.neighbors(11), &[6, 7, 8, 10, 12, 14, 15, 16]);
    }

    #[test]
    fn neighbor_counts_by_position() {
        let table = AdjacencyTable::new();
        for cell in cells() {
            let expected = match cell {
                1 | 4 | 13 | 16 => 3,
                6 | 7 | 10 | 11 => 8,
                _ => 5,
            };
            assert_eq!(
                table.neighbors(cell).len(),
                expected,
                "cell {cell} has wrong neighbor count"
            );
        }
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        let table = AdjacencyTable::new();
        for a in cells() {
            assert!(!table.is_adjacent(a, a));
            for b in cells() {
                assert_eq!(table.is_adjacent(a, b), table.is_adjacent(b, a));
            }
        }
    }

    #[test]
    fn row_ends_do_not_wrap() {
        let table = AdjacencyTable::new();
        assert!(!table.is_adjacent(4, 5));
        assert!(!table.is_adjacent(8, 9));
        assert!(!table.is_adjacent(12, 13));
    }

    #[test]
    fn connected_paths() {
        let table = AdjacencyTable::new();
        assert!(table.is_connected(&[1, 2, 3, 4]));
        assert!(table.is_connected(&[1, 6, 11, 16]));
        assert!(!table.is_connected(&[1, 3]));
        assert!(table.is_connected(&[7]));
        assert!(table.is_connected(&[]));
    }
}
