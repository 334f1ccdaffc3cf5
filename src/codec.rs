//! Per-cell wall-bitmask encoding of a grid
//!
//! One lowercase hex digit per logical cell, packing which of the four
//! sides are walls: west = 8, south = 4, east = 2, north = 1. The
//! encoding inspects the grid cells adjacent to the logical cell's
//! doubled position, so it is independent of the internal
//! doubled-coordinate scheme.

use crate::grid::{Cell, Grid, Point};

const WEST: u8 = 8;
const SOUTH: u8 = 4;
const EAST: u8 = 2;
const NORTH: u8 = 1;

/// Encode the grid, one string of hex digits per logical row.
pub fn encode(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|ly| {
            let mut row = String::with_capacity(grid.width());
            for lx in 0..grid.width() {
                let digit = cell_walls(grid, Point::new(lx, ly));
                row.push_str(&format!("{digit:x}"));
            }
            row
        })
        .collect()
}

fn cell_walls(grid: &Grid, cell: Point) -> u8 {
    let p = cell.to_grid();
    let mut walls = 0;
    if blocking(grid.at(p.x - 1, p.y)) {
        walls |= WEST;
    }
    if blocking(grid.at(p.x, p.y + 1)) {
        walls |= SOUTH;
    }
    if blocking(grid.at(p.x + 1, p.y)) {
        walls |= EAST;
    }
    if blocking(grid.at(p.x, p.y - 1)) {
        walls |= NORTH;
    }
    walls
}

fn blocking(cell: Cell) -> bool {
    matches!(cell, Cell::Wall | Cell::Stamp)
}

#[cfg(test)]
mod tests {
    use super::{blocking, encode};
    use crate::builder::MazeBuilder;
    use crate::grid::{Cell, Grid, Point};

    #[test]
    fn fully_walled_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        for (x, y) in [(0, 1), (1, 2), (2, 1), (1, 0)] {
            grid.set(x, y, Cell::Wall);
        }
        assert_eq!(encode(&grid), vec!["f".to_string()]);
    }

    #[test]
    fn adjacent_open_cells_share_a_missing_wall() {
        // Two cells side by side, walled all around but open between them.
        let mut grid = Grid::new(2, 1).unwrap();
        for x in 0..grid.grid_width() {
            grid.set(x, 0, Cell::Wall);
            grid.set(x, 2, Cell::Wall);
        }
        grid.set(0, 1, Cell::Wall);
        grid.set(4, 1, Cell::Wall);
        assert_eq!(encode(&grid), vec!["d7".to_string()]);
    }

    #[test]
    fn stamp_cells_count_as_walls() {
        let mut grid = Grid::new(1, 1).unwrap();
        for (x, y) in [(0, 1), (1, 2), (2, 1)] {
            grid.set(x, y, Cell::Wall);
        }
        grid.set(1, 0, Cell::Stamp);
        assert_eq!(encode(&grid), vec!["f".to_string()]);
    }

    #[test]
    fn encoding_reproduces_wall_topology() {
        let entry = Point::new(0, 0);
        let exit = Point::new(11, 8);
        let mut grid = Grid::new(12, 9).unwrap();
        MazeBuilder::new(true, Some(42))
            .generate(&mut grid, entry, exit)
            .unwrap();

        let lines = encode(&grid);
        assert_eq!(lines.len(), grid.height());
        for (ly, line) in lines.iter().enumerate() {
            assert_eq!(line.len(), grid.width());
            for (lx, digit) in line.chars().enumerate() {
                let bits = digit.to_digit(16).unwrap() as u8;
                let p = Point::new(lx, ly).to_grid();
                assert_eq!(bits & 8 != 0, blocking(grid.at(p.x - 1, p.y)));
                assert_eq!(bits & 4 != 0, blocking(grid.at(p.x, p.y + 1)));
                assert_eq!(bits & 2 != 0, blocking(grid.at(p.x + 1, p.y)));
                assert_eq!(bits & 1 != 0, blocking(grid.at(p.x, p.y - 1)));
            }
        }
    }
}
