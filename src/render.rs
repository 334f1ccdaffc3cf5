//! ANSI-colored console rendering
//!
//! Each grid cell renders as a two-column block so the maze comes out
//! roughly square in a terminal. Colors follow the original console
//! palette: white road on black walls, blinking red-on-green entry and
//! exit markers, magenta stamp, cyan route overlay.

use itertools::Itertools;

use crate::grid::{Cell, Grid};

const ROAD: &str = "\x1b[47m  \x1b[0m";
const WALL: &str = "\x1b[40m  \x1b[0m";
const ENTRY: &str = "\x1b[1;6;31;42mS \x1b[0m";
const EXIT: &str = "\x1b[1;6;31;42mG \x1b[0m";
const STAMP: &str = "\x1b[45m  \x1b[0m";
const ROUTE: &str = "\x1b[46m  \x1b[0m";

/// Render the grid as ANSI-colored text, one line per grid row.
pub fn to_ansi(grid: &Grid) -> String {
    grid.rows()
        .map(|row| row.iter().map(|cell| cell_block(*cell)).join(""))
        .join("\n")
}

fn cell_block(cell: Cell) -> &'static str {
    match cell {
        Cell::Road => ROAD,
        Cell::Wall => WALL,
        Cell::Entry => ENTRY,
        Cell::Exit => EXIT,
        Cell::Stamp => STAMP,
        Cell::Route => ROUTE,
    }
}

#[cfg(test)]
mod tests {
    use super::to_ansi;
    use crate::grid::{Cell, Grid};

    #[test]
    fn one_line_per_grid_row() {
        let grid = Grid::new(4, 3).unwrap();
        let text = to_ansi(&grid);
        assert_eq!(text.lines().count(), grid.grid_height());
    }

    #[test]
    fn markers_use_their_own_colors() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(1, 1, Cell::Entry);
        let text = to_ansi(&grid);
        assert!(text.contains("\x1b[1;6;31;42mS "));

        grid.set(1, 1, Cell::Exit);
        assert!(to_ansi(&grid).contains("G "));
    }
}
