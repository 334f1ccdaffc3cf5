//! Grid model: cell states and the doubled-coordinate cell array

use anyhow::bail;

/// State of a single grid cell.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    /// Passable, not yet committed to anything else
    Road,
    /// Impassable wall
    Wall,
    /// Maze entry marker
    Entry,
    /// Maze exit marker
    Exit,
    /// Decorative stamp cell, impassable
    Stamp,
    /// Post-solve marker on a passable cell
    Route,
}

/// Location in the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// Grid position of a logical cell.
    ///
    /// Logical cell `(lx, ly)` sits at grid `(2·lx + 1, 2·ly + 1)`;
    /// even grid coordinates are junctions between logical cells.
    pub fn to_grid(self) -> Point {
        Point {
            x: self.x * 2 + 1,
            y: self.y * 2 + 1,
        }
    }
}

/// Rectangular cell array over doubled coordinates.
///
/// A request for `width × height` logical cells allocates a
/// `(2·width + 1) × (2·height + 1)` grid, so that walls can occupy the
/// positions between logical cells. Every cell starts as [`Cell::Road`];
/// the grid itself is a passive container and all maze structure is
/// written into it by [`crate::builder::MazeBuilder`].
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Allocate a grid for `width × height` logical cells, all Road.
    ///
    /// Fails on non-positive dimensions before allocating anything.
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        if width < 1 || height < 1 {
            bail!("invalid maze dimensions {}x{}, both must be >= 1", width, height);
        }
        let w_grid = width * 2 + 1;
        let h_grid = height * 2 + 1;
        let cells = (0..h_grid)
            .map(|_| (0..w_grid).map(|_| Cell::Road).collect())
            .collect();
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Logical cell count in x
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical cell count in y
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid array width, `2·width + 1`
    pub fn grid_width(&self) -> usize {
        self.width * 2 + 1
    }

    /// Grid array height, `2·height + 1`
    pub fn grid_height(&self) -> usize {
        self.height * 2 + 1
    }

    /// Cell at grid position `(x, y)`.
    ///
    /// Panics if the position is outside the grid.
    pub fn at(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Overwrite the cell at grid position `(x, y)`.
    ///
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    /// Iterate rows of the grid array, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Grid, Point};

    #[test]
    fn new_grid_is_all_road() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.grid_width(), 9);
        assert_eq!(grid.grid_height(), 7);
        for y in 0..grid.grid_height() {
            for x in 0..grid.grid_width() {
                assert_eq!(grid.at(x, y), Cell::Road);
            }
        }
    }

    #[test]
    fn set_then_at() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(3, 1, Cell::Wall);
        assert_eq!(grid.at(3, 1), Cell::Wall);
        assert_eq!(grid.at(1, 3), Cell::Road);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        let grid = Grid::new(2, 2).unwrap();
        grid.at(5, 0);
    }

    #[test]
    fn logical_to_grid_mapping() {
        assert_eq!(Point::new(0, 0).to_grid(), Point::new(1, 1));
        assert_eq!(Point::new(4, 2).to_grid(), Point::new(9, 5));
    }
}
