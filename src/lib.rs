//! Procedural maze generation with pillar-and-knockdown carving
//!
//! A maze is generated on a doubled-coordinate grid: logical cell
//! `(lx, ly)` lives at grid `(2·lx + 1, 2·ly + 1)` and the positions in
//! between hold walls. Generation runs in fixed phases (outer walls, an
//! optional decorative stamp, pillar placement with randomized
//! knockdown, entry/exit marking), so a fixed seed reproduces the same
//! maze bit for bit. A breadth-first solver finds the shortest route
//! between the entry and exit, and a codec packs the grid into hex
//! digit strings for snapshot files.
//!
//! # Examples
//! ```
//! use a_maze_ing::{Grid, MazeBuilder, PathSolver, Point};
//!
//! let entry = Point::new(0, 0);
//! let exit = Point::new(4, 4);
//! let mut grid = Grid::new(5, 5)?;
//! MazeBuilder::new(true, Some(42)).generate(&mut grid, entry, exit)?;
//!
//! let route = PathSolver::solve(&grid, entry, exit)?
//!     .expect("a perfect maze always has a route");
//! assert_eq!(route[0], entry.to_grid());
//! assert_eq!(*route.last().unwrap(), exit.to_grid());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod builder;
pub mod codec;
pub mod config;
pub mod grid;
pub mod render;
pub mod snapshot;
pub mod solver;

pub use builder::MazeBuilder;
pub use config::MazeConfig;
pub use grid::{Cell, Grid, Point};
pub use snapshot::SolveStatus;
pub use solver::PathSolver;
