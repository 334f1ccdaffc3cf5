//! Maze construction: outer walls, stamp embedding, pillar-and-knockdown

use anyhow::bail;
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::{Cell, Grid, Point};

/// Bounding box of the embedded stamp, in grid coordinates.
struct StampBox {
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

/// Maze builder implementing the pillar-and-knockdown algorithm.
///
/// Every interior junction of the grid receives a wall pillar, and from
/// each pillar one randomly chosen arm is knocked down onto an adjacent
/// wall slot. The candidate directions depend on the junction's position
/// so that each wall slot can be hit by at most one junction; with
/// `perfect = true` this carves a spanning structure where every cell
/// stays reachable.
///
/// A builder is cheap to construct and reusable: each [`Self::generate`]
/// call seeds a fresh generator from the configured seed, so two calls
/// with the same seed produce identical mazes.
pub struct MazeBuilder {
    perfect: bool,
    seed: Option<u64>,
}

impl MazeBuilder {
    const WEST: (i32, i32) = (-1, 0);
    const SOUTH: (i32, i32) = (0, 1);
    const EAST: (i32, i32) = (1, 0);
    const NORTH: (i32, i32) = (0, -1);

    /// Probability of leaving a pillar without its arm when the maze
    /// is not required to be perfect.
    const KNOCKDOWN_SKIP: f64 = 0.2;

    /// Smallest logical size that still fits the stamp with a clear
    /// ring of cells around it.
    const STAMP_MIN_WIDTH: usize = 9;
    const STAMP_MIN_HEIGHT: usize = 7;

    /// Decorative "42" bitmap, in logical cells.
    const STAMP_PATTERN: [[u8; 7]; 5] = [
        [1, 0, 0, 0, 1, 1, 1],
        [1, 0, 0, 0, 0, 0, 1],
        [1, 1, 1, 0, 1, 1, 1],
        [0, 0, 1, 0, 1, 0, 0],
        [0, 0, 1, 0, 1, 1, 1],
    ];

    /// Junctions inside the stamp bounding box that still take part in
    /// pillar placement, as `(x, y)` offsets from the box's top-left
    /// grid corner. These keep the open areas around the glyph strokes
    /// subdivided instead of leaving large halls.
    const STAMP_EXTRA_PILLARS: [(usize, usize); 9] = [
        (4, 0),
        (6, 0),
        (4, 2),
        (6, 2),
        (0, 8),
        (2, 8),
        (0, 10),
        (2, 10),
        (14, 10),
    ];

    /// Grid-space neighbor offsets of a stamp cell.
    const SURROUNDING: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// - `perfect`: carve a fully connected maze; when false, 20% of
    ///   pillars keep all their walls up, which may leave loops and
    ///   unreachable pockets.
    /// - `seed`: seed for reproducible generation, or `None` for
    ///   entropy-based randomness.
    pub fn new(perfect: bool, seed: Option<u64>) -> Self {
        Self { perfect, seed }
    }

    /// Generate a maze into `grid`.
    ///
    /// Phases run in fixed order: outer walls, stamp embedding (only
    /// when the grid is at least 9×7 logical cells), pillar placement
    /// with knockdown, entry/exit marking. `entry` and `exit` are
    /// logical cell coordinates and must be distinct and within
    /// `[0, width) × [0, height)`.
    ///
    /// On a precondition failure nothing has been mutated; any later
    /// failure would leave the grid partially built, so callers should
    /// discard the grid on error.
    pub fn generate(&self, grid: &mut Grid, entry: Point, exit: Point) -> anyhow::Result<()> {
        Self::validate_point(grid, entry, "entry")?;
        Self::validate_point(grid, exit, "exit")?;
        if entry == exit {
            bail!("entry and exit must be distinct, both are ({},{})", entry.x, entry.y);
        }

        let mut random = match self.seed {
            Some(state) => StdRng::seed_from_u64(state),
            None => StdRng::from_entropy(),
        };

        Self::build_outer_walls(grid);

        let stamp = if grid.width() >= Self::STAMP_MIN_WIDTH
            && grid.height() >= Self::STAMP_MIN_HEIGHT
        {
            Some(Self::build_stamp(grid))
        } else {
            None
        };

        self.pillars_and_knock(grid, &mut random, stamp.as_ref());

        let e = entry.to_grid();
        grid.set(e.x, e.y, Cell::Entry);
        let g = exit.to_grid();
        grid.set(g.x, g.y, Cell::Exit);

        debug!(
            "generated {}x{} maze, perfect={}, stamp={}",
            grid.width(),
            grid.height(),
            self.perfect,
            stamp.is_some()
        );
        Ok(())
    }

    fn validate_point(grid: &Grid, point: Point, name: &str) -> anyhow::Result<()> {
        if point.x >= grid.width() || point.y >= grid.height() {
            bail!(
                "{} point ({},{}) is outside the {}x{} maze",
                name,
                point.x,
                point.y,
                grid.width(),
                grid.height()
            );
        }
        Ok(())
    }

    /// Set every cell on the boundary ring to Wall.
    fn build_outer_walls(grid: &mut Grid) {
        let w = grid.grid_width();
        let h = grid.grid_height();
        for y in 0..h {
            for x in 0..w {
                if y == 0 || y == h - 1 || x == 0 || x == w - 1 {
                    grid.set(x, y, Cell::Wall);
                }
            }
        }
    }

    /// Embed the stamp bitmap centered in logical-cell space.
    ///
    /// Each set bit becomes a Stamp cell with all eight grid-space
    /// neighbors walled, turning the glyph into an impassable island.
    /// The column above the box's left edge is walled as well; the
    /// matching junctions are skipped during pillar placement.
    fn build_stamp(grid: &mut Grid) -> StampBox {
        let start_x = (grid.width() - 7) / 2;
        let start_y = (grid.height() - 5) / 2;

        let stamp = StampBox {
            min_x: start_x * 2,
            max_x: (start_x + 7) * 2,
            min_y: start_y * 2,
            max_y: (start_y + 5) * 2,
        };

        for (row, bits) in Self::STAMP_PATTERN.iter().enumerate() {
            for (col, bit) in bits.iter().enumerate() {
                if *bit == 0 {
                    continue;
                }
                let sx = (start_x + col) * 2 + 1;
                let sy = (start_y + row) * 2 + 1;
                grid.set(sx, sy, Cell::Stamp);
                for (dx, dy) in Self::SURROUNDING {
                    grid.set(
                        (sx as i32 + dx) as usize,
                        (sy as i32 + dy) as usize,
                        Cell::Wall,
                    );
                }
            }
        }
        for y in 0..stamp.min_y {
            grid.set(stamp.min_x, y, Cell::Wall);
        }

        debug!(
            "stamp embedded, grid box x={}..={} y={}..={}",
            stamp.min_x, stamp.max_x, stamp.min_y, stamp.max_y
        );
        stamp
    }

    /// Place a pillar on every interior junction and knock one arm down.
    ///
    /// Junctions are visited in row-major order; the candidate arm
    /// directions depend on the junction's position. The top-left
    /// junction may pick any direction, the rest of the top row may not
    /// pick west, the rest of the left column may not pick north, and
    /// all remaining junctions pick between south and east only.
    fn pillars_and_knock(&self, grid: &mut Grid, random: &mut StdRng, stamp: Option<&StampBox>) {
        let h = grid.grid_height();
        let w = grid.grid_width();
        for y in (2..h - 1).step_by(2) {
            for x in (2..w - 1).step_by(2) {
                if let Some(stamp) = stamp {
                    // The column above the box's left edge is already solid wall.
                    if x == stamp.min_x && y < stamp.min_y {
                        continue;
                    }
                    if (stamp.min_x..=stamp.max_x).contains(&x)
                        && (stamp.min_y..=stamp.max_y).contains(&y)
                    {
                        let rel = (x - stamp.min_x, y - stamp.min_y);
                        if !Self::STAMP_EXTRA_PILLARS.contains(&rel) {
                            continue;
                        }
                    }
                }

                grid.set(x, y, Cell::Wall);

                if !self.perfect && random.gen_bool(Self::KNOCKDOWN_SKIP) {
                    continue;
                }

                let directions: &[(i32, i32)] = if y == 2 && x == 2 {
                    &[Self::WEST, Self::SOUTH, Self::EAST, Self::NORTH]
                } else if y == 2 {
                    &[Self::SOUTH, Self::EAST, Self::NORTH]
                } else if x == 2 {
                    &[Self::WEST, Self::SOUTH, Self::EAST]
                } else {
                    &[Self::SOUTH, Self::EAST]
                };

                let (dx, dy) = *directions
                    .choose(random)
                    .expect("direction candidate sets are never empty");
                grid.set((x as i32 + dx) as usize, (y as i32 + dy) as usize, Cell::Wall);
            }
        }
    }
}
