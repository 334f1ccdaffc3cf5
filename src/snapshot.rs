//! Textual maze snapshot files
//!
//! The format is line-oriented and byte-stable: one hex-digit string
//! per logical row (see [`crate::codec`]), a blank line, the entry
//! point as `x,y`, the exit point as `x,y`, and a trailing
//! `solution=<status>` marker line.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;

use crate::codec;
use crate::grid::{Grid, Point};

/// Outcome of the optional solving step, recorded in the snapshot.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SolveStatus {
    /// Solving was not requested
    Skipped,
    /// A route from entry to exit was found
    Found,
    /// The exit is unreachable
    NotFound,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            SolveStatus::Skipped => "skipped",
            SolveStatus::Found => "found",
            SolveStatus::NotFound => "none",
        };
        write!(f, "{status}")
    }
}

/// Assemble the snapshot body. `entry` and `exit` are logical cell
/// coordinates, as requested by the caller.
pub fn render(grid: &Grid, entry: Point, exit: Point, status: SolveStatus) -> String {
    format!(
        "{}\n\n{},{}\n{},{}\nsolution={}\n",
        codec::encode(grid).iter().join("\n"),
        entry.x,
        entry.y,
        exit.x,
        exit.y,
        status
    )
}

/// Write the snapshot to `path`.
///
/// The content goes to a `.tmp` sibling first and is renamed into
/// place, so an interrupted write never leaves a truncated snapshot
/// behind.
pub fn write(
    path: &Path,
    grid: &Grid,
    entry: Point,
    exit: Point,
    status: SolveStatus,
) -> anyhow::Result<()> {
    let body = render(grid, entry, exit, status);

    let mut tmp_name = OsString::from(path.as_os_str());
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);

    fs::write(tmp, body).with_context(|| format!("cannot write {}", tmp.display()))?;
    fs::rename(tmp, path)
        .with_context(|| format!("cannot move snapshot into place at {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use super::{render, write, SolveStatus};
    use crate::builder::MazeBuilder;
    use crate::grid::{Cell, Grid, Point};

    #[test]
    fn snapshot_body_is_byte_stable() {
        // Two cells side by side, walled all around but open between them.
        let mut grid = Grid::new(2, 1).unwrap();
        for x in 0..grid.grid_width() {
            grid.set(x, 0, Cell::Wall);
            grid.set(x, 2, Cell::Wall);
        }
        grid.set(0, 1, Cell::Wall);
        grid.set(4, 1, Cell::Wall);

        let body = render(&grid, Point::new(0, 0), Point::new(1, 0), SolveStatus::Skipped);
        assert_eq!(body, "d7\n\n0,0\n1,0\nsolution=skipped\n");
    }

    #[test]
    fn status_markers() {
        assert_eq!(SolveStatus::Skipped.to_string(), "skipped");
        assert_eq!(SolveStatus::Found.to_string(), "found");
        assert_eq!(SolveStatus::NotFound.to_string(), "none");
    }

    #[test]
    fn write_creates_file_and_removes_temp() {
        let entry = Point::new(0, 0);
        let exit = Point::new(4, 4);
        let mut grid = Grid::new(5, 5).unwrap();
        MazeBuilder::new(true, Some(42))
            .generate(&mut grid, entry, exit)
            .unwrap();

        let path = env::temp_dir().join(format!(
            "a-maze-ing-snapshot-test-{}.txt",
            std::process::id()
        ));
        write(&path, &grid, entry, exit, SolveStatus::Found).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, render(&grid, entry, exit, SolveStatus::Found));
        assert!(content.ends_with("0,0\n4,4\nsolution=found\n"));
        assert!(!path.with_extension("txt.tmp").exists());

        fs::remove_file(&path).unwrap();
    }
}
