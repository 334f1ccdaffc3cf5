//! Quick corner-to-corner maze preview, no configuration file needed

use a_maze_ing::{render, Grid, MazeBuilder, Point};
use clap::Parser;

/// Preview a generated maze on the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in logical cells
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Maze height in logical cells
    #[arg(long, default_value_t = 9)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Carve a fully connected maze
    #[arg(long)]
    perfect: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = Grid::new(args.width, args.height)?;
    let entry = Point::new(0, 0);
    let exit = Point::new(args.width - 1, args.height - 1);
    MazeBuilder::new(args.perfect, args.seed).generate(&mut grid, entry, exit)?;

    println!("{}", render::to_ansi(&grid));
    Ok(())
}
