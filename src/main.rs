//! CLI for config-driven maze generation

use std::path::PathBuf;

use a_maze_ing::{render, snapshot, Grid, MazeBuilder, MazeConfig, PathSolver, Point, SolveStatus};
use clap::Parser;
use log::info;

/// Generate a maze from a configuration file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze configuration file (KEY=value lines)
    config: PathBuf,

    /// Solve the maze and overlay the shortest route
    #[arg(short, long)]
    solve: bool,

    /// Skip console rendering, only write the output file
    #[arg(short, long)]
    quiet: bool,
}

/// Read config, generate, optionally solve, render and persist.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig::from_file(&args.config)?;
    info!(
        "generating a {} x {} maze into {}",
        config.width,
        config.height,
        config.output_file.display()
    );

    let entry = Point::new(config.entry_point.0, config.entry_point.1);
    let exit = Point::new(config.exit_point.0, config.exit_point.1);

    let mut grid = Grid::new(config.width, config.height)?;
    MazeBuilder::new(config.perfect, config.seed).generate(&mut grid, entry, exit)?;

    let status = if args.solve {
        match PathSolver::solve(&grid, entry, exit)? {
            Some(route) => {
                info!("shortest route takes {} steps", route.len() - 1);
                PathSolver::mark_route(&mut grid, &route);
                SolveStatus::Found
            }
            None => {
                println!("No route from entry to exit.");
                SolveStatus::NotFound
            }
        }
    } else {
        SolveStatus::Skipped
    };

    if !args.quiet {
        println!("{}", render::to_ansi(&grid));
    }
    snapshot::write(&config.output_file, &grid, entry, exit, status)?;
    Ok(())
}
