//! CLI for maze generation

use std::{thread, time::Duration};

use clap::Parser;
use itertools::Itertools;
use log::{debug, LevelFilter};
use perfect_maze::{
    carver::{CarveObserver, Carver},
    Direction, Maze, Point,
};

/// Carve a perfect maze and draw it on the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(short = 'W', long, default_value_t = 30)]
    width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = 30)]
    height: usize,

    /// Animate the carving on the terminal
    #[arg(short, long)]
    animate: bool,

    /// Animation frame length in milliseconds
    #[arg(short, long, default_value_t = 200)]
    frame_length: u64,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log each carving step
    #[arg(short, long)]
    debug: bool,
}

/// Animation and step logging while the carver runs.
struct TerminalObserver {
    animate: bool,
    frame_length: Duration,
}

impl CarveObserver for TerminalObserver {
    fn cell_visited(&mut self, maze: &Maze, _cell: Point) {
        if self.animate {
            draw_frame(maze);
            thread::sleep(self.frame_length);
        }
    }

    fn wall_removed(&mut self, maze: &Maze, cell: Point, direction: Direction) {
        if let Some(next) = maze.neighbor(cell, direction) {
            debug!(
                "{:?}: ({},{}) -> ({},{})",
                direction, cell.row, cell.col, next.row, next.col
            );
        }
    }
}

/// Clear the terminal and draw the maze in the top left corner.
fn draw_frame(maze: &Maze) {
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", maze.render_lines().iter().join("\n"));
}

/// Carve the maze, print it to standard output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let mut carver = Carver::new(args.seed);
    let mut observer = TerminalObserver {
        animate: args.animate,
        frame_length: Duration::from_millis(args.frame_length),
    };
    let maze = carver.carve_with(args.width, args.height, &mut observer)?;

    if args.animate {
        draw_frame(&maze);
    } else {
        println!("{}", maze.render_lines().iter().join("\n"));
    }
    Ok(())
}
