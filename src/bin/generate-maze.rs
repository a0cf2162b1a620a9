//! CLI for maze generation

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use maze_walker::{export, GeneratorConfig, MazeGenerator, Position};

/// Maze generator walking randomly from start to end
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid height, border included
    #[arg(long, default_value_t = 51)]
    rows: usize,

    /// Grid width, border included
    #[arg(long, default_value_t = 51)]
    cols: usize,

    /// Start cell as ROW,COL [default: bottom-left of the interior]
    #[arg(long)]
    start: Option<Position>,

    /// End cell as ROW,COL [default: top-right of the interior]
    #[arg(long)]
    end: Option<Position>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Walks to try before giving up
    #[arg(long, default_value_t = 16)]
    max_attempts: usize,

    /// Step ceiling per walk, as a multiple of rows * cols
    #[arg(long, default_value_t = 50)]
    step_factor: usize,

    /// File, where to write the maze. Use `-` for stdout.
    #[arg(short, long, default_value = "maze.txt")]
    output: PathBuf,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::with_size(self.rows, self.cols);
        GeneratorConfig {
            start: self.start.unwrap_or(defaults.start),
            end: self.end.unwrap_or(defaults.end),
            max_attempts: self.max_attempts,
            step_factor: self.step_factor,
            ..defaults
        }
    }
}

/// Generate maze, write it out
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let started = Instant::now();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen
        .generate(&args.config())
        .context("Maze generation failed")?;

    if args.output.to_str() == Some("-") {
        export(&grid, io::stdout().lock())?;
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Cannot create {}", args.output.display()))?;
        export(&grid, BufWriter::new(file))
            .with_context(|| format!("Cannot write {}", args.output.display()))?;
        info!("maze written to {}", args.output.display());
    }

    info!("generation took {:.3} s", started.elapsed().as_secs_f64());
    Ok(())
}
