//! CLI for maze inspection

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::bail;
use clap::Parser;
use maze_walker::{analyze, has_open_block, parse};

/// Report the layout of a generated maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Echo the maze before the report
    #[arg(short, long)]
    print: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print report
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(args.file)?
    };
    let grid = parse(&text)?;

    if args.print {
        print!("{grid}");
    }
    if has_open_block(&grid) {
        bail!("Maze contains an open 2x2 block");
    }
    analyze(&grid).print_report();
    Ok(())
}
