//! Carve a maze by walking randomly from a start cell to an end cell
//!
//! The walk only moves into cells with at most one visited neighbour, which
//! keeps corridors one cell wide. When it gets stuck, it backtracks along
//! the path it came from.
//!
//! # Examples
//! ## Seeded generation
//! ```
//! use maze_walker::{render, MazeGenerator, GeneratorConfig};
//!
//! let mut gen = MazeGenerator::new(Some(7));
//! let grid = gen.generate(&GeneratorConfig::with_size(11, 21)).unwrap();
//! print!("{}", render(&grid));
//! ```
//!
//! ## Stepping a walker by hand
//! ```
//! use maze_walker::{MazeWalker, Phase, Position, RandomDirections};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let directions = RandomDirections::new(StdRng::seed_from_u64(1));
//! let mut walker = MazeWalker::new(9, 9, directions).unwrap();
//! walker.set_start(Position::new(7, 1)).unwrap();
//! walker.set_end(Position::new(1, 7)).unwrap();
//!
//! while walker.phase() != Phase::Complete {
//!     if walker.step().is_err() {
//!         break; // starved, try another seed
//!     }
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod render;
pub mod walker;

pub use analysis::{analyze, has_open_block, MazeStats};
pub use error::MazeError;
pub use grid::{Cell, Direction, Grid, Position};
pub use maze_generator::{GeneratorConfig, MazeGenerator};
pub use render::{export, parse, render};
pub use walker::{DirectionSource, MazeWalker, Phase, RandomDirections, StepOutcome};
