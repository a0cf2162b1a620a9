//! Maze generation with retries

use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Grid, Position};
use crate::walker::{MazeWalker, RandomDirections};

/// Parameters of a single maze
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub end: Position,
    /// Walks that starve are retried this many times in total
    pub max_attempts: usize,
    /// Step ceiling per walk, as a multiple of `rows * cols`
    pub step_factor: usize,
}

impl GeneratorConfig {
    /// Start in the bottom-left and end in the top-right corner of the
    /// interior
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            start: Position::new(rows.saturating_sub(2), 1),
            end: Position::new(1, cols.saturating_sub(2)),
            max_attempts: 16,
            step_factor: 50,
        }
    }

    pub fn step_limit(&self) -> usize {
        self.step_factor
            .saturating_mul(self.rows)
            .saturating_mul(self.cols)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::with_size(51, 51)
    }
}

/// Maze generator
///
/// Every attempt runs a fresh [MazeWalker] seeded from the generator's own
/// random source, so a seeded generator yields the same mazes every time.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a maze, retrying walks that starve
    ///
    /// Configuration errors are returned at once. After `max_attempts`
    /// starved walks, returns [MazeError::AttemptsExhausted].
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<Grid, MazeError> {
        for attempt in 1..=config.max_attempts {
            let seed: u64 = self.random.gen();
            match Self::walk(config, seed) {
                Ok(grid) => {
                    info!("maze generated on attempt {attempt} (seed {seed})");
                    return Ok(grid);
                }
                Err(e) if e.is_starvation() => {
                    warn!("attempt {attempt} with seed {seed} failed: {e}");
                }
                Err(e) => return Err(e),
            }
        }
        Err(MazeError::AttemptsExhausted {
            attempts: config.max_attempts,
        })
    }

    fn walk(config: &GeneratorConfig, seed: u64) -> Result<Grid, MazeError> {
        let directions = RandomDirections::new(StdRng::seed_from_u64(seed));
        let mut walker = MazeWalker::new(config.rows, config.cols, directions)?;
        walker.set_start(config.start)?;
        walker.set_end(config.end)?;
        walker.run_until_complete(config.step_limit())?;
        Ok(walker.into_grid())
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::{analyze, has_open_block};
    use crate::error::MazeError;
    use crate::grid::{Cell, Position};
    use crate::maze_generator::{GeneratorConfig, MazeGenerator};
    use crate::render::{parse, render};

    #[test]
    fn default_config_matches_classic_layout() {
        let config = GeneratorConfig::default();
        assert_eq!((config.rows, config.cols), (51, 51));
        assert_eq!(config.start, Position::new(49, 1));
        assert_eq!(config.end, Position::new(1, 49));
        assert_eq!(config.step_limit(), 50 * 51 * 51);
    }

    #[test]
    fn large_maze_completes_within_step_limit() {
        let mut gen = MazeGenerator::new(Some(0));
        let grid = gen.generate(&GeneratorConfig::default()).unwrap();

        assert_eq!(grid[Position::new(49, 1)], Cell::Start);
        assert_eq!(grid[Position::new(1, 49)], Cell::End);
        assert!(!has_open_block(&grid));
        assert!(analyze(&grid).shortest_path.is_some());
    }

    #[test]
    fn border_stays_walled() {
        let mut gen = MazeGenerator::new(Some(11));
        for (rows, cols) in [(7, 7), (9, 21), (25, 13)] {
            let grid = gen.generate(&GeneratorConfig::with_size(rows, cols)).unwrap();
            for (pos, cell) in grid.cells() {
                if !grid.is_interior(pos) {
                    assert_eq!(cell, Cell::Wall, "border cell {pos} is open");
                }
            }
            assert_eq!(grid.cells().filter(|(_, c)| *c == Cell::Start).count(), 1);
            assert_eq!(grid.cells().filter(|(_, c)| *c == Cell::End).count(), 1);
            assert!(!has_open_block(&grid));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let config = GeneratorConfig::with_size(21, 31);
        let a = MazeGenerator::new(Some(42)).generate(&config).unwrap();
        let b = MazeGenerator::new(Some(42)).generate(&config).unwrap();
        assert_eq!(render(&a), render(&b));
    }

    #[test]
    fn generated_maze_parses_back() {
        let grid = MazeGenerator::new(Some(5))
            .generate(&GeneratorConfig::with_size(15, 15))
            .unwrap();
        assert_eq!(parse(&render(&grid)).unwrap(), grid);
    }

    #[test]
    fn configuration_errors_are_not_retried() {
        let mut config = GeneratorConfig::with_size(9, 9);
        config.end = config.start;
        let err = MazeGenerator::new(Some(1)).generate(&config).unwrap_err();
        assert!(matches!(err, MazeError::EndOnStart(_)));

        let err = MazeGenerator::new(Some(1))
            .generate(&GeneratorConfig::with_size(2, 9))
            .unwrap_err();
        assert!(matches!(err, MazeError::InvalidDimensions { .. }));
    }

    #[test]
    fn starvation_exhausts_attempts() {
        // A zero step ceiling never reaches the end
        let mut config = GeneratorConfig::with_size(9, 9);
        config.step_factor = 0;
        config.max_attempts = 3;
        let err = MazeGenerator::new(Some(1)).generate(&config).unwrap_err();
        assert!(matches!(err, MazeError::AttemptsExhausted { attempts: 3 }));
        assert!(err.is_starvation());
    }
}
