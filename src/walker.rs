//! Randomized walk that carves a maze from a start cell towards an end cell
//!
//! The walker keeps a stack of the cells it moved through. Each
//! [MazeWalker::step] draws up to four random directions and moves into the
//! first acceptable cell. A cell is acceptable when it lies in the interior,
//! is still a wall (or is the end cell), and has at most one visited
//! neighbour. The last rule keeps corridors one cell wide. When no draw is
//! acceptable, the walker pops its history and continues from there.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::error::MazeError;
use crate::grid::{Cell, Direction, Grid, Position};

/// Source of walking directions
///
/// Generation draws from an [Rng] through [RandomDirections]; tests may
/// script exact walks.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

/// Uniformly random directions from any [Rng]
pub struct RandomDirections<R> {
    random: R,
}

impl<R: Rng> RandomDirections<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }
}

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_direction(&mut self) -> Direction {
        self.random.gen()
    }
}

/// Lifecycle of a walker
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Phase {
    Uninitialized,
    StartSet,
    EndSet,
    Generating,
    Complete,
}

/// Result of a single [MazeWalker::step]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StepOutcome {
    /// Carved into a new cell
    Advanced(Position),
    /// No move found, cursor moved back to this history entry
    Backtracked(Position),
    /// Cursor is on the end cell
    Reached,
}

/// Maze builder walking a cursor over a grid of walls
pub struct MazeWalker<D> {
    grid: Grid,
    directions: D,
    phase: Phase,
    cursor: Position,
    end: Option<Position>,
    /// Path taken, popped on backtrack
    history: Vec<Position>,
    /// Every cell ever occupied
    visited: HashSet<Position>,
    steps: usize,
    dead_ends: usize,
}

impl<D: DirectionSource> MazeWalker<D> {
    /// Candidate draws per step
    const ATTEMPTS: usize = 4;

    pub fn new(rows: usize, cols: usize, directions: D) -> Result<Self, MazeError> {
        if rows < 3 || cols < 3 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            grid: Grid::new(rows, cols),
            directions,
            phase: Phase::Uninitialized,
            cursor: Position::new(0, 0),
            end: None,
            history: Vec::new(),
            visited: HashSet::new(),
            steps: 0,
            dead_ends: 0,
        })
    }

    /// Place the start cell and the cursor on it
    pub fn set_start(&mut self, pos: Position) -> Result<(), MazeError> {
        if self.phase != Phase::Uninitialized {
            return Err(MazeError::StartAlreadySet);
        }
        self.check_interior(pos)?;

        self.grid.set(pos, Cell::Start);
        self.cursor = pos;
        self.history.push(pos);
        self.visited.insert(pos);
        self.phase = Phase::StartSet;
        Ok(())
    }

    /// Place the end cell that the walk must reach
    pub fn set_end(&mut self, pos: Position) -> Result<(), MazeError> {
        match self.phase {
            Phase::Uninitialized => return Err(MazeError::StartNotSet),
            Phase::StartSet => (),
            _ => return Err(MazeError::EndAlreadySet),
        }
        self.check_interior(pos)?;
        if pos == self.cursor {
            return Err(MazeError::EndOnStart(pos));
        }

        self.grid.set(pos, Cell::End);
        self.end = Some(pos);
        self.phase = Phase::EndSet;
        Ok(())
    }

    fn check_interior(&self, pos: Position) -> Result<(), MazeError> {
        if self.grid.is_interior(pos) {
            Ok(())
        } else {
            Err(MazeError::OutsideInterior(pos))
        }
    }

    /// Take one step: advance into a new cell or backtrack
    pub fn step(&mut self) -> Result<StepOutcome, MazeError> {
        match self.phase {
            Phase::Uninitialized | Phase::StartSet => return Err(MazeError::NotReady),
            Phase::Complete => return Ok(StepOutcome::Reached),
            Phase::EndSet => self.phase = Phase::Generating,
            Phase::Generating => (),
        }
        self.steps += 1;

        for _ in 0..Self::ATTEMPTS {
            let direction = self.directions.next_direction();
            let Some(target) = self.cursor.step(direction) else {
                continue;
            };
            if self.is_acceptable(target) {
                return Ok(self.advance(target));
            }
        }

        // Dead end; the cursor is already in the visited set
        self.dead_ends += 1;
        self.backtrack()
    }

    /// Move back to the most recent history entry
    pub fn backtrack(&mut self) -> Result<StepOutcome, MazeError> {
        match self.history.pop() {
            Some(previous) => {
                self.cursor = previous;
                Ok(StepOutcome::Backtracked(previous))
            }
            None => {
                debug!(
                    "history exhausted at {} after {} steps",
                    self.cursor, self.steps
                );
                Err(MazeError::HistoryExhausted { steps: self.steps })
            }
        }
    }

    /// Step until the cursor reaches the end cell
    ///
    /// Fails with [MazeError::StepLimitExceeded] once `max_steps` steps have
    /// been taken in total without reaching the end.
    pub fn run_until_complete(&mut self, max_steps: usize) -> Result<&Grid, MazeError> {
        while !self.is_complete() {
            if self.steps >= max_steps {
                return Err(MazeError::StepLimitExceeded { limit: max_steps });
            }
            self.step()?;
        }
        debug!(
            "reached end in {} steps, {} dead ends",
            self.steps, self.dead_ends
        );
        Ok(&self.grid)
    }

    fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Target is enterable and would not widen a corridor
    fn is_acceptable(&self, target: Position) -> bool {
        self.grid.is_interior(target)
            && matches!(self.grid[target], Cell::Wall | Cell::End)
            && self.visited_neighbours(target) <= 1
    }

    fn visited_neighbours(&self, pos: Position) -> usize {
        pos.neighbours()
            .filter(|n| self.visited.contains(n))
            .count()
    }

    fn advance(&mut self, target: Position) -> StepOutcome {
        self.cursor = target;
        self.history.push(target);
        self.visited.insert(target);

        if Some(target) == self.end {
            self.phase = Phase::Complete;
            StepOutcome::Reached
        } else {
            self.grid.set(target, Cell::Path);
            StepOutcome::Advanced(target)
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited.contains(&pos)
    }

    /// Steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Steps that found no acceptable move
    pub fn dead_ends(&self) -> usize {
        self.dead_ends
    }
}
