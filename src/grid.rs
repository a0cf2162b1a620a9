//! Grid, cells and coordinates

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::error::MazeError;

/// Location in the maze, zero-based
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position in `direction`, if it does not underflow
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Orthogonal neighbours, in [Direction::ALL] order
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parse `"ROW,COL"`
impl FromStr for Position {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| MazeError::Malformed(format!("expected ROW,COL, got `{s}`")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| MazeError::Malformed(format!("bad coordinate `{v}`: {e}")))
        };
        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

/// Walking direction
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// (row, col) offset
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

/// Uniformly random direction, so that `rng.gen::<Direction>()` works
impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// State of a single square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    Wall,
    Path,
    Start,
    End,
}

impl Cell {
    const S_WALL: char = '■';
    const S_PATH: char = ' ';
    const S_START: char = 'S';
    const S_END: char = 'E';

    pub const fn glyph(self) -> char {
        match self {
            Cell::Wall => Self::S_WALL,
            Cell::Path => Self::S_PATH,
            Cell::Start => Self::S_START,
            Cell::End => Self::S_END,
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            Self::S_WALL => Some(Cell::Wall),
            Self::S_PATH => Some(Cell::Path),
            Self::S_START => Some(Cell::Start),
            Self::S_END => Some(Cell::End),
            _ => None,
        }
    }

    pub const fn is_open(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// Fixed-size rectangular grid of cells
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    squares: Vec<Vec<Cell>>,
}

impl Grid {
    /// Grid of `rows` x `cols` walls
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            squares: (0..rows)
                .map(|_| (0..cols).map(|_| Cell::Wall).collect())
                .collect(),
        }
    }

    /// Build from rows of cells. Rows must have equal length.
    pub(crate) fn from_rows(squares: Vec<Vec<Cell>>) -> Self {
        debug_assert!(squares.iter().map(Vec::len).all(|l| l == squares[0].len()));
        Self { squares }
    }

    pub fn rows(&self) -> usize {
        self.squares.len()
    }

    pub fn cols(&self) -> usize {
        self.squares.first().map_or(0, Vec::len)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.squares.get(pos.row)?.get(pos.col).copied()
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.squares[pos.row][pos.col] = cell;
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// Inside the grid, but not on the outermost ring
    pub fn is_interior(&self, pos: Position) -> bool {
        (1..self.rows().saturating_sub(1)).contains(&pos.row)
            && (1..self.cols().saturating_sub(1)).contains(&pos.col)
    }

    /// Iterate rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.squares.iter().map(Vec::as_slice)
    }

    /// Iterate all positions with their cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, c)| (Position::new(row, col), *c))
        })
    }

    /// First position holding `cell`
    pub fn find(&self, cell: Cell) -> Option<Position> {
        self.cells().find(|(_, c)| *c == cell).map(|(p, _)| p)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.squares[pos.row][pos.col]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::grid::{Cell, Direction, Grid, Position};

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert!(grid.cells().all(|(_, c)| c == Cell::Wall));
    }

    #[test]
    fn interior_excludes_border_ring() {
        let grid = Grid::new(5, 4);
        assert!(grid.is_interior(Position::new(1, 1)));
        assert!(grid.is_interior(Position::new(3, 2)));
        assert!(!grid.is_interior(Position::new(0, 1)));
        assert!(!grid.is_interior(Position::new(4, 1)));
        assert!(!grid.is_interior(Position::new(1, 3)));
        assert!(!grid.is_interior(Position::new(9, 9)));
        assert!(grid.contains(Position::new(4, 3)));
        assert!(!grid.contains(Position::new(4, 4)));
    }

    #[test]
    fn step_does_not_underflow() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Right), Some(Position::new(0, 1)));
        assert_eq!(corner.step(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(corner.neighbours().count(), 2);
        assert_eq!(Position::new(2, 2).neighbours().count(), 4);
    }

    #[test]
    fn parse_position() {
        assert_eq!("49,1".parse::<Position>().unwrap(), Position::new(49, 1));
        assert_eq!(" 3 , 7 ".parse::<Position>().unwrap(), Position::new(3, 7));
        assert!("49".parse::<Position>().is_err());
        assert!("a,1".parse::<Position>().is_err());
        assert!("-1,1".parse::<Position>().is_err());
    }

    #[test]
    fn glyphs_map_back_to_cells() {
        for cell in [Cell::Wall, Cell::Path, Cell::Start, Cell::End] {
            assert_eq!(Cell::from_glyph(cell.glyph()), Some(cell));
        }
        assert_eq!(Cell::from_glyph('#'), None);
    }

    #[test]
    fn random_directions_cover_all_four() {
        let mut rng = StdRng::seed_from_u64(3);
        let drawn: Vec<Direction> = (0..200).map(|_| rng.gen()).collect();
        for d in Direction::ALL {
            assert!(drawn.contains(&d), "{d:?} never drawn");
        }
    }
}
