//! Text form of a maze
//!
//! Each cell is written as [PADDING] followed by its glyph, one line per
//! grid row. [parse] reads the same format back.

use std::fmt;
use std::io::Write;

use itertools::Itertools;

use crate::error::MazeError;
use crate::grid::{Cell, Grid};

/// Printed before every glyph
pub const PADDING: &str = "  ";

/// Render a grid as text, newline-terminated per row
pub fn render(grid: &Grid) -> String {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{PADDING}{}", cell.glyph()))
                .join("")
                + "\n"
        })
        .collect()
}

/// Write the rendered grid into `sink`
///
/// Write errors are returned as [MazeError::Export]; the grid is unaffected
/// and may be exported again.
pub fn export<W: Write>(grid: &Grid, mut sink: W) -> Result<(), MazeError> {
    sink.write_all(render(grid).as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Parse text produced by [render]
///
/// Returns error, if the text contains unknown glyphs, broken padding or
/// rows of unequal width.
pub fn parse(text: &str) -> Result<Grid, MazeError> {
    let pad: Vec<char> = PADDING.chars().collect();
    let width = pad.len() + 1;

    let squares = text
        .lines()
        .enumerate()
        .map(|(row, line)| {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() % width != 0 {
                return Err(MazeError::Malformed(format!(
                    "row {row} has {} characters, not a multiple of {width}",
                    chars.len()
                )));
            }
            chars
                .chunks(width)
                .enumerate()
                .map(|(col, chunk)| match chunk {
                    [padding @ .., glyph] if padding == pad.as_slice() => Cell::from_glyph(*glyph)
                        .ok_or(MazeError::UnexpectedGlyph {
                            glyph: *glyph,
                            row,
                            col,
                        }),
                    _ => Err(MazeError::Malformed(format!(
                        "missing padding at row={row}, col={col}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    if squares.is_empty() || squares[0].is_empty() {
        return Err(MazeError::Malformed("maze is empty".to_string()));
    }
    if !squares.iter().map(Vec::len).all_equal() {
        return Err(MazeError::Malformed("rows have unequal width".to_string()));
    }
    Ok(Grid::from_rows(squares))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
