//! Console command parsing.
//!
//! A line is either a keyword (`start`, `help`, `state`, `quit`), a cell index (`7`),
//! or a `row col` pair (`1 2`). Cells are checked against the grid on screen before
//! anything reaches the game session.

use thiserror::Error;

use crate::game::grid::Grid;
use crate::game::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Click(usize),
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command (type `help` for the list of commands)")]
    Empty,
    #[error("Unknown command `{0}` (type `help` for the list of commands)")]
    Unknown(String),
    #[error("`{0}` is not a block number")]
    InvalidNumber(String),
    #[error("There is no grid on screen to click on")]
    NoGrid,
    #[error("Block {cell} is outside the grid (blocks 0 to {last})")]
    CellOutOfGrid { cell: usize, last: usize },
    #[error("Row {row}, column {col} is outside the {rows}x{cols} grid")]
    PositionOutOfGrid { row: usize, col: usize, rows: usize, cols: usize },
}

pub const HELP: &str = "\
Commands:
  start | s | restart   start a new game
  <n>                   click block number n (0 is top-left, row by row)
  <row> <col>           click the block at row, column (both from 0)
  state                 print the current state as JSON
  help | h              show this help
  quit | q              leave the game";

fn parse_number(token: &str) -> Result<usize, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

/// Parse one input line. `grid` is the board currently on screen, if any.
pub fn parse_command(line: &str, grid: Option<Grid>) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(CommandError::Empty),
        [word] if word.chars().all(|c| c.is_ascii_digit()) => {
            let grid = grid.ok_or(CommandError::NoGrid)?;
            let cell = parse_number(word)?;
            if grid.contains(cell) {
                Ok(Command::Click(cell))
            } else {
                Err(CommandError::CellOutOfGrid {
                    cell,
                    last: grid.cell_count().saturating_sub(1),
                })
            }
        }
        [word] => match word.to_ascii_lowercase().as_str() {
            "start" | "s" | "restart" => Ok(Command::Start),
            "state" => Ok(Command::Dump),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        },
        [row, col] => {
            let row = parse_number(row)?;
            let col = parse_number(col)?;
            let grid = grid.ok_or(CommandError::NoGrid)?;
            grid.cell_at(Position { row, col })
                .map(Command::Click)
                .ok_or(CommandError::PositionOutOfGrid {
                    row,
                    col,
                    rows: grid.rows,
                    cols: grid.cols,
                })
        }
        _ => Err(CommandError::Unknown(line.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("start", None), Ok(Command::Start));
        assert_eq!(parse_command("  S ", None), Ok(Command::Start));
        assert_eq!(parse_command("restart", None), Ok(Command::Start));
        assert_eq!(parse_command("state", None), Ok(Command::Dump));
        assert_eq!(parse_command("help", None), Ok(Command::Help));
        assert_eq!(parse_command("q", None), Ok(Command::Quit));
    }

    #[test]
    fn test_cell_index() {
        let grid = Some(Grid::square(5));
        assert_eq!(parse_command("7", grid), Ok(Command::Click(7)));
        assert_eq!(parse_command("0", grid), Ok(Command::Click(0)));
        assert_eq!(
            parse_command("25", grid),
            Err(CommandError::CellOutOfGrid { cell: 25, last: 24 })
        );
        assert_eq!(parse_command("7", None), Err(CommandError::NoGrid));
    }

    #[test]
    fn test_row_col() {
        let grid = Some(Grid::square(5));
        assert_eq!(parse_command("1 2", grid), Ok(Command::Click(7)));
        assert_eq!(
            parse_command("1 5", grid),
            Err(CommandError::PositionOutOfGrid { row: 1, col: 5, rows: 5, cols: 5 })
        );
        assert_eq!(
            parse_command("1 x", grid),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_command("   ", None), Err(CommandError::Empty));
        assert_eq!(parse_command("jump", None), Err(CommandError::Unknown("jump".to_string())));
        assert_eq!(
            parse_command("1 2 3", Some(Grid::square(5))),
            Err(CommandError::Unknown("1 2 3".to_string()))
        );
        // Too large to be a block number at all.
        assert_eq!(
            parse_command("99999999999999999999999", Some(Grid::square(5))),
            Err(CommandError::InvalidNumber("99999999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CommandError::CellOutOfGrid { cell: 30, last: 24 };
        assert_eq!(err.to_string(), "Block 30 is outside the grid (blocks 0 to 24)");
    }
}
