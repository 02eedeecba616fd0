use std::fmt::Write;

use crate::game::grid::Grid;
use crate::game::types::{CellVisual, GameMode};
use crate::game::visual::Snapshot;

const TITLE: &str = "Memory Path";
const TAGLINE: &str = "Remember the path and reach the exit";

/// Finish the current line without trailing padding.
fn end_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

fn symbol(visual: CellVisual) -> &'static str {
    match visual {
        CellVisual::Exploded => "XX",
        CellVisual::Current => "@@",
        CellVisual::Completed => "::",
        CellVisual::Revealed => "##",
        CellVisual::Default => "[]",
    }
}

/// Draw the board with column numbers on top and row numbers on the left.
pub fn render_board(snapshot: &Snapshot, grid: Grid) -> String {
    let mut out = String::from("    ");
    for col in 0..grid.cols {
        let _ = write!(out, "{:<3}", col);
    }
    end_line(&mut out);

    for row in 0..grid.rows {
        let _ = write!(out, "{:>2}  ", row);
        for col in 0..grid.cols {
            let cell = row * grid.cols + col;
            let _ = write!(out, "{:<3}", symbol(snapshot.cell_visual(cell)));
        }
        end_line(&mut out);
    }
    out
}

fn render_stats(snapshot: &Snapshot) -> String {
    format!(
        "Round {}  |  Score {}  |  Best {}",
        snapshot.round, snapshot.score, snapshot.high_score
    )
}

/// Full screen for `snapshot`: header, stats, status line and board or menu text.
pub fn render_screen(snapshot: &Snapshot) -> String {
    let mut out = format!("=== {} ===\n{}\n\n", TITLE, TAGLINE);

    if snapshot.mode != GameMode::Menu {
        out.push_str(&render_stats(snapshot));
        out.push_str("\n\n");
    }

    match snapshot.mode {
        GameMode::Menu => {
            out.push_str("Test Your Memory\n");
            out.push_str("Watch the safe path light up, memorize it, then walk it block by block\n");
            out.push_str("without falling. Each round gets harder!\n\n");
            out.push_str("Type `start` to begin, `help` for commands.\n");
        }
        GameMode::Memorize | GameMode::Play => {
            let status = match (snapshot.mode, snapshot.exploded_cell) {
                (GameMode::Memorize, _) => "Memorize the path!".to_string(),
                (_, Some(cell)) if snapshot.shaking => format!("BOOM! Block {} was not on the path!", cell),
                (_, Some(cell)) => format!("Block {} was not on the path.", cell),
                _ => "Now walk the path from memory!".to_string(),
            };
            out.push_str(&status);
            out.push_str("\n\n");
            if let Some(grid) = snapshot.grid {
                out.push_str(&render_board(snapshot, grid));
            }
            out.push_str("\nType a block number or `row col`. @@ is your position, :: the path so far.\n");
        }
        GameMode::GameOver => {
            out.push_str("Game Over!\n");
            let _ = writeln!(out, "You reached Round {}", snapshot.round);
            let _ = writeln!(out, "Final Score: {}", snapshot.score);
            if snapshot.new_high_score {
                out.push_str("New High Score!\n");
            }
            out.push_str("\nType `start` to play again.\n");
        }
    }

    out
}
