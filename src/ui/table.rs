//! Plain-text rendering of the board as a bordered table with column numbers
//! across the top and row letters down the side.

use crossterm::style::{style, Color, Stylize};

use crate::config::DisplayConfig;
use crate::game::{Board, Cell, COLS, ROWS};

const ROW_LABELS: [char; ROWS] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Characters used for each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub red: char,
    pub blue: char,
    pub empty: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for Glyphs {
    fn from(display: &DisplayConfig) -> Self {
        Glyphs {
            red: display.red_glyph,
            blue: display.blue_glyph,
            empty: display.empty_glyph,
        }
    }
}

/// Render the board, one table line per output line, ending with a newline.
pub fn render_table(board: &Board, glyphs: &Glyphs, color: bool) -> String {
    let mut rule = String::from("+");
    for _ in 0..=COLS {
        rule.push_str("---+");
    }

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');

    out.push_str("| # |");
    for col in 0..COLS {
        out.push_str(&format!(" {} |", col + 1));
    }
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for (row, label) in ROW_LABELS.iter().enumerate() {
        out.push_str(&format!("| {label} |"));
        for col in 0..COLS {
            out.push_str(&format!(" {} |", cell_text(board.get(row, col), glyphs, color)));
        }
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn cell_text(cell: Cell, glyphs: &Glyphs, color: bool) -> String {
    let (glyph, fg) = match cell {
        Cell::Empty => (glyphs.empty, Color::DarkGrey),
        Cell::Red => (glyphs.red, Color::Red),
        Cell::Blue => (glyphs.blue, Color::Blue),
    };
    if color {
        style(glyph).with(fg).to_string()
    } else {
        glyph.to_string()
    }
}
