use std::io::{self, BufRead, Write};

use super::table::{render_table, Glyphs};
use crate::error::MoveError;
use crate::game::{Board, Choice, GameView, MoveSource, Outcome, Player};

/// Line-oriented front-end: prints the board as a text table and reads one
/// column number per line.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    glyphs: Glyphs,
    color: bool,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W, glyphs: Glyphs, color: bool) -> Self {
        LinePrompt {
            input,
            output,
            glyphs,
            color,
        }
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_board(&mut self, board: &Board) -> io::Result<()> {
        let table = render_table(board, &self.glyphs, self.color);
        self.output.write_all(table.as_bytes())
    }
}

/// Turn one line of input into a choice. Surrounding whitespace is ignored;
/// anything that is not an integer is malformed.
pub fn parse_choice(line: &str) -> Choice {
    let text = line.trim();
    match text.parse::<i64>() {
        Ok(column) => Choice::Column(column),
        Err(_) => Choice::Malformed(text.to_string()),
    }
}

impl<R: BufRead, W: Write> MoveSource for LinePrompt<R, W> {
    fn next_move(&mut self, _board: &Board, _player: Player) -> io::Result<Choice> {
        writeln!(self.output, "Enter a column to place your piece: ")?;
        self.output.flush()?;

        // Raw bytes: undecodable input is a malformed choice, not an I/O error.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(Choice::Quit);
        }
        Ok(parse_choice(&String::from_utf8_lossy(&line)))
    }
}

impl<R: BufRead, W: Write> GameView for LinePrompt<R, W> {
    fn show_turn(&mut self, board: &Board, player: Player) -> io::Result<()> {
        writeln!(self.output, "{}'s turn: ", player.name())?;
        writeln!(self.output, "Here's the board!")?;
        self.print_board(board)
    }

    fn show_rejection(&mut self, _player: Player, error: &MoveError) -> io::Result<()> {
        writeln!(self.output, "{error}")
    }

    fn show_outcome(&mut self, board: &Board, _outcome: Outcome) -> io::Result<()> {
        self.print_board(board)?;
        self.output.flush()
    }
}
