use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use super::game_view::{self, Screen};
use crate::error::MoveError;
use crate::game::{Board, Choice, GameView, MoveSource, Outcome, Player, COLS};

/// Full-screen front-end. Acts as both move source and view so the turn loop
/// drives it exactly like the line prompt.
pub struct TuiFrontend<B: Backend> {
    terminal: Terminal<B>,
    screen: Screen,
}

impl<B: Backend> TuiFrontend<B>
where
    B::Error: std::fmt::Display,
{
    pub fn new(terminal: Terminal<B>) -> Self {
        TuiFrontend {
            terminal,
            screen: Screen::default(),
        }
    }

    /// Give the terminal back so the caller can restore it.
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn draw(&mut self) -> io::Result<()> {
        let screen = &self.screen;
        self.terminal
            .draw(|f| game_view::render(f, screen))
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(())
    }

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    /// Handle key press. Returns a choice once the player commits to one.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Choice> {
        // Clear message on any key press
        self.screen.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Choice::Quit),
            KeyCode::Left => {
                let selected = self.screen.selected_column;
                let legal = self.screen.board.legal_columns();
                if let Some(&col) = legal.iter().rev().find(|&&col| col < selected) {
                    self.screen.selected_column = col;
                }
                None
            }
            KeyCode::Right => {
                let selected = self.screen.selected_column;
                let legal = self.screen.board.legal_columns();
                if let Some(&col) = legal.iter().find(|&&col| col > selected) {
                    self.screen.selected_column = col;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(Choice::Column(self.screen.selected_column as i64 + 1))
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let column = i64::from(c as u8 - b'0');
                if (1..=COLS as i64).contains(&column) {
                    self.screen.selected_column = column as usize - 1;
                }
                Some(Choice::Column(column))
            }
            _ => None,
        }
    }
}

impl<B: Backend> MoveSource for TuiFrontend<B>
where
    B::Error: std::fmt::Display,
{
    fn next_move(&mut self, _board: &Board, _player: Player) -> io::Result<Choice> {
        loop {
            self.draw()?;
            let key = self.read_key()?;
            if let Some(choice) = self.handle_key(key) {
                return Ok(choice);
            }
        }
    }
}

impl<B: Backend> GameView for TuiFrontend<B>
where
    B::Error: std::fmt::Display,
{
    fn show_turn(&mut self, board: &Board, player: Player) -> io::Result<()> {
        self.screen.board = *board;
        self.screen.player = player;
        // Keep the cursor off full columns
        let selected = self.screen.selected_column;
        if let Some(&col) = board
            .legal_columns()
            .iter()
            .min_by_key(|&&col| col.abs_diff(selected))
        {
            self.screen.selected_column = col;
        }
        self.draw()
    }

    fn show_rejection(&mut self, _player: Player, error: &MoveError) -> io::Result<()> {
        self.screen.message = Some(error.to_string());
        self.draw()
    }

    fn show_outcome(&mut self, board: &Board, outcome: Outcome) -> io::Result<()> {
        self.screen.board = *board;
        self.screen.outcome = outcome;
        self.screen.message = Some(match outcome {
            Outcome::Winner(player) => format!("{} wins! Press any key to exit.", player.name()),
            Outcome::Draw => "It's a draw! Press any key to exit.".to_string(),
            Outcome::Open => "Press any key to exit.".to_string(),
        });
        self.draw()?;
        self.read_key()?;
        Ok(())
    }
}
