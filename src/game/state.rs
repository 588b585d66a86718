use std::io;

use log::{debug, info};

use super::{Board, Outcome, Player, Position, COLS};
use crate::error::MoveError;

/// What a move source hands back for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A 1-based column number, not yet range checked.
    Column(i64),
    /// Text that is not a number at all.
    Malformed(String),
    /// The player left, or the input ran out.
    Quit,
}

/// Supplies column choices for the player whose turn it is. Blocking.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board, player: Player) -> io::Result<Choice>;
}

/// Presents the game. Purely presentational: nothing here feeds back into
/// game state.
pub trait GameView {
    /// Called once at the start of each turn.
    fn show_turn(&mut self, board: &Board, player: Player) -> io::Result<()>;

    /// Called when `player`'s choice was rejected; they will be asked again.
    fn show_rejection(&mut self, player: Player, error: &MoveError) -> io::Result<()>;

    /// Called once when the game ends with a winner or a draw.
    fn show_outcome(&mut self, board: &Board, outcome: Outcome) -> io::Result<()>;
}

/// A single game: the board, whose turn it is, and the current outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl Game {
    /// Start a game on an empty board.
    pub fn new(first: Player) -> Self {
        Game {
            board: Board::new(),
            current_player: first,
            outcome: Outcome::Open,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Play a 1-based column for the current player.
    ///
    /// On success the turn passes to the other player and the outcome is
    /// re-evaluated. On error nothing changes and the same player is still
    /// to move.
    pub fn play_column(&mut self, column: i64) -> Result<Position, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        if !(1..=COLS as i64).contains(&column) {
            return Err(MoveError::InvalidInput(format!(
                "there is no column {column} (choose 1-{COLS})"
            )));
        }

        let player = self.current_player;
        let pos = self.board.place(column - 1, player)?;
        debug!("{} placed at row {}, column {}", player, pos.row, pos.col);

        self.outcome = self.board.outcome();
        self.current_player = player.other();
        Ok(pos)
    }

    /// Apply one choice from a move source. `Quit` is not a move and is
    /// rejected as invalid input; [`Game::play`] handles it before calling
    /// this.
    pub fn apply(&mut self, choice: &Choice) -> Result<Position, MoveError> {
        match choice {
            Choice::Column(column) => self.play_column(*column),
            Choice::Malformed(text) => Err(MoveError::InvalidInput(format!(
                "{:?} is not a column number",
                text.trim()
            ))),
            Choice::Quit => Err(MoveError::InvalidInput("no column given".to_string())),
        }
    }

    /// Run the turn loop until the game ends or the source quits.
    ///
    /// `frontend` is both the move source and the view; pair two separate
    /// collaborators with a tuple `(source, view)`. Rejected choices are
    /// reported through the view and the same player is asked again, without
    /// limit. Returns the final outcome; `Open` means the source quit before
    /// the game was decided.
    pub fn play<F>(&mut self, frontend: &mut F) -> io::Result<Outcome>
    where
        F: MoveSource + GameView + ?Sized,
    {
        while !self.outcome.is_terminal() {
            let player = self.current_player;
            frontend.show_turn(&self.board, player)?;

            loop {
                let choice = frontend.next_move(&self.board, player)?;
                if choice == Choice::Quit {
                    info!("{} left the game before it was decided", player);
                    return Ok(Outcome::Open);
                }
                match self.apply(&choice) {
                    Ok(_) => break,
                    Err(err) => {
                        debug!("rejected {:?} from {}: {}", choice, player, err);
                        frontend.show_rejection(player, &err)?;
                    }
                }
            }
        }

        info!("game over: {:?}", self.outcome);
        frontend.show_outcome(&self.board, self.outcome)?;
        Ok(self.outcome)
    }
}

impl<S: MoveSource, V> MoveSource for (S, V) {
    fn next_move(&mut self, board: &Board, player: Player) -> io::Result<Choice> {
        self.0.next_move(board, player)
    }
}

impl<S, V: GameView> GameView for (S, V) {
    fn show_turn(&mut self, board: &Board, player: Player) -> io::Result<()> {
        self.1.show_turn(board, player)
    }

    fn show_rejection(&mut self, player: Player, error: &MoveError) -> io::Result<()> {
        self.1.show_rejection(player, error)
    }

    fn show_outcome(&mut self, board: &Board, outcome: Outcome) -> io::Result<()> {
        self.1.show_outcome(board, outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::Red)
    }
}
