//! Core Connect Four game logic: the board and its placement rule, player
//! types, win detection, and the turn loop that drives a game through
//! pluggable input and display collaborators.

mod board;
mod player;
mod script;
mod state;
mod win;

pub use board::{Board, Cell, Position, COLS, ROWS};
pub use player::Player;
pub use script::ScriptedMoves;
pub use state::{Choice, Game, GameView, MoveSource};
pub use win::{evaluate, Outcome};
