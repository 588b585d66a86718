//! Front-ends for a game: a line prompt that prints the board as a text
//! table, and a full-screen terminal UI.

mod app;
mod game_view;
pub mod prompt;
pub mod table;

pub use app::TuiFrontend;
pub use prompt::LinePrompt;
pub use table::{render_table, Glyphs};
