//! # Connect Four
//!
//! Two-player Connect Four on a 6x7 board, played in the terminal either at a
//! line prompt or in a full-screen UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, turn loop
//! - [`ui`]: Front-ends: line prompt with text table, terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
