use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, DisplayConfig, Frontend};
use connect_four::game::{Game, Outcome, Player};
use connect_four::ui::{Glyphs, LinePrompt, TuiFrontend};

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Use the full-screen terminal UI instead of the line prompt
    #[arg(long)]
    tui: bool,

    /// Disable colours in the line prompt's board table
    #[arg(long)]
    no_color: bool,

    /// Who moves first: red or blue
    #[arg(long, value_parser = parse_player)]
    first: Option<Player>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.to_ascii_lowercase().as_str() {
        "red" | "a" => Ok(Player::Red),
        "blue" | "b" => Ok(Player::Blue),
        other => Err(format!("unknown player '{other}' (expected 'red' or 'blue')")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.tui {
        config.display.frontend = Frontend::Tui;
    }
    if cli.no_color || !io::stdout().is_terminal() {
        config.display.color = false;
    }
    if let Some(first) = cli.first {
        config.game.first_player = first;
    }

    println!("Welcome to Connect Four!");
    let mut game = Game::new(config.game.first_player);
    info!(
        "starting game, {} moves first, {:?} front-end",
        game.current_player(),
        config.display.frontend
    );

    let outcome = match config.display.frontend {
        Frontend::Line => play_line(&mut game, &config.display),
        Frontend::Tui => play_tui(&mut game),
    }
    .context("terminal I/O failed")?;

    println!("{}", summary(outcome));
    Ok(())
}

fn play_line(game: &mut Game, display: &DisplayConfig) -> io::Result<Outcome> {
    let mut prompt = LinePrompt::new(
        io::stdin().lock(),
        io::stdout().lock(),
        Glyphs::from(display),
        display.color,
    );
    game.play(&mut prompt)
}

fn play_tui(game: &mut Game) -> io::Result<Outcome> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut tui = TuiFrontend::new(Terminal::new(backend)?);

    let res = game.play(&mut tui);

    // Restore terminal, even if the game loop failed
    let mut terminal = tui.into_terminal();
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

fn summary(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Winner(Player::Red) => "Red wins!",
        Outcome::Winner(Player::Blue) => "Blue wins!",
        Outcome::Draw => "Draw!",
        Outcome::Open => "Game abandoned.",
    }
}
