use crate::game::{Board, Cell, Outcome, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the full-screen view draws.
#[derive(Debug, Clone)]
pub struct Screen {
    pub board: Board,
    pub player: Player,
    pub outcome: Outcome,
    pub selected_column: usize,
    pub message: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            board: Board::new(),
            player: Player::Red,
            outcome: Outcome::Open,
            selected_column: COLS / 2, // Start in middle
            message: None,
        }
    }
}

pub fn render(frame: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, screen, chunks[0]);
    render_board(frame, &screen.board, screen.selected_column, chunks[1]);
    render_message(frame, &screen.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Blue => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, screen: &Screen, area: Rect) {
    let (status, color) = match screen.outcome {
        Outcome::Open => (
            format!("Current Player: {}", screen.player.name()),
            player_color(screen.player),
        ),
        Outcome::Winner(player) => (format!("Game Over  |  {} wins", player.name()), player_color(player)),
        Outcome::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("     ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if board.is_column_full(col) {
            col_line.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        } else if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("    ╔═════════════════════╗"));

    // Board rows, lettered like the text table
    for row in 0..ROWS {
        let label = (b'A' + row as u8) as char;
        let mut row_spans = vec![Span::raw(format!("  {label} ║"))];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Blue => (" ● ", Color::Blue),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw("║ "));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("    ╚═════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("     ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
