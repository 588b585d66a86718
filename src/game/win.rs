//! Win detection over a whole board.
//!
//! Every run of four is examined by sliding a window over the board in four
//! directions. The scan order is vertical, horizontal, down-right diagonal,
//! then up-right diagonal, and the first completed run is reported.

use super::board::{Board, Cell, COLS, ROWS};
use super::Player;

const RUN: usize = 4;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No alignment yet and at least one empty cell remains.
    Open,
    Winner(Player),
    /// Board full with no alignment.
    Draw,
}

impl Outcome {
    /// Check if the game is over
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Open)
    }
}

/// Step between cells of a run, plus the start positions where a whole run
/// fits on the board.
struct Direction {
    d_row: isize,
    d_col: isize,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
}

const DIRECTIONS: [Direction; 4] = [
    // vertical
    Direction {
        d_row: 1,
        d_col: 0,
        rows: 0..ROWS - RUN + 1,
        cols: 0..COLS,
    },
    // horizontal
    Direction {
        d_row: 0,
        d_col: 1,
        rows: 0..ROWS,
        cols: 0..COLS - RUN + 1,
    },
    // diagonal, down-right
    Direction {
        d_row: 1,
        d_col: 1,
        rows: 0..ROWS - RUN + 1,
        cols: 0..COLS - RUN + 1,
    },
    // diagonal, up-right
    Direction {
        d_row: -1,
        d_col: 1,
        rows: RUN - 1..ROWS,
        cols: 0..COLS - RUN + 1,
    },
];

/// Evaluate the board: a winner if any four-in-a-row exists, otherwise
/// `Open` while an empty cell remains anywhere, otherwise `Draw`.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = find_alignment(board) {
        return Outcome::Winner(player);
    }

    // Fullness is a separate pass over every cell, not a by-product of the
    // run scan, since some cells are never the start of a run.
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Open
    }
}

/// First completed run in scan order, if any.
fn find_alignment(board: &Board) -> Option<Player> {
    for dir in &DIRECTIONS {
        for row in dir.rows.clone() {
            for col in dir.cols.clone() {
                let first = board.get(row, col);
                if first == Cell::Empty {
                    continue;
                }
                let complete = (1..RUN).all(|k| {
                    let r = row as isize + dir.d_row * k as isize;
                    let c = col as isize + dir.d_col * k as isize;
                    board.get(r as usize, c as usize) == first
                });
                if complete {
                    return first.owner();
                }
            }
        }
    }
    None
}

impl Board {
    /// Evaluate this board. See [`evaluate`].
    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two-wide stripes that flip every row: no run anywhere longer than two.
    const DRAWN: [&str; ROWS] = [
        "RRBBRRB", "BBRRBBR", "RRBBRRB", "BBRRBBR", "RRBBRRB", "BBRRBBR",
    ];

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_board_is_open() {
        assert_eq!(Board::new().outcome(), Outcome::Open);
    }

    #[test]
    fn test_horizontal_win_on_bottom_row() {
        let b = board(&[
            ".......", ".......", ".......", ".......", ".......", "RRRR...",
        ]);
        assert_eq!(b.outcome(), Outcome::Winner(Player::Red));
    }

    #[test]
    fn test_vertical_win() {
        let b = board(&[
            ".......", ".......", "...B...", "...B...", "...B...", "...B...",
        ]);
        assert_eq!(b.outcome(), Outcome::Winner(Player::Blue));
    }

    #[test]
    fn test_down_right_diagonal_win() {
        let b = board(&[
            ".......", ".......", "R......", ".R.....", "..R....", "...R...",
        ]);
        assert_eq!(b.outcome(), Outcome::Winner(Player::Red));
    }

    #[test]
    fn test_up_right_diagonal_win() {
        let b = board(&[
            ".......", ".......", "......B", ".....B.", "....B..", "...B...",
        ]);
        assert_eq!(b.outcome(), Outcome::Winner(Player::Blue));
    }

    #[test]
    fn test_runs_touching_far_edges() {
        let top_right = board(&[
            "...RRRR", ".......", ".......", ".......", ".......", ".......",
        ]);
        assert_eq!(top_right.outcome(), Outcome::Winner(Player::Red));

        let right_column = board(&[
            "......B", "......B", "......B", "......B", ".......", ".......",
        ]);
        assert_eq!(right_column.outcome(), Outcome::Winner(Player::Blue));
    }

    #[test]
    fn test_three_in_a_row_is_open() {
        let b = board(&[
            ".......", ".......", ".......", "B......", "B......", "RRRB...",
        ]);
        assert_eq!(b.outcome(), Outcome::Open);
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let b = board(&[
            ".......", ".......", ".......", ".......", ".......", "RRBRR..",
        ]);
        assert_eq!(b.outcome(), Outcome::Open);
    }

    #[test]
    fn test_full_board_without_alignment_is_draw() {
        let b = board(&DRAWN);
        assert!(b.is_full());
        assert_eq!(b.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_empty_cell_outside_run_starts_is_not_a_draw() {
        // (5, 6) never starts a run in any direction. A detector that only
        // notices empties while scanning run starts would call this a draw.
        let mut rows = DRAWN;
        rows[5] = "BBRRBB.";
        let b = board(&rows);
        assert!(!b.is_full());
        assert_eq!(b.outcome(), Outcome::Open);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut rows = DRAWN;
        rows[2] = "RRBBBBB";
        let b = board(&rows);
        assert!(b.is_full());
        assert_eq!(b.outcome(), Outcome::Winner(Player::Blue));
    }

    #[test]
    fn test_scan_order_reports_vertical_before_horizontal() {
        let b = board(&[
            ".......", ".......", "B......", "B......", "B......", "BRRRR..",
        ]);
        assert_eq!(b.outcome(), Outcome::Winner(Player::Blue));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        for rows in [
            DRAWN,
            [
                ".......", ".......", ".......", ".......", ".......", "RRRR...",
            ],
            [
                ".......", ".......", ".......", ".......", ".......", "RB.....",
            ],
        ] {
            let b = board(&rows);
            assert_eq!(b.outcome(), b.outcome());
        }
    }

    #[test]
    fn test_is_terminal() {
        assert!(!Outcome::Open.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Winner(Player::Red).is_terminal());
    }
}
