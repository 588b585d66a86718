use std::collections::VecDeque;
use std::io;

use super::{Board, Choice, MoveSource, Player};

/// A move source that replays a fixed list of choices, for both players in
/// turn order. Once the list runs out it answers `Quit`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    choices: VecDeque<Choice>,
}

impl ScriptedMoves {
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        ScriptedMoves {
            choices: choices.into_iter().collect(),
        }
    }

    /// Script of 1-based column numbers.
    pub fn columns(columns: impl IntoIterator<Item = i64>) -> Self {
        Self::new(columns.into_iter().map(Choice::Column))
    }

    pub fn is_exhausted(&self) -> bool {
        self.choices.is_empty()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _board: &Board, _player: Player) -> io::Result<Choice> {
        Ok(self.choices.pop_front().unwrap_or(Choice::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_quits() {
        let board = Board::new();
        let mut moves = ScriptedMoves::columns([4, 2]);
        assert_eq!(moves.next_move(&board, Player::Red).unwrap(), Choice::Column(4));
        assert_eq!(moves.next_move(&board, Player::Blue).unwrap(), Choice::Column(2));
        assert!(moves.is_exhausted());
        assert_eq!(moves.next_move(&board, Player::Red).unwrap(), Choice::Quit);
    }
}
