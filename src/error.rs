use std::path::PathBuf;

/// A rejected move. Never fatal: the turn loop reports it and
/// asks the same player again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The choice does not name a column on the board (out of range or not a
    /// number at all).
    #[error("invalid column: {0}")]
    InvalidInput(String),

    /// The column (0-based) has no empty cell left.
    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    /// A move was offered after the game ended. The turn loop stops at a
    /// terminal outcome, so this only comes from direct API use.
    #[error("the game is already over")]
    GameOver,
}

/// Errors from building a board out of a textual picture.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {col}: unknown cell glyph {glyph:?}")]
    Glyph { row: usize, col: usize, glyph: char },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(0).to_string(), "column 1 is full");
        assert_eq!(
            MoveError::InvalidInput("8 is not between 1 and 7".to_string()).to_string(),
            "invalid column: 8 is not between 1 and 7"
        );
    }

    #[test]
    fn test_board_parse_error_display() {
        let err = BoardParseError::Glyph {
            row: 2,
            col: 4,
            glyph: 'x',
        };
        assert_eq!(err.to_string(), "row 2, column 4: unknown cell glyph 'x'");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display glyphs must be distinct".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display glyphs must be distinct"
        );
    }
}
