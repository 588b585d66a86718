use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who drops the first piece.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Player::Red,
        }
    }
}

/// Which front-end runs the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    /// Line prompt on stdin/stdout with a text table.
    Line,
    /// Full-screen terminal UI.
    Tui,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frontend: Frontend,
    /// ANSI colours in the text table.
    pub color: bool,
    pub red_glyph: char,
    pub blue_glyph: char,
    pub empty_glyph: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            frontend: Frontend::Line,
            color: true,
            red_glyph: 'R',
            blue_glyph: 'B',
            empty_glyph: '_',
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        for (name, glyph) in [
            ("red_glyph", d.red_glyph),
            ("blue_glyph", d.blue_glyph),
            ("empty_glyph", d.empty_glyph),
        ] {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::Validation(format!(
                    "display.{name} must be a visible character"
                )));
            }
        }
        if d.red_glyph == d.blue_glyph
            || d.red_glyph == d.empty_glyph
            || d.blue_glyph == d.empty_glyph
        {
            return Err(ConfigError::Validation(
                "display glyphs must be distinct".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.first_player, Player::Red);
        assert_eq!(config.display.frontend, Frontend::Line);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
first_player = "blue"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.first_player, Player::Blue);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_frontend_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[display]\nfrontend = \"web\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_glyphs() {
        let mut config = AppConfig::default();
        config.display.blue_glyph = 'R';
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.display.empty_glyph = 'B';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_glyph() {
        let mut config = AppConfig::default();
        config.display.empty_glyph = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
frontend = "tui"
color = false
empty_glyph = "."
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.display.frontend, Frontend::Tui);
        assert!(!config.display.color);
        assert_eq!(config.display.empty_glyph, '.');
        // Others are defaults
        assert_eq!(config.display.red_glyph, 'R');
        assert_eq!(config.game.first_player, Player::Red);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\nred_glyph = \"B\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
