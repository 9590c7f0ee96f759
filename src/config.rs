//! Configuration: optional TOML file plus command-line flags
//!
//! Precedence: defaults, then the config file, then CLI flags.

use crate::data::WordList;
use crate::game::DEFAULT_MAX_TRIES;
use crate::Result;
use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "gallows.toml";

/// Gallows - hangman for the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "gallows")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Player name shown in the player bar
    #[arg(short, long)]
    pub player: Option<String>,

    /// Misses allowed per round
    #[arg(short, long)]
    pub tries: Option<u32>,

    /// Word list file, one word per line ('#' starts a comment)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Settings read from the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Player name
    #[serde(default = "default_player")]
    pub player: String,
    /// Misses allowed per round
    #[serde(default = "default_tries")]
    pub max_tries: u32,
    /// Custom word list; the built-in list is used when empty
    #[serde(default)]
    pub words: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            max_tries: default_tries(),
            words: Vec::new(),
        }
    }
}

fn default_player() -> String {
    "Player".to_string()
}

fn default_tries() -> u32 {
    DEFAULT_MAX_TRIES
}

/// Fully resolved settings the game is built from
#[derive(Debug, Clone)]
pub struct Config {
    pub player: String,
    pub max_tries: u32,
    pub words: WordList,
}

impl Config {
    /// Merge defaults, config file, and CLI flags (CLI wins)
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::read(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    FileConfig::read(default_path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let words = match &cli.words {
            Some(path) => WordList::from_file(path)?,
            None if !file.words.is_empty() => WordList::new(&file.words)?,
            None => WordList::default(),
        };

        Ok(Self {
            player: cli.player.clone().unwrap_or(file.player),
            max_tries: cli.tries.unwrap_or(file.max_tries),
            words,
        })
    }
}

impl FileConfig {
    fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file_or_flags() {
        let config = Config::load(&Cli::default()).unwrap();
        assert_eq!(config.player, "Player");
        assert_eq!(config.max_tries, DEFAULT_MAX_TRIES);
        assert!(!config.words.is_empty());
    }

    #[test]
    fn file_settings_apply() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player = \"Ada\"").unwrap();
        writeln!(file, "max_tries = 5").unwrap();
        writeln!(file, "words = [\"cat\", \"piano\"]").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.player, "Ada");
        assert_eq!(config.max_tries, 5);
        assert_eq!(config.words.words(), ["CAT", "PIANO"]);
    }

    #[test]
    fn cli_flags_beat_file_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player = \"Ada\"").unwrap();
        writeln!(file, "max_tries = 5").unwrap();

        let cli = Cli {
            player: Some("Grace".to_string()),
            tries: Some(9),
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.player, "Grace");
        assert_eq!(config.max_tries, 9);
    }

    #[test]
    fn word_file_flag_beats_file_words() {
        let mut config_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(config_file, "words = [\"cat\"]").unwrap();
        let mut word_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(word_file, "stereo").unwrap();

        let cli = Cli {
            words: Some(word_file.path().to_path_buf()),
            config: Some(config_file.path().to_path_buf()),
            ..Cli::default()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.words.words(), ["STEREO"]);
    }
}
