//! Project configuration for new-puzzle.
//! Settings are read from an optional `new-puzzle.json`, `new-puzzle.yml` or
//! `new-puzzle.yaml` in the project root. Every field has a default, so a
//! project without a configuration file behaves like the stock layout.

use crate::constants::{CONFIG_FILES, INDEX_FILE, INPUT_EXT, INPUT_PREFIX, SAMPLE_INFIX};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root the program was built from, used when `--root` is not given.
pub const PROJECT_DIR: &str = env!("CARGO_MANIFEST_DIR");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Puzzle year, used in the link written into each stub
    pub year: u32,
    /// Directory holding the per-day stubs and the index, relative to the root
    pub puzzle_dir: PathBuf,
    /// Directory holding the input placeholders, relative to the root
    pub input_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year: 2022,
            puzzle_dir: PathBuf::from("src/puzzles"),
            input_dir: PathBuf::from("input"),
        }
    }
}

/// Reads the first configuration file found in `root`.
///
/// # Returns
/// * `Result<Option<String>>` - File contents, or `None` if no file exists
pub fn load_config<P: AsRef<Path>>(root: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = root.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads and parses the project configuration, falling back to defaults.
pub fn get_config<P: AsRef<Path>>(root: P) -> Result<Config> {
    match load_config(root, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}

/// Resolves the project root: an explicit override, or the build directory.
pub fn resolve_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| PathBuf::from(PROJECT_DIR))
}

/// Absolute locations of every file the scaffold touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub puzzle_dir: PathBuf,
    pub input_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new<P: AsRef<Path>>(root: P, config: &Config) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            puzzle_dir: root.join(&config.puzzle_dir),
            input_dir: root.join(&config.input_dir),
            root,
        }
    }

    pub fn stub_file(&self, day: i64) -> PathBuf {
        self.puzzle_dir.join(format!("day_{day}.rs"))
    }

    pub fn index_file(&self) -> PathBuf {
        self.puzzle_dir.join(INDEX_FILE)
    }

    pub fn input_file(&self, day: i64) -> PathBuf {
        self.input_dir.join(format!("{INPUT_PREFIX}{day}{INPUT_EXT}"))
    }

    pub fn sample_file(&self, day: i64) -> PathBuf {
        self.input_dir.join(format!("{INPUT_PREFIX}{day}{SAMPLE_INFIX}{INPUT_EXT}"))
    }

    /// Path of `path` relative to the root, with `/` separators.
    ///
    /// Paths outside the root are shown as they are.
    pub fn display_relative(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.display().to_string(),
        }
    }
}
