//! new-puzzle scaffolds one day of a daily puzzle project.
//! It writes a solution stub, regenerates the registry of all days so far,
//! and touches the day's input placeholder files.

/// Command-line interface module for new-puzzle
pub mod cli;

/// Project configuration and file layout
/// Supports JSON and YAML formats (new-puzzle.json, new-puzzle.yml, new-puzzle.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Registry entries and their orderings
pub mod index;

/// Logger setup
pub mod logger;

/// Token substitution over template strings
pub mod renderer;

/// File generation orchestration
pub mod scaffold;

/// Stub and index templates
pub mod templates;

use cli::Args;
use config::{get_config, resolve_root, ProjectPaths};
use error::Result;
use renderer::TokenRenderer;
use scaffold::{Generated, ScaffoldWriter};

/// Validates the arguments, then scaffolds the requested day.
///
/// # Flow
/// 1. Parses DAY, failing before any file is touched
/// 2. Resolves the project root and loads its configuration
/// 3. Writes the stub and index, then touches the input files
pub fn run(args: &Args) -> Result<Vec<Generated>> {
    let day = args.day()?;
    let root = resolve_root(args.root.clone());
    log::debug!("Scaffolding day {day} in {}", root.display());

    let config = get_config(&root)?;
    let paths = ProjectPaths::new(&root, &config);
    let engine = TokenRenderer::new();

    ScaffoldWriter::new(&engine, &paths, config.year).scaffold(day, args.sample)
}
