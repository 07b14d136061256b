//! Common constants used throughout new-puzzle.

/// Supported configuration file names, tried in order
pub const CONFIG_FILES: [&str; 3] = ["new-puzzle.json", "new-puzzle.yml", "new-puzzle.yaml"];

/// Name of the generated index file inside the puzzle directory
pub const INDEX_FILE: &str = "mod.rs";

/// Prefix of every input placeholder file
pub const INPUT_PREFIX: &str = "D";

/// Extension of input placeholder files
pub const INPUT_EXT: &str = ".txt";

/// Infix marking the sample variant of an input file
pub const SAMPLE_INFIX: &str = ".dbg";

/// Template tokens
pub mod tokens {
    pub const DAY: &str = "<D>";
    pub const YEAR: &str = "<Y>";
    pub const FILE: &str = "<F>";
    pub const MODULES: &str = "<M>";
    pub const COUNT: &str = "<N>";
    pub const PUZZLES: &str = "<P>";
}
