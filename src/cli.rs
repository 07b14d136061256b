//! Command-line interface implementation for new-puzzle.
//! Provides argument parsing and DAY validation using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Command-line arguments structure for new-puzzle.
#[derive(Parser, Debug)]
#[command(author, version, about = "new-puzzle: scaffold a daily puzzle solution", long_about = None)]
pub struct Args {
    /// Day number to scaffold
    #[arg(value_name = "DAY", allow_negative_numbers = true)]
    pub day: Option<String>,

    /// Also create a sample input file for the day
    #[arg(short, long)]
    pub sample: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root, defaults to the directory new-puzzle was built from
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl Args {
    /// Parses the DAY argument.
    ///
    /// # Errors
    /// * `Error::MissingDay` if DAY was not given
    /// * `Error::InvalidDay` if DAY is not an integer
    pub fn day(&self) -> Result<i64> {
        parse_day(self.day.as_deref())
    }
}

pub fn parse_day(day: Option<&str>) -> Result<i64> {
    let day = day.ok_or(Error::MissingDay)?;
    day.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidDay(day.to_string()))
}

/// Long flags understood by [`Args`], besides `--root` which takes a value.
const LONG_FLAGS: [&str; 4] = ["sample", "verbose", "help", "version"];

/// Short flags understood by [`Args`], possibly combined as in `-sv`.
const SHORT_FLAGS: &str = "svhV";

fn is_known_flag(arg: &str) -> bool {
    match arg.strip_prefix("--") {
        Some(long) => LONG_FLAGS.contains(&long) || long.starts_with("root="),
        None => {
            arg.len() > 1
                && arg.starts_with('-')
                && arg[1..].chars().all(|c| SHORT_FLAGS.contains(c))
        }
    }
}

/// Keeps the arguments [`Args`] understands and drops everything else.
///
/// The first argument that is not a flag is DAY (negative numbers included).
/// Later positionals, unknown flags and `--` are ignored, so only a missing
/// or unparseable DAY stops the run.
pub fn known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut has_day = false;

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();
        if text == "--root" {
            kept.push(arg);
            kept.extend(args.next());
        } else if is_known_flag(&text) {
            kept.push(arg);
        } else if !has_day && (!text.starts_with('-') || text.parse::<i64>().is_ok()) {
            has_day = true;
            kept.push(arg);
        }
    }
    kept
}

/// Parses `args` after dropping the ones new-puzzle ignores.
pub fn parse_args_from<I, T>(args: I) -> std::result::Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(known_args(args))
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for `--help`, `--version` or a
///   `--root` without a value
pub fn get_args() -> Args {
    parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}
