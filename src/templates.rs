//! The two fixed templates and the functions that fill them.

use crate::constants::tokens;
use crate::index::IndexBlocks;
use crate::renderer::{Context, TemplateRenderer};

/// Skeleton for a single day's solution.
pub const STUB_TEMPLATE: &str = "\
/*
** <F>
** https://adventofcode.com/<Y>/day/<D>
*/

use crate::types::Solution;
use crate::utils;

use anyhow::Result;

pub fn run(input: String) -> Result<Solution> {
    let mut solution = Solution::new();

    // part 1: ???

    // part 2: ???

    Ok(solution)
}

";

/// Registry declaring and listing every day.
pub const INDEX_TEMPLATE: &str = "\
/*
** <F>
*/

<M>

use crate::types::Puzzle;

pub const N_DAYS: usize = <N>;

pub const DAYS: [Puzzle; N_DAYS] = [
<P>
];
";

/// Renders the stub for `day`.
///
/// # Arguments
/// * `file` - Stub path relative to the project root, shown in the banner
pub fn render_stub(engine: &dyn TemplateRenderer, day: i64, year: u32, file: &str) -> String {
    let mut context = Context::new();
    context.insert(tokens::YEAR, year.to_string());
    context.insert(tokens::DAY, day.to_string());
    // last, so tokens inside a configured path stay literal
    context.insert(tokens::FILE, file.to_string());
    engine.render(STUB_TEMPLATE, &context)
}

/// Renders the index from precomputed blocks.
pub fn render_index(engine: &dyn TemplateRenderer, blocks: &IndexBlocks, file: &str) -> String {
    let mut context = Context::new();
    context.insert(tokens::COUNT, blocks.count.to_string());
    context.insert(tokens::MODULES, blocks.declarations.clone());
    context.insert(tokens::PUZZLES, blocks.registrations.clone());
    context.insert(tokens::FILE, file.to_string());
    engine.render(INDEX_TEMPLATE, &context)
}
