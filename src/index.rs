//! Index building for the puzzle registry.
//!
//! The registry declares one module per day and lists each day's `run`
//! function. Both lists are derived from the same range of days, but with
//! different orderings: declarations follow the string order rustfmt uses for
//! `mod` items, registrations follow the day number so that `DAYS[day - 1]`
//! resolves to the right puzzle.

use std::cmp::Ordering;

/// One day of the registry, derived from its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub index: i64,
    pub module_name: String,
    pub registration_line: String,
}

impl DayEntry {
    pub fn new(index: i64) -> Self {
        let module_name = format!("day_{index}");
        let registration_line = format!("    {module_name}::run,");
        Self {
            index,
            module_name,
            registration_line,
        }
    }

    /// The `mod` item declaring this day's module.
    pub fn declaration_line(&self) -> String {
        format!("mod {};", self.module_name)
    }
}

/// The computed blocks substituted into the index template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBlocks {
    pub declarations: String,
    pub registrations: String,
    pub count: i64,
}

/// Entries for days `1..=n`. Empty when `n < 1`.
pub fn day_entries(n: i64) -> Vec<DayEntry> {
    (1..=n).map(DayEntry::new).collect()
}

/// Orders entries by module name compared as strings (`day_1`, `day_10`, `day_2`).
pub fn lexicographic_order(entries: &[DayEntry]) -> Vec<&DayEntry> {
    sorted_by(entries, |a, b| a.module_name.cmp(&b.module_name))
}

/// Orders entries by ascending day number.
pub fn numeric_order(entries: &[DayEntry]) -> Vec<&DayEntry> {
    sorted_by(entries, |a, b| a.index.cmp(&b.index))
}

fn sorted_by<F>(entries: &[DayEntry], compare: F) -> Vec<&DayEntry>
where
    F: FnMut(&&DayEntry, &&DayEntry) -> Ordering,
{
    let mut ordered: Vec<&DayEntry> = entries.iter().collect();
    ordered.sort_by(compare);
    ordered
}

/// Builds the declaration and registration blocks for days `1..=n`.
pub fn build_index(n: i64) -> IndexBlocks {
    let entries = day_entries(n);

    let declarations = lexicographic_order(&entries)
        .into_iter()
        .map(DayEntry::declaration_line)
        .collect::<Vec<_>>()
        .join("\n");

    let registrations = numeric_order(&entries)
        .into_iter()
        .map(|entry| entry.registration_line.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    IndexBlocks {
        declarations,
        registrations,
        count: n,
    }
}
