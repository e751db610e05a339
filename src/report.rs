//! Run report aggregation
//!
//! Task actions record structured entries as they complete meaningful
//! sub-steps; the accumulated log is rendered once at the end of a run.

use colored::Colorize;
use std::fmt;

/// Kind of work an entry reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Building,
    Test,
    Clippy,
    Clearing,
}

impl Category {
    fn label(&self) -> &'static str {
        match self {
            Category::Building => "building",
            Category::Test => "test",
            Category::Clippy => "clippy",
            Category::Clearing => "clearing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sub-project that produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Extractor,
    Lib,
}

impl Owner {
    fn label(&self) -> &'static str {
        match self {
            Owner::Extractor => "extractor",
            Owner::Lib => "lib",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One immutable record of a completed sub-step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub category: Category,
    pub owner: Owner,
    pub verb: String,
    pub detail: String,
}

/// Append-only log of report entries, insertion order preserved
#[derive(Debug, Default)]
pub struct Reporter {
    entries: Vec<ReportEntry>,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Append one entry. Verb and detail are free text and may be empty.
    pub fn record(&mut self, category: Category, owner: Owner, verb: &str, detail: &str) {
        self.entries.push(ReportEntry {
            category,
            owner,
            verb: verb.to_string(),
            detail: detail.to_string(),
        });
    }

    /// Entries recorded so far, in insertion order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Render a human-readable summary. Pure read; the log is not cleared,
    /// so repeated renders produce the same output.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return format!("{}\n", "Report: nothing to report".dimmed());
        }

        let mut out = String::new();
        out.push_str(&format!("{}\n", "Report:".bold()));
        for entry in &self.entries {
            let category = format!("{:<9}", entry.category.label());
            let owner = format!("{:<10}", entry.owner.label());
            let mut line = format!("  {} {} {}", category.yellow(), owner.cyan(), entry.verb);
            if !entry.detail.is_empty() {
                line.push_str(&format!(" ({})", entry.detail));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Print the rendered summary to stdout
    pub fn print(&self) {
        print!("{}", self.render());
    }
}
