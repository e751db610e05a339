//! Execution context for task running
//!
//! One context lives for the duration of a run. It owns the report log and
//! the settings task actions need when they shell out.

use crate::error::Result;
use crate::report::{Category, Owner, Reporter};
use crate::runner::shell;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

/// State shared by every task action in a run
pub struct Context {
    /// Run-wide report log, appended to by task actions
    pub reporter: Reporter,

    /// Interpreter for shell commands (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

impl Context {
    pub fn new() -> Self {
        Context {
            reporter: Reporter::new(),
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Run a shell command to completion, failing on non-zero exit.
    pub fn sh(&self, command: &str) -> Result<()> {
        shell::run_command(command, self)?;
        Ok(())
    }

    /// Recursively delete a path. A missing path is not an error.
    pub fn rm_rf(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one entry to the run report
    pub fn record(&mut self, category: Category, owner: Owner, verb: &str, detail: &str) {
        self.reporter.record(category, owner, verb, detail);
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[taskline]".cyan().bold(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[debug]".dimmed(), message);
        }
    }

    pub fn print_task_start(&self, task_name: &str) {
        self.print_info(&format!("Running task: {}", task_name.bold()));
    }

    pub fn print_task_complete(&self, task_name: &str) {
        self.print_debug(&format!("Task completed: {}", task_name));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
