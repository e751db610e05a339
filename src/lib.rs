//! Taskline - a namespaced build-task orchestration engine
//!
//! Taskline keeps a registry of named, namespaced build actions with
//! declared dependencies and executes them depth-first in declaration
//! order, each exactly once per run, collecting a structured report that
//! is rendered once at the end.

// Public modules
pub mod cli;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;
pub mod tasks;

// Re-export commonly used types
pub use error::{Result, TasklineError};

/// Current version of Taskline
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
