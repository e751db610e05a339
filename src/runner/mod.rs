//! Task execution engine
//!
//! This module runs tasks: shell command invocation, working-directory
//! scoping, and the dependency-ordered graph walk.

pub mod context;
pub mod executor;
pub mod shell;

// Re-export main types
pub use context::{Context, Verbosity};
pub use executor::Executor;
pub use shell::{run_command, with_directory};
