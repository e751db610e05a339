//! Error types for Taskline

use crate::registry::TaskName;
use std::io;
use thiserror::Error;

/// Result type alias for Taskline operations
pub type Result<T> = std::result::Result<T, TasklineError>;

/// Main error type for Taskline
#[derive(Error, Debug)]
pub enum TasklineError {
    /// Registry construction and lookup errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Task execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Registry construction and lookup errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Task '{0}' is already defined")]
    DuplicateTask(TaskName),

    #[error("Task '{0}' is not defined")]
    UnknownTask(TaskName),
}

/// Task execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Command '{command}' failed with exit code {code:?}")]
    NonZeroExit { command: String, code: Option<i32> },

    #[error("Dependency cycle detected at task '{task}'")]
    Cycle { task: TaskName },
}

/// Specialized result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
