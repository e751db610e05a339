//! Command-line interface
//!
//! Maps one positional task name onto the graph executor and renders the
//! run report when the run finishes.

pub mod app;

pub use app::{run, run_task};
