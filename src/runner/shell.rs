//! Shell command execution and working-directory scoping

use crate::error::{ExecutionError, ExecutionResult, Result};
use crate::runner::{Context, Verbosity};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

/// Run a command line through the context's interpreter and wait for it.
///
/// Stdout/stderr are inherited, not captured. A non-zero exit or a failure
/// to spawn is fatal; neither is retried.
pub fn run_command(command: &str, ctx: &Context) -> ExecutionResult<()> {
    if ctx.verbosity >= Verbosity::Normal {
        eprintln!("{} {}", "[run]".green().bold(), command);
    }

    let mut cmd = StdCommand::new(&ctx.interpreter[0]);
    if ctx.interpreter.len() > 1 {
        cmd.args(&ctx.interpreter[1..]);
    }
    cmd.arg(command);

    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let status = cmd.status().map_err(|source| ExecutionError::Spawn {
        command: command.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(ExecutionError::NonZeroExit {
            command: command.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}

/// Restores the saved working directory when dropped, so the restore runs
/// on every exit path out of `with_directory`, including errors and panics.
struct DirGuard {
    previous: PathBuf,
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Run `body` with the process working directory switched to `path`.
///
/// The previous directory is restored afterward whether `body` succeeds or
/// fails. Nested scopes restore innermost-first.
pub fn with_directory<T, F>(path: impl AsRef<Path>, body: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let previous = env::current_dir()?;
    env::set_current_dir(path.as_ref())?;
    let _guard = DirGuard { previous };
    body()
}
