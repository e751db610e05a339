//! Main CLI application

use crate::error::Result;
use crate::registry::{Registry, TaskName};
use crate::runner::{Context, Executor, Verbosity};
use crate::tasks::builtin_registry;
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use colored::Colorize;
use std::io;

/// Build the clap command
fn build_command() -> Command {
    Command::new("taskline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A namespaced build-task orchestration engine")
        .arg(
            Arg::new("task")
                .value_name("TASK")
                .help("Qualified task name (namespace:name); runs the default sequence when omitted"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List available tasks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Generate shell completions")
                .value_parser(clap::value_parser!(Shell)),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

fn print_task_list(registry: &Registry) {
    println!("{}", "Available tasks:".bold());
    for task in registry.tasks() {
        let name = format!("{:<18}", task.name().to_string());
        println!("  {} {}", name.cyan(), task.description());
    }
}

/// Run one task (or the default sequence) and flush the report.
///
/// The accumulated report is printed on failure too, so aborted runs still
/// show what completed before the failing task.
pub fn run_task(registry: &Registry, name: &TaskName, verbosity: Verbosity) -> Result<()> {
    let mut ctx = Context::new().with_verbosity(verbosity);
    let mut executor = Executor::new(registry);
    let result = executor.invoke(name, &mut ctx);

    if verbosity > Verbosity::Silent {
        ctx.reporter.print();
    }
    result
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let mut command = build_command();
    let matches = command.clone().get_matches();

    if let Some(shell) = matches.get_one::<Shell>("completions") {
        clap_complete::generate(*shell, &mut command, "taskline", &mut io::stdout());
        return Ok(());
    }

    let registry = builtin_registry()?;

    if matches.get_flag("list") {
        print_task_list(&registry);
        return Ok(());
    }

    let name = matches
        .get_one::<String>("task")
        .map(String::as_str)
        .unwrap_or("default");

    run_task(&registry, &TaskName::parse(name), get_verbosity(&matches))
}
