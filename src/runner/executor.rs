//! Task graph execution
//!
//! Walks the dependency graph depth-first in declaration order, running
//! each task at most once per run.

use crate::error::{ExecutionError, Result};
use crate::registry::{Registry, TaskName};
use crate::runner::Context;
use std::collections::HashMap;

/// Per-run state of one task. Absence from the map means unvisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Running,
    Done,
}

/// One run over a fully-built registry. The completion set lives as long as
/// the executor, so re-invoking a finished task is a no-op.
pub struct Executor<'a> {
    registry: &'a Registry,
    states: HashMap<TaskName, TaskState>,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Executor {
            registry,
            states: HashMap::new(),
        }
    }

    /// Run `name` and its transitive dependencies.
    ///
    /// Dependencies run before the task's own action, depth-first and in
    /// declared order, each exactly once even when shared between
    /// dependents. Re-entering a task that is still running means the
    /// graph has a cycle. The first failure aborts the whole run; tasks
    /// already marked done stay done.
    pub fn invoke(&mut self, name: &TaskName, ctx: &mut Context) -> Result<()> {
        match self.states.get(name) {
            Some(TaskState::Done) => return Ok(()),
            Some(TaskState::Running) => {
                return Err(ExecutionError::Cycle { task: name.clone() }.into())
            }
            None => {}
        }

        let registry = self.registry;
        let task = registry.lookup(name)?;
        self.states.insert(name.clone(), TaskState::Running);

        for dep in task.dependencies() {
            self.invoke(dep, ctx)?;
        }

        ctx.print_task_start(&name.to_string());
        task.run(ctx)?;
        ctx.print_task_complete(&name.to_string());

        self.states.insert(name.clone(), TaskState::Done);
        Ok(())
    }

    pub fn is_done(&self, name: &TaskName) -> bool {
        self.states.get(name) == Some(&TaskState::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RegistryError, TasklineError};
    use crate::registry::TaskDef;
    use crate::runner::Verbosity;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn probe(trace: &Rc<RefCell<Vec<String>>>, label: &str) -> impl Fn(&mut Context) -> Result<()> {
        let trace = Rc::clone(trace);
        let label = label.to_string();
        move |_ctx| {
            trace.borrow_mut().push(label.clone());
            Ok(())
        }
    }

    fn quiet_ctx() -> Context {
        Context::new().with_verbosity(Verbosity::Silent)
    }

    #[test]
    fn test_dependencies_run_before_task_in_declared_order() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("t:a").action(probe(&trace, "a")))
            .unwrap();
        registry
            .define(TaskDef::new("t:b").action(probe(&trace, "b")))
            .unwrap();
        registry
            .define(
                TaskDef::new("t:root")
                    .depends_on(["t:a", "t:b"])
                    .action(probe(&trace, "root")),
            )
            .unwrap();

        let mut executor = Executor::new(&registry);
        executor
            .invoke(&TaskName::parse("t:root"), &mut quiet_ctx())
            .unwrap();

        assert_eq!(*trace.borrow(), vec!["a", "b", "root"]);
    }

    #[test]
    fn test_shared_dependency_runs_once() {
        // Diamond: root -> {left, right} -> base
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("t:base").action(probe(&trace, "base")))
            .unwrap();
        registry
            .define(
                TaskDef::new("t:left")
                    .depends_on(["t:base"])
                    .action(probe(&trace, "left")),
            )
            .unwrap();
        registry
            .define(
                TaskDef::new("t:right")
                    .depends_on(["t:base"])
                    .action(probe(&trace, "right")),
            )
            .unwrap();
        registry
            .define(TaskDef::new("t:root").depends_on(["t:left", "t:right"]))
            .unwrap();

        let mut executor = Executor::new(&registry);
        executor
            .invoke(&TaskName::parse("t:root"), &mut quiet_ctx())
            .unwrap();

        assert_eq!(*trace.borrow(), vec!["base", "left", "right"]);
    }

    #[test]
    fn test_memoized_for_executor_lifetime() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("t:once").action(probe(&trace, "once")))
            .unwrap();

        let name = TaskName::parse("t:once");
        let mut ctx = quiet_ctx();
        let mut executor = Executor::new(&registry);
        executor.invoke(&name, &mut ctx).unwrap();
        executor.invoke(&name, &mut ctx).unwrap();

        assert_eq!(trace.borrow().len(), 1);
        assert!(executor.is_done(&name));
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("t:x").depends_on(["t:y"]))
            .unwrap();
        registry
            .define(TaskDef::new("t:y").depends_on(["t:x"]))
            .unwrap();

        let mut executor = Executor::new(&registry);
        let result = executor.invoke(&TaskName::parse("t:x"), &mut quiet_ctx());
        assert!(matches!(
            result,
            Err(TasklineError::Execution(ExecutionError::Cycle { .. }))
        ));
    }

    #[test]
    fn test_unknown_task_has_no_side_effects() {
        let registry = Registry::new();
        let mut ctx = quiet_ctx();
        let mut executor = Executor::new(&registry);

        let result = executor.invoke(&TaskName::parse("no:such"), &mut ctx);
        assert!(matches!(
            result,
            Err(TasklineError::Registry(RegistryError::UnknownTask(_)))
        ));
        assert!(ctx.reporter.entries().is_empty());
    }

    #[test]
    fn test_unknown_dependency_fails_before_own_action() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        registry
            .define(
                TaskDef::new("t:root")
                    .depends_on(["t:missing"])
                    .action(probe(&trace, "root")),
            )
            .unwrap();

        let mut executor = Executor::new(&registry);
        let result = executor.invoke(&TaskName::parse("t:root"), &mut quiet_ctx());
        assert!(result.is_err());
        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn test_failure_aborts_later_siblings() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("t:bad").action(|_ctx| {
                Err(ExecutionError::NonZeroExit {
                    command: "false".to_string(),
                    code: Some(1),
                }
                .into())
            }))
            .unwrap();
        registry
            .define(TaskDef::new("t:good").action(probe(&trace, "good")))
            .unwrap();
        registry
            .define(TaskDef::new("t:root").depends_on(["t:bad", "t:good"]))
            .unwrap();

        let mut executor = Executor::new(&registry);
        let result = executor.invoke(&TaskName::parse("t:root"), &mut quiet_ctx());

        assert!(result.is_err());
        assert!(trace.borrow().is_empty());
        assert!(!executor.is_done(&TaskName::parse("t:good")));
    }

    #[test]
    fn test_done_tasks_stay_done_after_failure() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("t:ok").action(probe(&trace, "ok")))
            .unwrap();
        registry
            .define(TaskDef::new("t:bad").action(|_ctx| {
                Err(ExecutionError::NonZeroExit {
                    command: "false".to_string(),
                    code: Some(1),
                }
                .into())
            }))
            .unwrap();
        registry
            .define(TaskDef::new("t:root").depends_on(["t:ok", "t:bad"]))
            .unwrap();

        let mut executor = Executor::new(&registry);
        let result = executor.invoke(&TaskName::parse("t:root"), &mut quiet_ctx());

        assert!(result.is_err());
        assert!(executor.is_done(&TaskName::parse("t:ok")));
        assert_eq!(*trace.borrow(), vec!["ok"]);
    }
}
