//! Task definitions
//!
//! A task is a named, possibly-dependent unit of work. Definitions are
//! constructed once at registry-build time and are immutable afterward.

use crate::error::Result;
use crate::runner::Context;
use std::fmt;

/// Qualified task identifier: a namespace plus a short name.
///
/// Rendered as `namespace:name`; an empty namespace renders as the bare
/// short name (used by the `default` task).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskName {
    pub namespace: String,
    pub name: String,
}

impl TaskName {
    pub fn new(namespace: &str, name: &str) -> Self {
        TaskName {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }

    /// Parse a qualified name. Text before the first `:` is the namespace;
    /// a bare name has an empty namespace.
    pub fn parse(text: &str) -> Self {
        match text.split_once(':') {
            Some((namespace, name)) => TaskName::new(namespace, name),
            None => TaskName::new("", text),
        }
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.namespace, self.name)
        }
    }
}

impl From<&str> for TaskName {
    fn from(text: &str) -> Self {
        TaskName::parse(text)
    }
}

/// Deferred work a task performs when it runs
pub type Action = Box<dyn Fn(&mut Context) -> Result<()>>;

/// One registered task: qualified name, description, declared dependencies
/// (in execution order) and an optional action body.
pub struct TaskDef {
    name: TaskName,
    description: String,
    dependencies: Vec<TaskName>,
    action: Option<Action>,
}

impl TaskDef {
    pub fn new(name: impl Into<TaskName>) -> Self {
        TaskDef {
            name: name.into(),
            description: String::new(),
            dependencies: Vec::new(),
            action: None,
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Declare dependencies, in the order they must run.
    pub fn depends_on<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<TaskName>,
    {
        self.dependencies.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn action(mut self, body: impl Fn(&mut Context) -> Result<()> + 'static) -> Self {
        self.action = Some(Box::new(body));
        self
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dependencies(&self) -> &[TaskName] {
        &self.dependencies
    }

    /// Run the action body, if any. Aggregate tasks have none.
    pub fn run(&self, ctx: &mut Context) -> Result<()> {
        if let Some(action) = &self.action {
            action(ctx)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TaskDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskDef")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("dependencies", &self.dependencies)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
