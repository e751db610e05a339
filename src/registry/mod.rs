//! Task registry
//!
//! Stores task definitions keyed by qualified name. The registry is fully
//! built before execution begins, so a task may depend on one defined later.

pub mod task;

pub use task::{Action, TaskDef, TaskName};

use crate::error::{RegistryError, RegistryResult};
use std::collections::HashMap;

/// Flat map of qualified name to definition. Namespacing is a naming
/// convention only; uniqueness is over the combined qualified name.
#[derive(Debug, Default)]
pub struct Registry {
    tasks: HashMap<TaskName, TaskDef>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a task. The first definition of a name wins; redefining it
    /// is a fatal startup error.
    pub fn define(&mut self, task: TaskDef) -> RegistryResult<()> {
        let name = task.name().clone();
        if self.tasks.contains_key(&name) {
            return Err(RegistryError::DuplicateTask(name));
        }
        self.tasks.insert(name, task);
        Ok(())
    }

    pub fn lookup(&self, name: &TaskName) -> RegistryResult<&TaskDef> {
        self.tasks
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTask(name.clone()))
    }

    pub fn contains(&self, name: &TaskName) -> bool {
        self.tasks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All definitions, sorted by qualified name. Used by task listings.
    pub fn tasks(&self) -> Vec<&TaskDef> {
        let mut tasks: Vec<&TaskDef> = self.tasks.values().collect();
        tasks.sort_by(|a, b| a.name().cmp(b.name()));
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("build:lib").describe("Build lib"))
            .unwrap();

        let task = registry.lookup(&TaskName::parse("build:lib")).unwrap();
        assert_eq!(task.description(), "Build lib");
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = Registry::new();
        registry
            .define(TaskDef::new("build:lib").describe("first"))
            .unwrap();

        let result = registry.define(TaskDef::new("build:lib").describe("second"));
        assert!(matches!(result, Err(RegistryError::DuplicateTask(_))));

        // The first definition is not overwritten
        let task = registry.lookup(&TaskName::parse("build:lib")).unwrap();
        assert_eq!(task.description(), "first");
    }

    #[test]
    fn test_unknown_name() {
        let registry = Registry::new();
        let result = registry.lookup(&TaskName::parse("no:such"));
        assert!(matches!(result, Err(RegistryError::UnknownTask(_))));
    }

    #[test]
    fn test_same_short_name_in_different_namespaces() {
        let mut registry = Registry::new();
        registry.define(TaskDef::new("build:extractor")).unwrap();
        registry.define(TaskDef::new("test:extractor")).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_tasks_sorted_by_qualified_name() {
        let mut registry = Registry::new();
        registry.define(TaskDef::new("test:lib")).unwrap();
        registry.define(TaskDef::new("build:lib")).unwrap();
        registry.define(TaskDef::new("default")).unwrap();

        let names: Vec<String> = registry.tasks().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["default", "build:lib", "test:lib"]);
    }
}
