use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use crate::models::task::{TaskAlias, TaskDefinition};

/// Snapshot of every invokable task in a workspace (alias → command).
///
/// A registry is rebuilt from scratch on each discovery pass. Callers extend
/// it by value with [`TaskRegistry::merged`], which applies last-write-wins on
/// alias collisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRegistry {
    tasks: BTreeMap<TaskAlias, TaskDefinition>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a registry with `pairs` layered on top; later pairs win
    #[must_use]
    pub fn merged<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (TaskAlias, TaskDefinition)>,
    {
        for (alias, task) in pairs {
            if let Some(previous) = self.tasks.insert(alias.clone(), task) {
                tracing::debug!(
                    alias = %alias,
                    replaced = %previous.command,
                    "alias redefined by a later data file"
                );
            }
        }
        self
    }

    pub fn get(&self, alias: &str) -> Option<&TaskDefinition> {
        self.tasks.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.tasks.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &TaskAlias> {
        self.tasks.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, TaskAlias, TaskDefinition> {
        self.tasks.iter()
    }

    /// Aliases grouped by the command they resolve to, in command order
    pub fn grouped_by_command(&self) -> BTreeMap<&str, Vec<&TaskAlias>> {
        let mut groups: BTreeMap<&str, Vec<&TaskAlias>> = BTreeMap::new();
        for (alias, task) in &self.tasks {
            groups.entry(task.command.as_str()).or_default().push(alias);
        }
        groups
    }

    /// Up to `limit` known aliases that look like `alias`, closest first
    pub fn suggestions(&self, alias: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(usize, &TaskAlias)> = self
            .tasks
            .keys()
            .map(|candidate| (common_prefix_len(alias, candidate.as_str()), candidate))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

impl<'a> IntoIterator for &'a TaskRegistry {
    type Item = (&'a TaskAlias, &'a TaskDefinition);
    type IntoIter = btree_map::Iter<'a, TaskAlias, TaskDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl FromIterator<(TaskAlias, TaskDefinition)> for TaskRegistry {
    fn from_iter<I: IntoIterator<Item = (TaskAlias, TaskDefinition)>>(iter: I) -> Self {
        Self::new().merged(iter)
    }
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}
