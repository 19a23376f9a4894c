use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A name under which a task can be invoked (`day-1-a`, `1-a-sample`, `1`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskAlias(String);

impl TaskAlias {
    pub fn new(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TaskAlias {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskAlias {
    fn from(alias: &str) -> Self {
        Self::new(alias)
    }
}

/// The executable unit behind one or more aliases: a single shell command
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub command: String,
}

impl TaskDefinition {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command with extra arguments appended, space separated
    pub fn command_with_args(&self, args: &[String]) -> String {
        if args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, args.join(" "))
        }
    }
}
