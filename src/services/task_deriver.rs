use crate::models::puzzle_file::{PathShapeError, PuzzleFileRef};
use crate::models::task::{TaskAlias, TaskDefinition};

/// Builds the shell command that runs one puzzle against one data set
pub trait CommandBuilder {
    fn build(&self, file: &PuzzleFileRef) -> TaskDefinition;
}

/// `<runner> day-<N>/<part>[ <data set>]`
///
/// The data set name is passed unquoted, so a name containing whitespace
/// reaches the puzzle as several arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommandBuilder {
    runner: String,
}

impl ShellCommandBuilder {
    pub fn new(runner: impl Into<String>) -> Self {
        Self {
            runner: runner.into(),
        }
    }
}

impl CommandBuilder for ShellCommandBuilder {
    fn build(&self, file: &PuzzleFileRef) -> TaskDefinition {
        let mut command = format!("{} {}", self.runner, file.entry_point());
        if let Some(name) = &file.dataset_name {
            command.push(' ');
            command.push_str(name);
        }
        TaskDefinition::new(command)
    }
}

/// Output of deriving a single data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTasks {
    pub file: PuzzleFileRef,
    pub tasks: Vec<(TaskAlias, TaskDefinition)>,
}

/// Turns data file paths into aliased task definitions
#[derive(Debug, Clone)]
pub struct TaskDeriver<B> {
    builder: B,
}

impl<B: CommandBuilder> TaskDeriver<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn derive(&self, file_path: &str) -> Result<DerivedTasks, PathShapeError> {
        let file = PuzzleFileRef::parse(file_path)?;
        let task = self.builder.build(&file);
        let tasks = aliases_for(&file)
            .into_iter()
            .map(|alias| (alias, task.clone()))
            .collect();

        Ok(DerivedTasks { file, tasks })
    }
}

/// Every alias a data file answers to, in a fixed order.
///
/// `day-<N>-<part>` and `<N>-<part>` always; the default part additionally
/// gets the day-only `day-<N>` and `<N>`. A data set name is appended to
/// each form.
pub fn aliases_for(file: &PuzzleFileRef) -> Vec<TaskAlias> {
    let day = &file.day_label;
    let part = &file.part;
    let suffix = file.dataset_suffix();

    let mut aliases = vec![
        TaskAlias::new(format!("day-{day}-{part}{suffix}")),
        TaskAlias::new(format!("{day}-{part}{suffix}")),
    ];
    if file.is_default_part() {
        aliases.push(TaskAlias::new(format!("day-{day}{suffix}")));
        aliases.push(TaskAlias::new(format!("{day}{suffix}")));
    }
    aliases
}
