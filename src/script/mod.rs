//! Scripted sequences of task operations.
//!
//! A script is a list of steps, each tagged by `op`, executed in order
//! against a fresh store. `view` and `history` steps produce reports.

mod report;
mod step;

pub use report::Report;
pub use step::Step;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::history::TaskHistoryStore;

/// An ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Steps in execution order.
    pub steps: Vec<Step>,
}

impl Script {
    /// Loads a script, choosing the parser by file extension.
    ///
    /// `.json` files are parsed as JSON; anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {e}", path.display()))?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed =
            if is_json { Self::from_json(&contents) } else { Self::from_yaml(&contents) };
        parsed.map_err(|e| format!("Failed to parse script {}: {e}", path.display()))
    }

    /// Parses a YAML script.
    ///
    /// # Errors
    ///
    /// Returns an error string describing the parse failure.
    pub fn from_yaml(contents: &str) -> Result<Self, String> {
        serde_yaml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Parses a JSON script.
    ///
    /// # Errors
    ///
    /// Returns an error string describing the parse failure.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    }

    /// The groceries/report/mom walkthrough.
    #[must_use]
    pub fn demo() -> Self {
        let view = |label: &str| Step::View { filter: None, label: Some(label.to_string()) };
        Self {
            steps: vec![
                Step::Add {
                    description: "Buy groceries".into(),
                    due_date: Some("2023-09-20".into()),
                    completed: false,
                },
                Step::Add { description: "Finish report".into(), due_date: None, completed: false },
                Step::Add { description: "Call mom".into(), due_date: None, completed: false },
                Step::Complete { description: "Buy groceries".into() },
                view("All Tasks"),
                Step::Undo,
                view("After Undo"),
                Step::Redo,
                view("After Redo"),
                Step::Delete { description: "Call mom".into() },
                view("After Deleting 'Call mom'"),
            ],
        }
    }

    /// Runs every step against `store`, collecting the reports.
    pub fn execute(&self, store: &mut TaskHistoryStore) -> Vec<Report> {
        self.steps.iter().filter_map(|step| step.apply(store)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ViewFilter;

    #[test]
    fn parses_yaml_steps() {
        let yaml = r#"
steps:
  - op: add
    description: Buy groceries
    due_date: "2023-09-20"
  - op: add
    description: Call mom
    completed: true
  - op: complete
    description: Buy groceries
  - op: delete
    description: Call mom
  - op: undo
  - op: redo
  - op: view
    filter: pending
    label: Open
  - op: history
"#;
        let script = Script::from_yaml(yaml).unwrap();
        assert_eq!(script.steps.len(), 8);
        assert_eq!(
            script.steps[1],
            Step::Add { description: "Call mom".into(), due_date: None, completed: true }
        );
        assert_eq!(
            script.steps[6],
            Step::View { filter: Some("pending".into()), label: Some("Open".into()) }
        );
        assert_eq!(script.steps[7], Step::History);
    }

    #[test]
    fn parses_json_steps() {
        let json = r#"{"steps": [{"op": "add", "description": "a"}, {"op": "view"}]}"#;
        let script = Script::from_json(json).unwrap();
        assert_eq!(script.steps[1], Step::View { filter: None, label: None });
    }

    #[test]
    fn rejects_unknown_op() {
        let err = Script::from_yaml("steps:\n  - op: rename\n").unwrap_err();
        assert!(err.contains("rename"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Script::load(Path::new("/nonexistent/todo-history/script.yaml")).unwrap_err();
        assert!(err.contains("Failed to read script"));
    }

    #[test]
    fn demo_produces_expected_views() {
        let mut store = TaskHistoryStore::new();
        let reports = Script::demo().execute(&mut store);
        let lines: Vec<Vec<String>> = reports
            .iter()
            .map(|r| match r {
                Report::View { filter, tasks, .. } => {
                    assert_eq!(*filter, ViewFilter::All);
                    tasks.iter().map(ToString::to_string).collect()
                }
                Report::History { .. } => panic!("demo has no history step"),
            })
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0][0], "Buy groceries - Completed, Due: 2023-09-20");
        assert_eq!(lines[0].len(), 3);
        assert_eq!(lines[1][0], "Buy groceries - Pending, Due: 2023-09-20");
        assert_eq!(lines[2][0], "Buy groceries - Completed, Due: 2023-09-20");
        assert_eq!(
            lines[3],
            vec!["Buy groceries - Completed, Due: 2023-09-20", "Finish report - Pending, Due: None"]
        );
    }
}
