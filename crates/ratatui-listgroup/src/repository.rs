//! Repository and issue data shown by [`crate::issues_browser::RepositoryIssuesBrowser`].
//!
//! The JSON shape matches what a code-hosting API typically hands back:
//!
//! ```json
//! [{ "name": "Repo 1", "issues": [{ "title": "A", "isOpen": true }] }, { "name": "Repo 2" }]
//! ```
use crate::error::Error;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub title: String,
    pub is_open: bool,
}

impl Issue {
    pub fn open(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_open: true,
        }
    }

    pub fn closed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_open: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    /// `None` when the source did not report issues; treated as no issues.
    #[serde(default)]
    pub issues: Option<Vec<Issue>>,
}

impl Repository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issues: None,
        }
    }

    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = Some(issues);
        self
    }

    pub fn open_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().flatten().filter(|issue| issue.is_open)
    }

    pub fn open_issue_count(&self) -> usize {
        self.open_issues().count()
    }

    pub fn open_issue_titles(&self) -> Vec<&str> {
        self.open_issues().map(|issue| issue.title.as_str()).collect()
    }

    /// `name`, or `name (n)` when there are `n > 0` open issues.
    pub fn label(&self) -> String {
        match self.open_issue_count() {
            0 => self.name.clone(),
            n => format!("{} ({n})", self.name),
        }
    }
}

pub fn total_open_issues(repositories: &[Repository]) -> usize {
    repositories.iter().map(Repository::open_issue_count).sum()
}

pub fn from_json_str(json: &str) -> Result<Vec<Repository>> {
    Ok(serde_json::from_str(json)?)
}

pub fn from_json_file(path: impl AsRef<Path>) -> Result<Vec<Repository>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let repositories = from_json_str(&json)?;
    tracing::debug!(
        target: "ratatui_listgroup::repository",
        path = %path.display(),
        count = repositories.len(),
        "loaded repositories"
    );
    Ok(repositories)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Repository> {
        vec![
            Repository::new("Repo 1").with_issues(vec![
                Issue::open("Repo 1 - Issue 1"),
                Issue::closed("Repo 1 - Issue 2"),
            ]),
            Repository::new("Repo 2").with_issues(vec![
                Issue::open("Repo 2 - Issue 1"),
                Issue::closed("Repo 2 - Issue 2"),
            ]),
        ]
    }

    #[test]
    fn counts_only_open_issues() {
        let mut repos = sample();
        assert_eq!(total_open_issues(&repos), 2);

        if let Some(issues) = repos[0].issues.as_mut() {
            issues[0].is_open = false;
        }
        assert_eq!(total_open_issues(&repos), 1);
    }

    #[test]
    fn missing_issues_count_as_zero() {
        let repo = Repository::new("Repo 3");
        assert_eq!(repo.open_issue_count(), 0);
        assert!(repo.open_issue_titles().is_empty());
        assert_eq!(repo.label(), "Repo 3");
    }

    #[test]
    fn label_appends_open_count() {
        let repo = Repository::new("Repo 1")
            .with_issues(vec![Issue::open("a"), Issue::open("b"), Issue::closed("c")]);
        assert_eq!(repo.label(), "Repo 1 (2)");
        assert_eq!(repo.open_issue_titles(), vec!["a", "b"]);
    }

    #[test]
    fn parses_camel_case_json() {
        let repos = from_json_str(
            r#"[
                {"name": "Repo 1", "issues": [{"title": "A", "isOpen": true}, {"title": "B", "isOpen": false}]},
                {"name": "Repo 2"}
            ]"#,
        )
        .expect("valid json");

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].open_issue_titles(), vec!["A"]);
        assert_eq!(repos[1].issues, None);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = from_json_str(r#"[{"title": "no name"}]"#).expect_err("missing name");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = from_json_file("/definitely/not/here.json").expect_err("missing file");
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
