//! Task model shared by the store, the persistence layer, and the views.
//!
//! A [`Task`] is the only persisted entity. Its `category` and `date` fields are
//! typed, so a task always carries one of the four [`Category`] values and a
//! real calendar date. `id` and `created_at` are assigned by the store and can
//! not be reached through [`TaskPatch`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Canonical calendar date format used on the wire and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire name of the "no category filter" value.
pub const FILTER_ALL: &str = "all";

/// Errors produced when parsing user or wire input into model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown category `{0}` (expected success, warning, issue or info)")]
    UnknownCategory(String),
    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Status classification of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Warning,
    Issue,
    Info,
}

impl Category {
    /// All categories in their fixed display order.
    pub const ALL: [Category; 4] = [Category::Success, Category::Warning, Category::Issue, Category::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Issue => "issue",
            Category::Info => "info",
        }
    }

    /// Human-readable label, e.g. `Success`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Success => "Success",
            Category::Warning => "Warning",
            Category::Issue => "Issue",
            Category::Info => "Info",
        }
    }

    /// One-letter marker used in calendar cells.
    pub fn badge(&self) -> char {
        match self {
            Category::Success => 'S',
            Category::Warning => 'W',
            Category::Issue => 'I',
            Category::Info => 'i',
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// Category filter applied by the list and analytics views.
///
/// Serialized as `"all"` or as the lowercase category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterCategory {
    #[default]
    All,
    Only(Category),
}

impl FilterCategory {
    /// Returns `true` when a task of `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            FilterCategory::All => true,
            FilterCategory::Only(only) => *only == category,
        }
    }
}

impl Display for FilterCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FilterCategory::All => f.write_str(FILTER_ALL),
            FilterCategory::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for FilterCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(FilterCategory::All);
        }
        s.parse().map(FilterCategory::Only)
    }
}

impl TryFrom<String> for FilterCategory {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterCategory> for String {
    fn from(value: FilterCategory) -> Self {
        value.to_string()
    }
}

impl From<Category> for FilterCategory {
    fn from(category: Category) -> Self {
        FilterCategory::Only(category)
    }
}

/// A dated, categorized task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Applies every field supplied by `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// Input of `TaskStore::add_task`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub category: Category,
}

impl NewTask {
    pub fn new(title: &str, date: NaiveDate, category: Category) -> Self {
        NewTask {
            title: title.to_string(),
            description: None,
            date,
            category,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Partial update for `TaskStore::edit_task`.
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.date.is_none() && self.category.is_none()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = Some(description.map(str::to_string));
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// Parses a canonical `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| ParseError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Issue".parse::<Category>().unwrap(), Category::Issue);
        assert_eq!(" info ".parse::<Category>().unwrap(), Category::Info);
        assert!("done".parse::<Category>().is_err());
    }

    #[test]
    fn filter_category_wire_format() {
        assert_eq!(serde_json::to_string(&FilterCategory::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&FilterCategory::Only(Category::Warning)).unwrap(),
            "\"warning\""
        );
        let parsed: FilterCategory = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(parsed, FilterCategory::Only(Category::Success));
        assert!(serde_json::from_str::<FilterCategory>("\"urgent\"").is_err());
    }

    #[test]
    fn apply_leaves_unsupplied_fields() {
        let mut task = Task {
            id: "1".to_string(),
            title: "Sample Task".to_string(),
            description: Some("This is a sample task".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: Category::Info,
            created_at: Utc::now(),
        };
        task.apply(&TaskPatch::default().category(Category::Success));
        assert_eq!(task.title, "Sample Task");
        assert_eq!(task.category, Category::Success);
        assert_eq!(task.description.as_deref(), Some("This is a sample task"));

        task.apply(&TaskPatch::default().description(None));
        assert_eq!(task.description, None);
    }

    #[test]
    fn task_reads_camel_case_blob() {
        let json = r#"{"id":"1712","title":"Pay rent","description":"","date":"2024-01-01","category":"issue","createdAt":"2024-01-01T10:00:00.000Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "1712");
        assert_eq!(task.category, Category::Issue);
        assert_eq!(task.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
