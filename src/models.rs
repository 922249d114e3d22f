//! Frontend Models
//!
//! Data structures matching the API's JSON.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub oid: String,
    pub name: String,
    #[serde(default, with = "crate::deadline::lenient")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category_oid: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub oid: String,
    pub title: String,
}

/// Categories in server order plus an id -> title lookup.
///
/// Rebuilt from scratch on every category fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    categories: Vec<Category>,
    titles: HashMap<String, String>,
}

impl CategoryIndex {
    pub fn new(categories: Vec<Category>) -> Self {
        let titles = categories
            .iter()
            .map(|c| (c.oid.clone(), c.title.clone()))
            .collect();
        Self { categories, titles }
    }

    pub fn title(&self, oid: &str) -> Option<&str> {
        self.titles.get(oid).map(String::as_str)
    }

    /// Select-control value for `oid`: the id when it is listed, else empty.
    pub fn selection(&self, oid: Option<&str>) -> String {
        oid.filter(|oid| self.titles.contains_key(*oid))
            .map(str::to_string)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Email/password pair for sign-up and sign-in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Raw task form input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    /// `datetime-local` value, empty when unset
    pub deadline: String,
    /// Selected category id, empty for none
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(oid: &str, title: &str) -> Category {
        Category {
            oid: oid.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_category_index_keeps_server_order() {
        let index = CategoryIndex::new(vec![category("b", "Work"), category("a", "Home")]);
        let titles: Vec<_> = index.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Work", "Home"]);
        assert_eq!(index.title("a"), Some("Home"));
        assert_eq!(index.title("missing"), None);
    }

    #[test]
    fn test_selection_drops_unlisted_ids() {
        let index = CategoryIndex::new(vec![category("a", "Home")]);
        assert_eq!(index.selection(Some("a")), "a");
        assert_eq!(index.selection(Some("gone")), "");
        assert_eq!(index.selection(None), "");
    }

    #[test]
    fn test_task_from_json() {
        let task: Task = serde_json::from_str(
            r#"{"oid":"1","name":"Buy milk","category_oid":null,"is_complete":false,"deadline":null}"#,
        )
        .unwrap();
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.deadline, None);
        assert_eq!(task.category_oid, None);
        assert!(!task.is_complete);
    }

    #[test]
    fn test_task_missing_optional_fields() {
        let task: Task = serde_json::from_str(r#"{"oid":"1","name":"x"}"#).unwrap();
        assert_eq!(task.deadline, None);
        assert!(!task.is_complete);
    }
}
