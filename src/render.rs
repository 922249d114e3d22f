//! Row Rendering
//!
//! Turns fetched tasks into display rows. Pure: the output depends only on
//! the tasks, the category index, the current instant and the display zone.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::deadline;
use crate::models::{CategoryIndex, Task};

/// Label for a category id missing from the index
pub const UNKNOWN_CATEGORY: &str = "Unknown category";

/// Everything a task row displays
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub oid: String,
    pub name: String,
    pub deadline_label: Option<String>,
    pub category_label: Option<String>,
    pub is_complete: bool,
    pub overdue: bool,
}

/// Deadline has passed and the task is still open.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.is_complete && task.deadline.is_some_and(|d| d < now)
}

pub fn category_label(task: &Task, categories: &CategoryIndex) -> Option<String> {
    task.category_oid.as_deref().map(|oid| {
        categories
            .title(oid)
            .unwrap_or(UNKNOWN_CATEGORY)
            .to_string()
    })
}

pub fn task_row<Tz>(task: &Task, categories: &CategoryIndex, now: DateTime<Utc>, tz: &Tz) -> TaskRow
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    TaskRow {
        oid: task.oid.clone(),
        name: task.name.clone(),
        deadline_label: task.deadline.as_ref().map(|d| deadline::label(d, tz)),
        category_label: category_label(task, categories),
        is_complete: task.is_complete,
        overdue: is_overdue(task, now),
    }
}

pub fn task_rows<Tz>(tasks: &[Task], categories: &CategoryIndex, now: DateTime<Utc>, tz: &Tz) -> Vec<TaskRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tasks
        .iter()
        .map(|task| task_row(task, categories, now, tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        deadline::parse_server("2024-06-01T12:00:00Z").unwrap()
    }

    fn make_task(oid: &str, deadline: Option<DateTime<Utc>>, category: Option<&str>, done: bool) -> Task {
        Task {
            oid: oid.to_string(),
            name: format!("Task {}", oid),
            deadline,
            category_oid: category.map(str::to_string),
            is_complete: done,
        }
    }

    fn categories() -> CategoryIndex {
        CategoryIndex::new(vec![Category {
            oid: "c1".to_string(),
            title: "Home".to_string(),
        }])
    }

    #[test]
    fn test_overdue_only_when_past_and_open() {
        let past = Some(now() - Duration::hours(1));
        let future = Some(now() + Duration::hours(1));

        assert!(is_overdue(&make_task("1", past, None, false), now()));
        assert!(!is_overdue(&make_task("2", past, None, true), now()));
        assert!(!is_overdue(&make_task("3", future, None, false), now()));
        assert!(!is_overdue(&make_task("4", None, None, false), now()));
        // Exactly at the deadline is not yet overdue
        assert!(!is_overdue(&make_task("5", Some(now()), None, false), now()));
    }

    #[test]
    fn test_category_labels() {
        let index = categories();
        assert_eq!(category_label(&make_task("1", None, Some("c1"), false), &index), Some("Home".to_string()));
        assert_eq!(
            category_label(&make_task("2", None, Some("gone"), false), &index),
            Some(UNKNOWN_CATEGORY.to_string())
        );
        assert_eq!(category_label(&make_task("3", None, None, false), &index), None);
    }

    #[test]
    fn test_plain_task_row() {
        let task = Task {
            oid: "t1".to_string(),
            name: "Buy milk".to_string(),
            deadline: None,
            category_oid: None,
            is_complete: false,
        };
        let row = task_row(&task, &CategoryIndex::default(), now(), &Utc);
        assert_eq!(row.name, "Buy milk");
        assert_eq!(row.deadline_label, None);
        assert_eq!(row.category_label, None);
        assert!(!row.overdue);
    }

    #[test]
    fn test_rows_are_idempotent() {
        let tasks = vec![
            make_task("1", Some(now() - Duration::days(1)), Some("c1"), false),
            make_task("2", None, Some("missing"), true),
        ];
        let first = task_rows(&tasks, &categories(), now(), &Utc);
        let second = task_rows(&tasks, &categories(), now(), &Utc);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].deadline_label.as_deref(), Some("31.05.2024, 12:00:00"));
        assert!(first[0].overdue);
    }
}
