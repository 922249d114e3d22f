//! Task Endpoints

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Task;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CreateTaskBody<'a> {
    name: &'a str,
    #[serde(serialize_with = "crate::deadline::lenient::serialize")]
    deadline: Option<DateTime<Utc>>,
    category_oid: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateTaskBody<'a> {
    task_oid: &'a str,
    name: &'a str,
    category_oid: Option<&'a str>,
    #[serde(serialize_with = "crate::deadline::lenient::serialize")]
    deadline: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct TaskIdBody<'a> {
    task_oid: &'a str,
}

#[derive(Deserialize)]
struct TaskList {
    tasks: Vec<Task>,
}

/// Fields shared by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub name: String,
    pub deadline: Option<DateTime<Utc>>,
    pub category_oid: Option<String>,
}

// ========================
// Endpoints
// ========================

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let list: TaskList = self.get_json("/task/get-all").await?;
        Ok(list.tasks)
    }

    pub async fn create_task(&self, fields: &TaskFields) -> Result<(), ApiError> {
        let body = CreateTaskBody {
            name: &fields.name,
            deadline: fields.deadline,
            category_oid: fields.category_oid.as_deref(),
        };
        self.execute(Method::POST, "/task/create", &body).await
    }

    pub async fn update_task(&self, task_oid: &str, fields: &TaskFields) -> Result<(), ApiError> {
        let body = UpdateTaskBody {
            task_oid,
            name: &fields.name,
            category_oid: fields.category_oid.as_deref(),
            deadline: fields.deadline,
        };
        self.execute(Method::PATCH, "/task/update/", &body).await
    }

    pub async fn complete_task(&self, task_oid: &str) -> Result<(), ApiError> {
        self.execute(Method::PATCH, "/task/complete/", &TaskIdBody { task_oid })
            .await
    }

    pub async fn uncomplete_task(&self, task_oid: &str) -> Result<(), ApiError> {
        self.execute(Method::PATCH, "/task/uncomplete/", &TaskIdBody { task_oid })
            .await
    }

    pub async fn delete_task(&self, task_oid: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, "/task/delete/", &TaskIdBody { task_oid })
            .await
    }
}
