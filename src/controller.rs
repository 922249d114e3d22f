//! Client Controller
//!
//! Every user operation as an async handler. Each handler validates its input,
//! issues one API call and, on success, reloads the affected list(s) through
//! the [`Screen`]. Failures of reads fall back to the login view; failures of
//! mutations are shown to the user and leave the view as it is.

use std::fmt::Display;

use chrono::Local;

use crate::api::{ApiClient, TaskFields};
use crate::deadline;
use crate::error::ValidationError;
use crate::models::{CategoryIndex, Task, TaskDraft};
use crate::notify::Notifier;
use crate::session::SessionStore;
use crate::validate;

pub const REGISTERED_MESSAGE: &str = "Registration successful. Please log in.";
pub const RENAME_CATEGORY_PROMPT: &str = "Enter a new category title:";

/// Top-level panels. `Login` and `Register` are the two auth sub-forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    App,
}

/// Output side of the controller.
pub trait Screen {
    fn show(&self, view: View);
    /// Replace the task list; closes any open inline editor.
    fn set_tasks(&self, tasks: Vec<Task>);
    fn set_categories(&self, categories: CategoryIndex);
    fn set_editing(&self, task_oid: Option<String>);
    fn reset_task_form(&self);
    fn reset_category_form(&self);
}

#[derive(Clone)]
pub struct Controller<S, N, K> {
    api: ApiClient,
    screen: S,
    notifier: N,
    session: K,
}

impl<S, N, K> Controller<S, N, K>
where
    S: Screen,
    N: Notifier,
    K: SessionStore,
{
    pub fn new(api: ApiClient, screen: S, notifier: N, session: K) -> Self {
        Self {
            api,
            screen,
            notifier,
            session,
        }
    }

    /// Pick the initial view from the session flag.
    pub async fn start(&self) {
        if self.session.is_logged_in() {
            tracing::info!("session flag set, loading app data");
            self.screen.show(View::App);
            self.load_all().await;
        } else {
            self.screen.show(View::Login);
        }
    }

    pub fn show_login(&self) {
        self.screen.show(View::Login);
    }

    pub fn show_register(&self) {
        self.screen.show(View::Register);
    }

    // ========================
    // Reads
    // ========================

    pub async fn load_tasks(&self) {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "loaded tasks");
                self.screen.set_tasks(tasks);
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load tasks, showing login");
                self.screen.show(View::Login);
            }
        }
    }

    pub async fn load_categories(&self) {
        match self.api.list_categories().await {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "loaded categories");
                self.screen.set_categories(CategoryIndex::new(categories));
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load categories, showing login");
                self.screen.show(View::Login);
            }
        }
    }

    /// Categories first so task rows resolve titles against fresh data.
    pub async fn load_all(&self) {
        self.load_categories().await;
        self.load_tasks().await;
    }

    // ========================
    // Tasks
    // ========================

    pub async fn create_task(&self, draft: &TaskDraft) {
        let fields = match task_fields(draft, validate::task_name) {
            Ok(fields) => fields,
            Err(e) => return self.reject(e),
        };
        match self.api.create_task(&fields).await {
            Ok(()) => {
                tracing::info!(name = %fields.name, "task created");
                self.screen.reset_task_form();
                self.load_tasks().await;
            }
            Err(e) => self.report(e),
        }
    }

    /// Swap the row for its inline edit form.
    pub fn begin_task_edit(&self, task_oid: &str) {
        self.screen.set_editing(Some(task_oid.to_string()));
    }

    pub async fn update_task(&self, task_oid: &str, draft: &TaskDraft) {
        let fields = match task_fields(draft, validate::edited_task_name) {
            Ok(fields) => fields,
            Err(e) => return self.reject(e),
        };
        match self.api.update_task(task_oid, &fields).await {
            Ok(()) => {
                tracing::info!(task_oid, "task updated");
                self.load_tasks().await;
            }
            Err(e) => self.report(e),
        }
    }

    /// Drop the inline form without saving.
    pub async fn cancel_task_edit(&self) {
        self.screen.set_editing(None);
        self.load_tasks().await;
    }

    pub async fn set_completion(&self, task_oid: &str, complete: bool) {
        if complete {
            self.complete_task(task_oid).await;
        } else {
            self.uncomplete_task(task_oid).await;
        }
    }

    pub async fn complete_task(&self, task_oid: &str) {
        match self.api.complete_task(task_oid).await {
            Ok(()) => self.load_tasks().await,
            Err(e) => self.report(e),
        }
    }

    pub async fn uncomplete_task(&self, task_oid: &str) {
        match self.api.uncomplete_task(task_oid).await {
            Ok(()) => self.load_tasks().await,
            Err(e) => self.report(e),
        }
    }

    pub async fn delete_task(&self, task_oid: &str) {
        match self.api.delete_task(task_oid).await {
            Ok(()) => {
                tracing::info!(task_oid, "task deleted");
                self.load_tasks().await;
            }
            Err(e) => self.report(e),
        }
    }

    // ========================
    // Categories
    // ========================

    pub async fn create_category(&self, title: &str) {
        let title = match validate::category_title(title) {
            Ok(title) => title,
            Err(e) => return self.reject(e),
        };
        match self.api.create_category(&title).await {
            Ok(()) => {
                tracing::info!(%title, "category created");
                self.screen.reset_category_form();
                self.load_categories().await;
            }
            Err(e) => self.report(e),
        }
    }

    /// Ask for a new title; a cancelled or blank answer changes nothing.
    pub async fn edit_category(&self, category_oid: &str, current_title: &str) {
        let Some(title) = self
            .notifier
            .prompt(RENAME_CATEGORY_PROMPT, current_title)
            .filter(|t| !t.trim().is_empty())
        else {
            return;
        };

        match self.api.update_category(category_oid, &title).await {
            Ok(()) => {
                tracing::info!(category_oid, %title, "category renamed");
                self.load_all().await;
            }
            Err(e) => {
                let unauthorized = e.is_unauthorized();
                self.report(e);
                if unauthorized {
                    self.screen.show(View::Login);
                }
            }
        }
    }

    pub async fn delete_category(&self, category_oid: &str) {
        match self.api.delete_category(category_oid).await {
            Ok(()) => {
                tracing::info!(category_oid, "category deleted");
                self.load_all().await;
            }
            Err(e) => self.report(e),
        }
    }

    // ========================
    // Session
    // ========================

    pub async fn register(&self, email: &str, password: &str) {
        let credentials = match validate::credentials(email, password) {
            Ok(credentials) => credentials,
            Err(e) => return self.reject(e),
        };
        match self.api.sign_up(&credentials).await {
            Ok(()) => {
                tracing::info!(email = %credentials.email, "registered");
                self.notifier.alert(REGISTERED_MESSAGE);
                self.screen.show(View::Login);
            }
            Err(e) => self.report(e),
        }
    }

    pub async fn login(&self, email: &str, password: &str) {
        let credentials = match validate::credentials(email, password) {
            Ok(credentials) => credentials,
            Err(e) => return self.reject(e),
        };
        match self.api.sign_in(&credentials).await {
            Ok(()) => {
                tracing::info!(email = %credentials.email, "logged in");
                self.session.set_logged_in(true);
                self.screen.show(View::App);
                self.load_all().await;
            }
            Err(e) => {
                self.session.set_logged_in(false);
                self.report(e);
            }
        }
    }

    pub fn logout(&self) {
        tracing::info!("logged out");
        self.session.clear();
        self.screen.show(View::Login);
    }

    fn reject(&self, error: ValidationError) {
        tracing::debug!(%error, "input rejected");
        self.notifier.alert(&error.to_string());
    }

    fn report(&self, error: impl Display) {
        let message = error.to_string();
        tracing::warn!(%message, "operation failed");
        self.notifier.alert(&message);
    }
}

fn task_fields(
    draft: &TaskDraft,
    name_rule: fn(&str) -> Result<String, ValidationError>,
) -> Result<TaskFields, ValidationError> {
    Ok(TaskFields {
        name: name_rule(&draft.name)?,
        deadline: deadline::parse_input(&draft.deadline, &Local)?,
        category_oid: validate::category_choice(&draft.category),
    })
}
