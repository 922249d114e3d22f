//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{Screen, View};
use crate::models::{CategoryIndex, Task, TaskDraft};

/// Everything the page renders
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible panel
    pub view: View,
    /// Tasks as last fetched, server order
    pub tasks: Vec<Task>,
    /// Category index as last fetched
    pub categories: CategoryIndex,
    /// Task whose row is replaced by the inline edit form
    pub editing_task: Option<String>,
    /// New-task form inputs
    pub task_form: TaskDraft,
    /// New-category form input
    pub category_title: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// [`Screen`] backed by the store; every controller update lands here.
#[derive(Clone, Copy)]
pub struct StoreScreen {
    store: AppStore,
}

impl StoreScreen {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl Screen for StoreScreen {
    fn show(&self, view: View) {
        self.store.view().set(view);
    }

    fn set_tasks(&self, tasks: Vec<Task>) {
        self.store.editing_task().set(None);
        self.store.tasks().set(tasks);
    }

    fn set_categories(&self, categories: CategoryIndex) {
        self.store.categories().set(categories);
    }

    fn set_editing(&self, task_oid: Option<String>) {
        self.store.editing_task().set(task_oid);
    }

    fn reset_task_form(&self) {
        self.store.task_form().set(TaskDraft::default());
    }

    fn reset_category_form(&self) {
        self.store.category_title().set(String::new());
    }
}
