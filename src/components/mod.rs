//! UI Components
//!
//! Leptos components for the auth forms and the task/category manager.

mod auth_panel;
mod category_panel;
mod category_select;
mod task_edit_form;
mod task_form;
mod task_item;
mod task_list;
mod todo_app;

pub use auth_panel::AuthPanel;
pub use category_panel::CategoryPanel;
pub use category_select::CategorySelect;
pub use task_edit_form::TaskEditForm;
pub use task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use todo_app::TodoApp;
