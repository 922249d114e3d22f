//! Task List Component
//!
//! Renders the fetched tasks; the row being edited is swapped for its form.

use chrono::{Local, Utc};
use leptos::prelude::*;

use crate::components::{TaskEditForm, TaskItem};
use crate::render::{self, TaskRow};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::models::Task;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    // Rows are recomputed from (tasks, categories, now) on every change
    let rows = Memo::new(move |_| {
        store.tasks().with(|tasks| {
            store.categories().with(|categories| {
                let rows = render::task_rows(tasks, categories, Utc::now(), &Local);
                tasks.iter().cloned().zip(rows).collect::<Vec<(Task, TaskRow)>>()
            })
        })
    });

    view! {
        <div class="task-list-section">
            <p class="task-count">
                "Tasks: " <span id="todo-count">{move || rows.with(Vec::len)}</span>
            </p>
            <ul id="todo-list" class="task-list">
                <For
                    each=move || rows.get()
                    key=|(task, row)| (task.clone(), row.category_label.clone(), row.overdue)
                    children=move |(task, row)| {
                        let oid = task.oid.clone();
                        let is_editing = move || store.editing_task().with(|e| e.as_deref() == Some(oid.as_str()));
                        view! {
                            <Show
                                when=is_editing
                                fallback={
                                    let row = row.clone();
                                    move || view! { <TaskItem row=row.clone() /> }
                                }
                            >
                                <TaskEditForm task=task.clone() />
                            </Show>
                        }
                    }
                />
            </ul>
        </div>
    }
}
