//! Task Edit Form Component
//!
//! Inline replacement for a task row, pre-filled with the task's values.

use chrono::Local;
use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::context::use_app_context;
use crate::deadline;
use crate::models::{Task, TaskDraft};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskEditForm(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(task.name.clone());
    let (category, set_category) = signal(
        store
            .categories()
            .with_untracked(|categories| categories.selection(task.category_oid.as_deref())),
    );
    let (deadline_value, set_deadline_value) = signal(
        task.deadline
            .as_ref()
            .map(|d| deadline::to_input(d, &Local))
            .unwrap_or_default(),
    );

    let oid = task.oid.clone();
    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft {
            name: name.get(),
            deadline: deadline_value.get(),
            category: category.get(),
        };
        let oid = oid.clone();
        ctx.spawn(move |c| async move { c.update_task(&oid, &draft).await });
    };

    let cancel = move |_| ctx.spawn(|c| async move { c.cancel_task_edit().await });

    view! {
        <li class="task-row editing" data-task-id=task.oid.clone()>
            <form class="edit-task-form" on:submit=save>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <CategorySelect
                    selected=category
                    on_select=move |oid: String| set_category.set(oid)
                    placeholder="No category"
                    placeholder_selectable=true
                />
                <input
                    type="datetime-local"
                    prop:value=move || deadline_value.get()
                    on:input=move |ev| set_deadline_value.set(event_target_value(&ev))
                />
                <button type="submit">"Save"</button>
                <button type="button" on:click=cancel>"Cancel"</button>
            </form>
        </li>
    }
}
