//! New Task Form Component
//!
//! Name, optional deadline and optional category. Inputs live in the store so
//! the controller can clear them after a successful create.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = store.task_form();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get();
        ctx.spawn(move |c| async move { c.create_task(&draft).await });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                id="new-todo"
                placeholder="What needs to be done?"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="datetime-local"
                id="deadline"
                prop:value=move || form.with(|f| f.deadline.clone())
                on:input=move |ev| form.update(|f| f.deadline = event_target_value(&ev))
            />
            <CategorySelect
                selected=Signal::derive(move || form.with(|f| f.category.clone()))
                on_select=move |oid: String| form.update(|f| f.category = oid)
                placeholder="Select category"
            />
            <button type="submit" id="add-todo">"Add"</button>
        </form>
    }
}
