//! Task Item Component
//!
//! A single task row: name, deadline, category, checkbox, edit and delete.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render::TaskRow;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();

    let TaskRow {
        oid,
        name,
        deadline_label,
        category_label,
        is_complete,
        overdue,
    } = row;

    let mut class = String::from("task-row");
    if is_complete {
        class.push_str(" completed");
    }
    if overdue {
        class.push_str(" overdue");
    }

    let toggle_oid = oid.clone();
    let edit_oid = oid.clone();
    let delete_oid = oid.clone();

    view! {
        <li class=class data-task-id=oid>
            <span class="task-name">{name}</span>
            {deadline_label.map(|label| view! { <span class="task-deadline">{label}</span> })}
            {category_label.map(|label| view! { <span class="task-category">{label}</span> })}

            <input
                type="checkbox"
                prop:checked=is_complete
                on:change=move |ev| {
                    let complete = event_target_checked(&ev);
                    let oid = toggle_oid.clone();
                    ctx.spawn(move |c| async move { c.set_completion(&oid, complete).await });
                }
            />

            <button class="edit-btn" on:click=move |_| ctx.controller().begin_task_edit(&edit_oid)>
                "Edit"
            </button>

            <button class="delete-btn" on:click=move |_| {
                let oid = delete_oid.clone();
                ctx.spawn(move |c| async move { c.delete_task(&oid).await });
            }>"Delete"</button>
        </li>
    }
}
