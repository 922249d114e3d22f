//! Todo App Component
//!
//! The signed-in view: task form and list beside the category manager.

use leptos::prelude::*;

use crate::components::{CategoryPanel, NewTaskForm, TaskList};
use crate::context::use_app_context;

#[component]
pub fn TodoApp() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="todo-app" class="todo-app">
            <header class="todo-header">
                <h1>"To-Do"</h1>
                <button id="logout-button" on:click=move |_| ctx.controller().logout()>"Log out"</button>
            </header>
            <main class="todo-main">
                <section class="task-panel">
                    <NewTaskForm />
                    <TaskList />
                </section>
                <CategoryPanel />
            </main>
        </div>
    }
}
