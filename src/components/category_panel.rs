//! Category Panel Component
//!
//! New-category form plus the category list with rename and delete.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let title = store.category_title();

    let create_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = title.get();
        ctx.spawn(move |c| async move { c.create_category(&value).await });
    };

    view! {
        <section class="category-panel">
            <form class="new-category-form" on:submit=create_category>
                <input
                    type="text"
                    id="new-category"
                    placeholder="New category"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <button type="submit" id="add-category">"Add category"</button>
            </form>

            <Show when=move || store.categories().with(|c| c.is_empty())>
                <p class="category-empty">"No categories yet."</p>
            </Show>
            <ul id="category-list" class="category-list">
                <For
                    each=move || store.categories().with(|c| c.iter().cloned().collect::<Vec<_>>())
                    key=|category| (category.oid.clone(), category.title.clone())
                    children=move |category| {
                        let edit = category.clone();
                        let delete_oid = category.oid.clone();
                        view! {
                            <li class="category-row">
                                <span class="category-title">{category.title.clone()}</span>
                                <button class="edit-btn" on:click=move |_| {
                                    let edit = edit.clone();
                                    ctx.spawn(move |c| async move { c.edit_category(&edit.oid, &edit.title).await });
                                }>"Edit"</button>
                                <button class="delete-btn" on:click=move |_| {
                                    let oid = delete_oid.clone();
                                    ctx.spawn(move |c| async move { c.delete_category(&oid).await });
                                }>"Delete"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
