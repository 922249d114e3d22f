//! Category Select Component
//!
//! Dropdown of the current categories, used by the new-task and edit forms.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Category dropdown. The first option carries an empty value.
///
/// # Arguments
/// * `selected` - Currently selected category id (empty for none)
/// * `on_select` - Called with the chosen id
/// * `placeholder` - Label of the empty option
/// * `placeholder_selectable` - Whether the empty option can be picked again
#[component]
pub fn CategorySelect(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
    placeholder: &'static str,
    #[prop(optional)] placeholder_selectable: bool,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="category-select"
            on:change=move |ev| on_select.run(event_target_value(&ev))
        >
            <option
                value=""
                disabled=!placeholder_selectable
                prop:selected=move || selected.get().is_empty()
            >
                {placeholder}
            </option>
            {move || {
                store.categories().with(|categories| {
                    categories
                        .iter()
                        .map(|category| {
                            let oid = category.oid.clone();
                            let is_selected = move || selected.get() == oid;
                            view! {
                                <option value=category.oid.clone() prop:selected=is_selected>
                                    {category.title.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                })
            }}
        </select>
    }
}
