//! To-Do Frontend App
//!
//! Root component: builds the store and controller, picks the initial view
//! and switches between the auth panel and the task manager.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{AuthPanel, TodoApp};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::controller::{Controller, View};
use crate::notify::BrowserNotifier;
use crate::session::LocalStorageSession;
use crate::store::{AppState, AppStateStoreFields, StoreScreen};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let controller = Controller::new(
        ApiClient::new(config.api_base_url),
        StoreScreen::new(store),
        BrowserNotifier,
        LocalStorageSession,
    );
    let ctx = AppContext::new(controller);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial view from the session flag
    Effect::new(move |_| {
        ctx.spawn(|c| async move { c.start().await });
    });

    view! {
        <Show
            when=move || store.view().get() == View::App
            fallback=|| view! { <AuthPanel /> }
        >
            <TodoApp />
        </Show>
    }
}
