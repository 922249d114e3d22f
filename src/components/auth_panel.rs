//! Auth Panel Component
//!
//! Login and register sub-forms; exactly one is visible at a time.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::View;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (login_email, set_login_email) = signal(String::new());
    let (login_password, set_login_password) = signal(String::new());
    let (register_email, set_register_email) = signal(String::new());
    let (register_password, set_register_password) = signal(String::new());

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (login_email.get(), login_password.get());
        ctx.spawn(move |c| async move { c.login(&email, &password).await });
    };

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (register_email.get(), register_password.get());
        ctx.spawn(move |c| async move { c.register(&email, &password).await });
    };

    view! {
        <div id="auth-container" class="auth-container">
            <Show
                when=move || store.view().get() == View::Register
                fallback=move || view! {
                    <form id="login-form" class="auth-form" on:submit=login>
                        <h2>"Log in"</h2>
                        <input
                            type="email"
                            id="login-email"
                            placeholder="Email"
                            prop:value=move || login_email.get()
                            on:input=move |ev| set_login_email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            id="login-password"
                            placeholder="Password"
                            prop:value=move || login_password.get()
                            on:input=move |ev| set_login_password.set(event_target_value(&ev))
                        />
                        <button type="submit" id="login-button">"Log in"</button>
                        <p>
                            "No account? "
                            <a href="#" id="show-register" on:click=move |ev| {
                                ev.prevent_default();
                                ctx.controller().show_register();
                            }>"Register"</a>
                        </p>
                    </form>
                }
            >
                <form id="register-form" class="auth-form" on:submit=register>
                    <h2>"Register"</h2>
                    <input
                        type="email"
                        id="register-email"
                        placeholder="Email"
                        prop:value=move || register_email.get()
                        on:input=move |ev| set_register_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        id="register-password"
                        placeholder="Password"
                        prop:value=move || register_password.get()
                        on:input=move |ev| set_register_password.set(event_target_value(&ev))
                    />
                    <button type="submit" id="register-button">"Register"</button>
                    <p>
                        "Already registered? "
                        <a href="#" id="show-login" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.controller().show_login();
                        }>"Log in"</a>
                    </p>
                </form>
            </Show>
        </div>
    }
}
