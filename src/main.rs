//! To-Do Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod deadline;
mod error;
mod logging;
mod models;
mod notify;
mod render;
mod session;
mod store;
mod validate;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    let config = ClientConfig::load();
    logging::init(config.log_level);
    tracing::info!(api = %config.api_base_url, "starting to-do client");

    mount_to_body(move || view! { <App config=config /> });
}
