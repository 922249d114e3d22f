//! Application Context
//!
//! The controller, shared with every component through Leptos context.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::Controller;
use crate::notify::BrowserNotifier;
use crate::session::LocalStorageSession;
use crate::store::StoreScreen;

pub type AppController = Controller<StoreScreen, BrowserNotifier, LocalStorageSession>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Run a controller operation on the browser event loop.
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
