//! User Notifications
//!
//! Blocking browser dialogs: error and status alerts, and the category
//! rename prompt.

pub trait Notifier {
    fn alert(&self, message: &str);
    /// `None` when the user cancels.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message).is_ok());
        if shown != Some(true) {
            tracing::warn!(%message, "could not show alert");
        }
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }
}
