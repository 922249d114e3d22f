//! Session Flag
//!
//! The `auth` key in local storage records whether the user is presumed to be
//! logged in. The server remains the authority; a stale flag is corrected when
//! a read fails.

/// Local storage key
pub const AUTH_KEY: &str = "auth";

pub trait SessionStore {
    /// Raw flag value, `None` when absent
    fn flag(&self) -> Option<String>;
    fn set_logged_in(&self, logged_in: bool);
    fn clear(&self);

    fn is_logged_in(&self) -> bool {
        self.flag().as_deref() == Some("true")
    }
}

/// Session flag kept in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageSession {
    fn flag(&self) -> Option<String> {
        Self::storage()?.get_item(AUTH_KEY).ok().flatten()
    }

    fn set_logged_in(&self, logged_in: bool) {
        let value = if logged_in { "true" } else { "false" };
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(AUTH_KEY, value).is_err() {
                    tracing::warn!("could not write session flag");
                }
            }
            None => tracing::warn!("local storage unavailable"),
        }
    }

    fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(AUTH_KEY).is_err() {
                    tracing::warn!("could not remove session flag");
                }
            }
            None => tracing::warn!("local storage unavailable"),
        }
    }
}
