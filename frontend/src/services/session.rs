use gloo::storage::{LocalStorage, Storage};
use shared::{SessionContext, SessionStore};

use super::logging::Logger;

/// Session values kept in the browser's local storage as plain strings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            Logger::warn_with_component("session", &format!("Could not persist session key {}", key));
        }
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

pub type BrowserSession = SessionContext<BrowserSessionStore>;

pub fn browser_session() -> BrowserSession {
    SessionContext::new(BrowserSessionStore)
}

pub const LOGIN_PATH: &str = "/login";

/// Leave the app for the login page.
pub fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(LOGIN_PATH) {
        Logger::error_with_component("session", &format!("Redirect to login failed: {:?}", e));
    }
}

/// Clear the token and redirect. Used for every 401 the backend returns.
pub fn expire_session(session: &BrowserSession) {
    Logger::warn_with_component("session", "Backend rejected the session, redirecting to login");
    session.clear_token();
    redirect_to_login();
}
