//! Session state (auth token, selected budget) behind a single store abstraction.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

pub const TOKEN_KEY: &str = "token";
pub const SELECTED_BUDGET_KEY: &str = "selectedBudgetId";

/// Key/value persistence for session data.
///
/// The browser implementation lives in the frontend (local storage); tests use
/// [`MemorySessionStore`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Session context handed to every data-fetching operation.
#[derive(Debug, Clone, Default)]
pub struct SessionContext<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> PartialEq for SessionContext<S> {
    /// Contexts are handles onto external storage; any two are interchangeable.
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        debug!("Clearing session token");
        self.store.remove(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }

    pub fn selected_budget_id(&self) -> Option<i64> {
        self.store
            .get(SELECTED_BUDGET_KEY)
            .and_then(|id| id.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
    }

    pub fn select_budget(&self, budget_id: i64) {
        self.store.set(SELECTED_BUDGET_KEY, &budget_id.to_string());
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(SELECTED_BUDGET_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> (SessionContext<MemorySessionStore>, MemorySessionStore) {
        let store = MemorySessionStore::new();
        (SessionContext::new(store.clone()), store)
    }

    #[test]
    fn test_token_round_trip_and_clear() {
        let (session, store) = context();
        assert!(!session.is_authenticated());

        session.set_token("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));

        session.clear_token();
        assert_eq!(session.token(), None);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_blank_token_is_not_a_session() {
        let (session, store) = context();
        store.set(TOKEN_KEY, "  ");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_selected_budget() {
        let (session, store) = context();
        assert_eq!(session.selected_budget_id(), None);

        session.select_budget(42);
        assert_eq!(session.selected_budget_id(), Some(42));

        store.set(SELECTED_BUDGET_KEY, "garbage");
        assert_eq!(session.selected_budget_id(), None);
        store.set(SELECTED_BUDGET_KEY, "0");
        assert_eq!(session.selected_budget_id(), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let (session, _) = context();
        session.set_token("abc");
        session.select_budget(3);
        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.selected_budget_id(), None);
    }
}
