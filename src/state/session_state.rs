// ============================================================================
// SESSION STORE - Bearer token + derived authenticated flag
// ============================================================================
// Built once at startup and injected wherever it is needed. The token is
// read from durable storage exactly once, in `new`; after that only
// `login`/`logout` change it.
// ============================================================================

use std::rc::Rc;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::storage::TokenStore;

#[derive(Clone)]
pub struct SessionStore {
    token: ReactiveState<Option<String>>,
    storage: Rc<dyn TokenStore>,
}

impl SessionStore {
    /// Restore the session persisted by a previous run, if any
    pub fn new(storage: Rc<dyn TokenStore>) -> Self {
        let token = storage.load();
        if token.is_some() {
            log::info!("💾 [SESSION] Token found in storage, restoring session");
        } else {
            log::info!("🔒 [SESSION] No stored token, starting logged out");
        }
        Self {
            token: ReactiveState::new(token),
            storage,
        }
    }

    /// Store the token in memory and durable storage.
    /// `is_authenticated` is `true` as soon as this returns.
    pub fn login(&self, token: &str) {
        if let Err(e) = self.storage.save(token) {
            log::error!("❌ [SESSION] Could not persist token: {}", e);
        }
        self.token.set(Some(token.to_string()));
        log::info!("✅ [SESSION] Logged in");
    }

    /// Forget the token everywhere
    pub fn logout(&self) {
        if let Err(e) = self.storage.clear() {
            log::error!("❌ [SESSION] Could not clear stored token: {}", e);
        }
        self.token.set(None);
        log::info!("👋 [SESSION] Logged out");
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Called with the new authenticated flag after every login/logout
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + 'static,
    {
        self.token.subscribe(move |token| callback(token.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::utils::storage::MemoryTokenStore;

    #[test]
    fn starts_logged_out_without_stored_token() {
        let session = SessionStore::new(Rc::new(MemoryTokenStore::new()));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn login_is_visible_immediately_and_survives_reload() {
        let disk = MemoryTokenStore::new();
        let session = SessionStore::new(Rc::new(disk.clone()));

        session.login("tok-1");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-1"));

        // Fresh process load over the same storage
        let reloaded = SessionStore::new(Rc::new(disk));
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let disk = MemoryTokenStore::with_token("tok-2");
        let session = SessionStore::new(Rc::new(disk.clone()));
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());

        let reloaded = SessionStore::new(Rc::new(disk));
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn subscribers_see_each_transition() {
        let session = SessionStore::new(Rc::new(MemoryTokenStore::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        session.subscribe(move |authenticated| seen_clone.borrow_mut().push(authenticated));

        session.login("a");
        session.logout();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn storage_is_read_once_at_startup() {
        let disk = MemoryTokenStore::new();
        let session = SessionStore::new(Rc::new(disk.clone()));

        // Written behind the store's back: not picked up
        disk.save("late").unwrap();
        assert!(!session.is_authenticated());
    }
}
