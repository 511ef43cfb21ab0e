// ============================================================================
// TOKEN STORAGE - Durable storage for the session credential
// ============================================================================
// The token is stored raw (not JSON-encoded) under a single key so that it
// stays readable by anything else served from the same origin.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_storage::{LocalStorage, Storage};
use crate::errors::StorageError;

/// Durable home of the bearer token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Browser localStorage
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    /// localStorage may be disabled (private mode, sandboxed iframes)
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(&self.key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store. Clones share the same slot, so a second store built
/// from a clone sees what the first one wrote.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Pick localStorage when the browser exposes it
pub fn default_token_store(key: &str) -> Rc<dyn TokenStore> {
    if LocalTokenStore::is_available() {
        Rc::new(LocalTokenStore::new(key))
    } else {
        log::warn!("⚠️ [STORAGE] localStorage unavailable, the session will not survive a reload");
        Rc::new(MemoryTokenStore::new())
    }
}
