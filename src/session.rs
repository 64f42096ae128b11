//! Session
//!
//! A session is "a token is stored". Nothing checks the token itself; the REST
//! service rejects bad ones on its own.

use log::{info, warn};

use crate::config::TOKEN_STORAGE_KEY;
use crate::error::StorageError;

/// Where the session token survives page reloads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// `window.localStorage`, under [`TOKEN_STORAGE_KEY`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        let storage = Self::storage().ok()?;
        storage.get_item(TOKEN_STORAGE_KEY).ok()?
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|_| StorageError::Write {
                key: TOKEN_STORAGE_KEY.to_string(),
            })
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|_| StorageError::Write {
                key: TOKEN_STORAGE_KEY.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session<S> {
    token: Option<String>,
    store: S,
}

impl<S: TokenStore> Session<S> {
    /// Pick up a token left by an earlier visit
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        Self { token, store }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Keep the token in memory even if persisting it fails
    pub fn sign_in(&mut self, token: String) -> Result<(), StorageError> {
        let saved = self.store.save(&token);
        if let Err(e) = &saved {
            warn!("session: token not persisted: {}", e);
        }
        info!("session: signed in");
        self.token = Some(token);
        saved
    }

    pub fn sign_out(&mut self) -> Result<(), StorageError> {
        self.token = None;
        info!("session: signed out");
        self.store.clear()
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::TokenStore;
    use crate::error::StorageError;

    /// In-memory store shared between clones
    #[derive(Debug, Clone, Default)]
    pub struct MemoryTokenStore {
        pub slot: Rc<RefCell<Option<String>>>,
        pub fail_writes: bool,
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.slot.borrow().clone()
        }

        fn save(&self, token: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write { key: "token".into() });
            }
            *self.slot.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryTokenStore;
    use super::*;

    #[test]
    fn test_no_token_means_signed_out() {
        let session = Session::restore(MemoryTokenStore::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_restore_picks_up_stored_token() {
        let store = MemoryTokenStore::default();
        *store.slot.borrow_mut() = Some("abc".into());
        let session = Session::restore(store);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn test_empty_stored_token_is_ignored() {
        let store = MemoryTokenStore::default();
        *store.slot.borrow_mut() = Some(String::new());
        assert!(!Session::restore(store).is_authenticated());
    }

    #[test]
    fn test_sign_in_and_out_persist() {
        let store = MemoryTokenStore::default();
        let mut session = Session::restore(store.clone());

        session.sign_in("t0k3n".into()).unwrap();
        assert_eq!(store.slot.borrow().as_deref(), Some("t0k3n"));
        assert!(Session::restore(store.clone()).is_authenticated());

        session.sign_out().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(*store.slot.borrow(), None);
    }

    #[test]
    fn test_sign_in_survives_storage_failure() {
        let store = MemoryTokenStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut session = Session::restore(store);
        assert!(session.sign_in("t".into()).is_err());
        assert!(session.is_authenticated());
    }
}
