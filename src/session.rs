use log::{debug, info};

use crate::error::ClientResult;
use crate::storage::KeyValueStore;

pub const USER_ID_KEY: &str = "userId";
pub const LOGIN_VIEW: &str = "login.html";

/// Where the UI goes when there is no logged-in user.
pub trait Navigator {
    fn redirect(&self, view: &str);
}

pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save_user_id(&self, user_id: &str) -> ClientResult<()> {
        debug!("Saving session for user {}", user_id);
        self.store.set(USER_ID_KEY, user_id)
    }

    /// Stored identifier. An empty value counts as logged out.
    pub fn user_id(&self) -> ClientResult<Option<String>> {
        Ok(self.store.get(USER_ID_KEY)?.filter(|id| !id.is_empty()))
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.store.remove(USER_ID_KEY)
    }

    pub fn check_auth(&self, navigator: &dyn Navigator) -> ClientResult<bool> {
        if self.user_id()?.is_some() {
            return Ok(true);
        }
        debug!("No user in session, redirecting to {}", LOGIN_VIEW);
        navigator.redirect(LOGIN_VIEW);
        Ok(false)
    }

    pub fn logout(&self, navigator: &dyn Navigator) -> ClientResult<()> {
        self.clear()?;
        info!("Logged out");
        navigator.redirect(LOGIN_VIEW);
        Ok(())
    }
}
