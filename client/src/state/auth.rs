//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token and identity fields live in `localStorage` so they survive
//! reloads; `AuthState` mirrors them into a signal for the header and route
//! guards. The 401 handler in `util::auth` clears the same keys.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::LoginResult;
use crate::util::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "user_id";
pub const STUDENT_ID_KEY: &str = "student_id";
pub const USER_NAME_KEY: &str = "user_name";

/// Every key owned by the session; cleared together.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, USER_ID_KEY, STUDENT_ID_KEY, USER_NAME_KEY];

/// Credentials and identity of the signed-in student.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub student_id: String,
    pub user_name: String,
}

impl Session {
    pub fn from_login(result: LoginResult) -> Self {
        Self {
            token: result.access_token,
            user_id: result.user_id,
            student_id: result.student_id,
            user_name: result.name,
        }
    }

    /// Read the stored session. A missing or empty token means signed out.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(Self {
            token,
            user_id: store.get(USER_ID_KEY).unwrap_or_default(),
            student_id: store.get(STUDENT_ID_KEY).unwrap_or_default(),
            user_name: store.get(USER_NAME_KEY).unwrap_or_default(),
        })
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        store.set(TOKEN_KEY, &self.token);
        store.set(USER_ID_KEY, &self.user_id);
        store.set(STUDENT_ID_KEY, &self.student_id);
        store.set(USER_NAME_KEY, &self.user_name);
    }

    pub fn clear(store: &impl KeyValueStore) {
        for key in SESSION_KEYS {
            store.remove(key);
        }
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Reactive view of the stored session, provided as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the browser has read `localStorage`; guards wait for it.
    pub loading: bool,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        let session = self.session.as_ref()?;
        if session.user_name.is_empty() {
            Some(session.student_id.as_str())
        } else {
            Some(session.user_name.as_str())
        }
    }
}
