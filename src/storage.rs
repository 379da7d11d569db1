//! Persisted client state — the local-storage and cookie-jar analog.
//!
//! ARCHITECTURE
//! ============
//! One JSON state file holds everything the browser would keep between page
//! loads: the serialized user record, the keep-logged-in flag, and a small
//! cookie jar carrying the `auth_token` marker the route guard reads. Tests
//! use the in-memory backend; the CLI shell uses the file backend so each
//! invocation behaves like a fresh page load.
//!
//! Only the session manager writes here. The guard reads token presence and
//! nothing else.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::net::api::AuthUser;

/// Cookie name the route guard keys on.
pub const AUTH_COOKIE: &str = "auth_token";

const STATE_FILE: &str = "state.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A browser-visible cookie. No expiry field: cookies here are
/// session-scoped and removal is the only way they end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    user: Option<AuthUser>,
    #[serde(default)]
    keep_logged_in: bool,
    #[serde(default)]
    cookies: Vec<Cookie>,
}

#[derive(Debug)]
pub struct ClientStore {
    /// `None` for the in-memory backend.
    state_path: Option<PathBuf>,
    state: Mutex<PersistedState>,
}

impl ClientStore {
    /// Open (or create) the file-backed store under `dir`.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        let state_path = dir.join(STATE_FILE);
        let state = match fs::read(&state_path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PersistedState::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { state_path: Some(state_path), state: Mutex::new(state) })
    }

    /// Volatile store for tests and ephemeral shells.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { state_path: None, state: Mutex::new(PersistedState::default()) }
    }

    fn lock(&self) -> MutexGuard<'_, PersistedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self, state: &PersistedState) -> Result<(), StoreError> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(state)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    // =========================================================================
    // SESSION RECORD
    // =========================================================================

    #[must_use]
    pub fn persisted_user(&self) -> Option<AuthUser> {
        self.lock().user.clone()
    }

    #[must_use]
    pub fn keep_logged_in(&self) -> bool {
        self.lock().keep_logged_in
    }

    /// Persist the user record, the keep flag, and the auth-token cookie in
    /// one write.
    pub fn save_session(&self, user: &AuthUser, keep_logged_in: bool, token: &str) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.user = Some(user.clone());
        state.keep_logged_in = keep_logged_in;
        set_cookie(&mut state.cookies, AUTH_COOKIE, token);
        self.flush(&state)
    }

    /// Remove the user record, the keep flag, and the auth-token cookie.
    /// Safe to call when nothing is stored.
    pub fn clear_session(&self) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.user = None;
        state.keep_logged_in = false;
        state.cookies.retain(|c| c.name != AUTH_COOKIE);
        self.flush(&state)
    }

    // =========================================================================
    // COOKIE JAR
    // =========================================================================

    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.lock()
            .cookies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.clone())
    }

    /// Presence of the auth-token cookie; the only thing the guard reads.
    #[must_use]
    pub fn token_present(&self) -> bool {
        self.cookie(AUTH_COOKIE).is_some()
    }
}

fn set_cookie(jar: &mut Vec<Cookie>, name: &str, value: &str) {
    if let Some(existing) = jar.iter_mut().find(|c| c.name == name) {
        existing.value = value.to_owned();
    } else {
        jar.push(Cookie { name: name.to_owned(), value: value.to_owned(), path: "/".to_owned() });
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
