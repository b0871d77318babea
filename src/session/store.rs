#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::persist::SessionBackend;
use super::state::{SessionState, UserProfile};

/// Session context object: the single owner of [`SessionState`] plus the
/// backend it mirrors every change to.
///
/// Constructed once at startup via [`SessionStore::restore`] and passed by
/// handle (in the app, inside an `RwSignal` context). Mutators update the
/// in-memory state first and then commit the whole record, so the pure
/// transition is testable on [`SessionState`] alone while the store keeps
/// the "every mutation persists" contract observable through its backend.
#[derive(Clone, Debug)]
pub struct SessionStore<B: SessionBackend> {
    state: SessionState,
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    /// Rehydrate from the backend. Anything short of a well-formed record
    /// (no record, unreadable storage, malformed JSON) silently yields the
    /// logged-out default; a corrupt session must never block startup.
    pub fn restore(backend: B) -> Self {
        let state = backend
            .read()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { state, backend }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.logged_in
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.state.logged_in = logged_in;
        self.commit();
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.state.user = Some(user);
        self.commit();
    }

    pub fn set_token(&mut self, token: String) {
        self.state.token = Some(token);
        self.commit();
    }

    /// Drop the session: one atomic reset of all three fields, one commit.
    pub fn logout(&mut self) {
        self.state.clear();
        self.commit();
    }

    fn commit(&self) {
        match serde_json::to_string(&self.state) {
            Ok(raw) => self.backend.write(&raw),
            Err(err) => log::warn!("session record serialization failed: {err}"),
        }
    }
}
