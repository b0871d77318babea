#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Account category, mirroring the `users.type` column of the lab service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Professor,
}

/// Identity of the signed-in user as reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// In-memory session state: login flag, identity, and the bearer token
/// sent as `X-Session-Token` on API calls.
///
/// The token is opaque to the client and never parsed. A token may be
/// present while `logged_in` is false (the fields are set independently
/// during login); the navigation guard only ever consults `logged_in`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub logged_in: bool,
    pub user: Option<UserProfile>,
    pub token: Option<String>,
}

impl SessionState {
    /// Reset to the logged-out default in a single update.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
