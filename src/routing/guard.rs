#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::route::{NavigationAttempt, RouteTable};
use crate::session::persist::SessionBackend;
use crate::session::store::SessionStore;

/// Result of evaluating one navigation attempt. The enum return makes
/// "exactly one outcome per attempt" structural: the guard can neither
/// stall a navigation nor answer twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the attempt complete unchanged.
    Proceed,
    /// Replace the attempt with a navigation to the named route.
    Redirect(&'static str),
}

/// Authorization gate consulted before every route transition.
///
/// Holds only its configuration (the login and logout route names); all
/// session knowledge is read from the store per invocation, so repeated
/// evaluation of the same attempt against the same session state gives
/// the same outcome.
#[derive(Clone, Copy, Debug)]
pub struct NavigationGuard {
    login: &'static str,
    logout: &'static str,
}

impl NavigationGuard {
    pub const fn new(login: &'static str, logout: &'static str) -> Self {
        Self { login, logout }
    }

    /// Decide one navigation attempt, in order:
    ///
    /// 1. The logout pseudo-route drops the session and redirects to
    ///    login; its target is never reached.
    /// 2. A target whose match chain requires auth redirects to login
    ///    when the session is not logged in.
    /// 3. Everything else proceeds.
    pub fn evaluate<B: SessionBackend>(
        &self,
        store: &mut SessionStore<B>,
        table: &RouteTable,
        attempt: &NavigationAttempt<'_>,
    ) -> GuardOutcome {
        if attempt.target.name == self.logout {
            store.logout();
            return GuardOutcome::Redirect(self.login);
        }

        if table.requires_auth(attempt.target) && !store.is_logged_in() {
            log::debug!(
                "unauthenticated attempt at {} (from {:?})",
                attempt.target.path,
                attempt.current.map(|route| route.path),
            );
            return GuardOutcome::Redirect(self.login);
        }

        GuardOutcome::Proceed
    }
}
