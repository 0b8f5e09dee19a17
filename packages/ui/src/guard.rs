//! Route guard decision.
//!
//! Evaluated synchronously on every render of a protected route; no network
//! call is involved. A session is valid only when both the token and the user
//! id are stored. Anything less is cleared so the next login starts clean.

use store::{Session, SessionContext};

/// Path the guard redirects to.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Authorized(Session),
    Unauthorized,
}

impl Access {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Access::Authorized(_))
    }
}

pub fn check(session: &SessionContext) -> Access {
    if let Some(current) = session.current() {
        return Access::Authorized(current);
    }
    if session.is_partial() {
        tracing::warn!("found a partial session, clearing it");
        session.clear();
    }
    Access::Unauthorized
}
