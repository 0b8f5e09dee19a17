//! What the user sees when an API call fails.
//!
//! | Failure | Outcome |
//! |---------|---------|
//! | 401 | session cleared, redirect to login, nothing shown |
//! | no response | "Cannot reach the server..." |
//! | 422 / other 4xx | the normalized server message, verbatim |
//! | 5xx / undecodable body | generic text; the original is logged |

use api::{ApiError, ErrorKind};
use dioxus::router::Navigator;
use store::SessionContext;

use crate::guard::LOGIN_PATH;

pub const UNREACHABLE: &str = "Cannot reach the server. Check your connection and try again.";
pub const GENERIC: &str = "Something went wrong. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Triage {
    /// The session was cleared; the caller must navigate to login.
    SessionExpired,
    Message(String),
}

pub fn triage(session: &SessionContext, err: &ApiError) -> Triage {
    match err.kind {
        ErrorKind::Unauthorized => {
            tracing::info!("request unauthorized, signing out");
            session.clear();
            Triage::SessionExpired
        }
        ErrorKind::Network => {
            tracing::warn!("{}", err);
            Triage::Message(UNREACHABLE.to_string())
        }
        ErrorKind::Validation | ErrorKind::Status => Triage::Message(err.message.clone()),
        ErrorKind::Server | ErrorKind::Decode => {
            tracing::error!(status = ?err.status, "{}", err);
            Triage::Message(GENERIC.to_string())
        }
    }
}

/// Triage for the login form, which never holds a session to expire.
pub fn login_message(err: &ApiError) -> String {
    match err.kind {
        ErrorKind::Unauthorized => "Incorrect email or password".to_string(),
        ErrorKind::Validation => "Invalid email or password format".to_string(),
        ErrorKind::Server => err.message.clone(),
        ErrorKind::Network => UNREACHABLE.to_string(),
        ErrorKind::Status => err.message.clone(),
        ErrorKind::Decode => {
            tracing::error!("{}", err);
            GENERIC.to_string()
        }
    }
}

/// Triage inside a component: on 401 leave for the login page and return
/// `None`, otherwise return the text to display.
pub fn surface(session: &SessionContext, nav: Navigator, err: &ApiError) -> Option<String> {
    match triage(session, err) {
        Triage::SessionExpired => {
            nav.replace(LOGIN_PATH);
            None
        }
        Triage::Message(message) => Some(message),
    }
}
