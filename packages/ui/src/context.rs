//! The API client, and through it the session, shared via Dioxus context.

use api::ApiClient;
use dioxus::prelude::*;
use store::Session;

/// Install the client for the whole tree. Call once from the root component.
pub fn use_api_provider(init: impl FnOnce() -> ApiClient) -> Signal<ApiClient> {
    use_context_provider(|| Signal::new(init()))
}

pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

/// The signed-in session as of this render.
pub fn use_current_session() -> Option<Session> {
    let api = use_api();
    let current = api.read().session().current();
    current
}
