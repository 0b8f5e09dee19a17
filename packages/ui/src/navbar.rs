use dioxus::prelude::*;

use crate::context::{use_api, use_current_session};
use crate::guard::LOGIN_PATH;
use crate::login::sign_out;

#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_current_session();

    rsx! {
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: "/home", "TaskDesk" }
            div { class: "navbar-links", {children} }
            if let Some(session) = session {
                span { class: "navbar-user", "{session.display_name()}" }
                LogoutButton {}
            }
        }
    }
}

/// Clears the session and replaces history with the login page.
#[component]
pub fn LogoutButton() -> Element {
    let api = use_api();
    let nav = use_navigator();

    rsx! {
        button {
            class: "secondary",
            onclick: move |_| {
                sign_out(&api.read());
                nav.replace(LOGIN_PATH);
            },
            "Log out"
        }
    }
}
