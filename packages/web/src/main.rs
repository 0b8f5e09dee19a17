use dioxus::prelude::*;

use store::{ClientConfig, SessionContext};
use ui::guard::{self, Access};
use ui::{use_api, use_api_provider, Navbar};
use views::{Home, Login, ProjectView, Register, TaskView};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/home")]
        Home {},
        #[route("/project/:project_id")]
        ProjectView { project_id: i64 },
        #[route("/task/:task_id")]
        TaskView { task_id: i64 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialize logging: {err}");
    }
    dioxus::launch(App);
}

fn session_store(config: &ClientConfig) -> SessionContext {
    #[cfg(target_arch = "wasm32")]
    let session = SessionContext::new(store::LocalStorageStore::new());
    #[cfg(not(target_arch = "wasm32"))]
    let session = SessionContext::new(store::MemoryStore::new());
    session.with_prefix(config.session.key_prefix.clone())
}

#[component]
fn App() -> Element {
    use_api_provider(|| {
        let config = config::load();
        tracing::info!("using backend at {}", config.base_url());
        api::ApiClient::new(&config, session_store(&config))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        Router::<Route> {}
    }
}

/// Renders the protected pages only for a complete session.
#[component]
fn Protected() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let access = guard::check(api.read().session());

    match access {
        Access::Authorized(_) => rsx! {
            Navbar {
                Link { to: Route::Home {}, "Dashboard" }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        },
        Access::Unauthorized => {
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
#[component]
fn Root() -> Element {
    let api = use_api();
    let nav = use_navigator();
    if api.read().session().is_authorized() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Root {});
    rsx! {}
}
