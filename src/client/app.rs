use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, FetchTransport},
    component::{alert::blocking_alert, Header},
    config::ClientConfig,
    constant::SITE_NAME,
    controller::Controller,
    model::screen::{Screen, ViewState},
    route::{Login, Register, ServerDashboard},
    store::CookieStore,
};

/// Controller wired to the browser cookie jar and fetch.
pub type WebController = Controller<CookieStore, FetchTransport>;

#[component]
pub fn App() -> Element {
    let controller = use_context_provider(|| {
        let transport = FetchTransport::new(ClientConfig::from_env());
        WebController::new(ApiClient::new(CookieStore, transport))
    });
    let mut view = use_context_provider(|| Signal::new(ViewState::default()));

    // Pick the first screen on load
    use_future(move || {
        let controller = controller.clone();
        async move {
            tracing::info!("App initialized");
            if controller.has_login_token() {
                view.write().begin_dashboard();
            }
            match controller.start().await {
                Ok(screen) => view.write().show(screen),
                Err(err) => {
                    tracing::error!("Failed to load dashboard: {}", err);
                    blocking_alert(&err.to_string());
                    view.write().show(Screen::Login);
                }
            }
        }
    });

    let state = view.read();
    let body = match state.screen() {
        None => rsx! {},
        Some(Screen::Login) => rsx! { Login {} },
        Some(Screen::Register) => rsx! { Register {} },
        Some(Screen::Dashboard(dashboard)) => rsx! {
            ServerDashboard { dashboard: dashboard.clone() }
        },
    };

    rsx! {
        Title { "{SITE_NAME}" }
        Header { visible: state.header_visible() }
        div {
            id: "app",
            class: "p-4",
            {body}
        }
    }
}
