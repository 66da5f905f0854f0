//! Dashboard screen: the server list plus the panels built on the rest of the API.

mod account;
mod create_server;
mod server_list;
mod user_admin;

use dioxus::prelude::*;

use crate::{
    client::{app::WebController, component::Page, model::screen::Dashboard},
    model::user::AccessLevel,
};

use account::AccountPanel;
use create_server::CreateServerPanel;
use server_list::ServerList;
use user_admin::UserAdminPanel;

#[component]
pub fn ServerDashboard(dashboard: Dashboard) -> Element {
    let controller = use_context::<WebController>();

    // The user is not part of the screen data; it is fetched on demand for display
    let user = use_resource(move || {
        let controller = controller.clone();
        async move { controller.load_user().await }
    });

    let current_user = match &*user.read() {
        Some(Ok(user)) => user.clone(),
        _ => None,
    };
    let is_operator = current_user
        .as_ref()
        .is_some_and(|user| user.access_level >= AccessLevel::Operator);

    rsx! {
        Page {
            h2 { class: "text-2xl", "Dashboard" }
            if let Some(user) = &current_user {
                p {
                    class: "text-sm opacity-70",
                    "Logged in as {user.username} ({user.access_level})"
                }
            }
            ServerList { servers: dashboard.servers.clone() }
            div {
                class: "grid gap-4 md:grid-cols-2",
                CreateServerPanel {}
                AccountPanel { user: current_user.clone() }
            }
            if is_operator {
                UserAdminPanel {}
            }
        }
    }
}
