use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowsRotate, FaPlay, FaRotateRight, FaStop},
    Icon,
};

use crate::{
    client::{
        api::server::ServerAction, app::WebController, component::alert::blocking_alert,
        model::screen::{Screen, ViewState},
    },
    model::server::ServerInfo,
};

#[component]
pub fn ServerList(servers: Vec<ServerInfo>) -> Element {
    rsx! {
        div {
            id: "server-list",
            class: "flex flex-col gap-4",
            if servers.is_empty() {
                p { class: "opacity-70", "No servers yet" }
            }
            for server in servers.iter() {
                ServerCard { key: "{server.name}", server: server.clone() }
            }
        }
    }
}

#[component]
fn ServerCard(server: ServerInfo) -> Element {
    let controller = use_context::<WebController>();
    let mut view = use_context::<Signal<ViewState>>();
    let mut pending = use_signal(|| false);

    let name = server.name.clone();
    let action_controller = controller.clone();
    let run_action = use_callback(move |action: ServerAction| {
        let controller = action_controller.clone();
        let name = name.clone();
        pending.set(true);
        spawn(async move {
            let result = controller.server_action(action, &name).await;
            pending.set(false);
            match result {
                Ok(screen) => view.write().show(screen),
                Err(err) => blocking_alert(&err.to_string()),
            }
        });
    });

    let name = server.name.clone();
    let refresh = use_callback(move |_: ()| {
        let controller = controller.clone();
        let name = name.clone();
        let dashboard = match view.read().screen() {
            Some(Screen::Dashboard(dashboard)) => dashboard.clone(),
            _ => return,
        };
        pending.set(true);
        spawn(async move {
            let result = controller.refresh_server(&dashboard, &name).await;
            pending.set(false);
            match result {
                Ok(screen) => view.write().show(screen),
                Err(err) => blocking_alert(&err.to_string()),
            }
        });
    });

    let modloader_version = match server.modloader_version.as_str() {
        "" => "-",
        version => version,
    };
    let started_at = server.started_at.as_deref().unwrap_or("Not started");
    let (status, badge) = if server.is_running() {
        ("Running", "badge badge-success")
    } else {
        ("Stopped", "badge badge-ghost")
    };

    rsx! {
        div {
            class: "server-item card bg-base-200 p-4",
            div {
                class: "flex justify-between items-center",
                h3 { class: "text-lg font-bold", "{server.name}" }
                span { class: badge, "{status}" }
            }
            p { "Type: {server.server_type}" }
            p { "Path: {server.path}" }
            p { "Autostart: {server.autostart}" }
            p { "MC Version: {server.mc_version}" }
            p { "Modloader Version: {modloader_version}" }
            p { "RAM: {server.ram} MB" }
            p { "Started At: {started_at}" }
            div {
                class: "flex gap-2 mt-2",
                for action in ServerAction::ALL {
                    button {
                        key: "{action.label()}",
                        class: "btn btn-sm btn-outline flex gap-2 items-center",
                        disabled: pending(),
                        onclick: move |_| run_action.call(action),
                        {action_icon(action)}
                        "{action.label()}"
                    }
                }
                button {
                    class: "btn btn-sm btn-ghost flex gap-2 items-center",
                    disabled: pending(),
                    onclick: move |_| refresh.call(()),
                    Icon { width: 12, height: 12, icon: FaArrowsRotate }
                    "Refresh"
                }
            }
        }
    }
}

fn action_icon(action: ServerAction) -> Element {
    match action {
        ServerAction::Start => rsx! { Icon { width: 12, height: 12, icon: FaPlay } },
        ServerAction::Stop => rsx! { Icon { width: 12, height: 12, icon: FaStop } },
        ServerAction::Restart => rsx! { Icon { width: 12, height: 12, icon: FaRotateRight } },
    }
}
