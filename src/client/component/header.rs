use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaRightFromBracket, Icon};

use crate::client::{app::WebController, constant::SITE_NAME, model::screen::ViewState};

/// Title bar with the logout button, only displayed on the dashboard.
#[component]
pub fn Header(visible: bool) -> Element {
    let controller = use_context::<WebController>();
    let mut view = use_context::<Signal<ViewState>>();

    let on_logout = move |_: MouseEvent| {
        let controller = controller.clone();
        spawn(async move {
            let screen = controller.logout().await;
            view.write().show(screen);
        });
    };

    let display = if visible { "block" } else { "none" };

    rsx!(div {
        id: "header",
        style: "display: {display}",
        class: "w-full py-2 px-4 bg-base-200",
        div {
            class: "flex justify-between items-center gap-4",
            h1 {
                class: "md:text-xl text-wrap",
                {SITE_NAME}
            }
            button {
                id: "logoutBtn",
                class: "btn btn-outline flex gap-2 items-center",
                onclick: on_logout,
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaRightFromBracket
                }
                p {
                    "Logout"
                }
            }
        }
    })
}
