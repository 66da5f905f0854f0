use std::str::FromStr;

use dioxus::prelude::*;

use crate::{
    client::{app::WebController, component::ErrorMessage},
    model::user::{AccessLevel, User, TIMESTAMP_FORMAT},
};

/// Operator tools: look a user up, change their access level, reset their password.
#[component]
pub fn UserAdminPanel() -> Element {
    let controller = use_context::<WebController>();
    let mut username = use_signal(String::new);
    let mut found = use_signal(|| None::<User>);
    let mut level = use_signal(|| AccessLevel::User);
    let mut new_password = use_signal(String::new);
    let mut status = use_signal(|| None::<Result<String, String>>);

    let on_lookup = {
        let controller = controller.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            let controller = controller.clone();
            let name = username();
            spawn(async move {
                match controller.lookup_user(&name).await {
                    Ok(Some(user)) => {
                        level.set(user.access_level);
                        found.set(Some(user));
                        status.set(None);
                    }
                    Ok(None) => {
                        found.set(None);
                        status.set(Some(Err(format!("No user named {}", name))));
                    }
                    Err(err) => status.set(Some(Err(err.to_string()))),
                }
            });
        }
    };

    let on_set_level = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let Some(user) = found() else { return };
            let controller = controller.clone();
            let access_level = level();
            spawn(async move {
                match controller.set_user_access(&user.username, access_level).await {
                    Ok(()) => {
                        found.set(Some(User {
                            access_level,
                            ..user
                        }));
                        status.set(Some(Ok(format!("Access level set to {}", access_level))));
                    }
                    Err(err) => status.set(Some(Err(err.to_string()))),
                }
            });
        }
    };

    let on_reset_password = move |_: MouseEvent| {
        let Some(user) = found() else { return };
        let controller = controller.clone();
        let password = new_password();
        spawn(async move {
            match controller.reset_user_password(&user.username, &password).await {
                Ok(()) => {
                    new_password.set(String::new());
                    status.set(Some(Ok(format!("Password of {} reset", user.username))));
                }
                Err(err) => status.set(Some(Err(err.to_string()))),
            }
        });
    };

    rsx! {
        div {
            class: "card bg-base-200 p-4 flex flex-col gap-2",
            h3 { class: "text-lg font-bold", "User Administration" }
            form {
                class: "flex gap-2",
                onsubmit: on_lookup,
                input {
                    r#type: "text",
                    class: "input input-bordered grow",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                button { r#type: "submit", class: "btn", "Look up" }
            }
            if let Some(user) = found() {
                p {
                    "{user.username}: {user.access_level}, last login "
                    {user.last_login.format(TIMESTAMP_FORMAT).to_string()}
                }
                div {
                    class: "flex gap-2",
                    select {
                        class: "select select-bordered",
                        value: "{level().as_str()}",
                        onchange: move |e| {
                            if let Ok(parsed) = AccessLevel::from_str(&e.value()) {
                                level.set(parsed);
                            }
                        },
                        for option_level in AccessLevel::ALL {
                            option { value: option_level.as_str(), "{option_level}" }
                        }
                    }
                    button { class: "btn", onclick: on_set_level, "Set access level" }
                }
                div {
                    class: "flex gap-2",
                    input {
                        r#type: "password",
                        class: "input input-bordered grow",
                        placeholder: "New password",
                        value: "{new_password}",
                        oninput: move |e| new_password.set(e.value()),
                    }
                    button { class: "btn", onclick: on_reset_password, "Reset password" }
                }
            }
            match status() {
                Some(Ok(message)) => rsx! {
                    div { class: "alert alert-success mt-4", span { "{message}" } }
                },
                Some(Err(message)) => rsx! { ErrorMessage { message } },
                None => rsx! {},
            }
        }
    }
}
