use dioxus::prelude::*;

use crate::{
    client::{
        app::WebController,
        component::{alert::blocking_alert, ConfirmationModal, ErrorMessage},
        controller::form::PasswordForm,
        model::screen::ViewState,
    },
    model::user::{User, TIMESTAMP_FORMAT},
};

#[component]
pub fn AccountPanel(user: Option<User>) -> Element {
    let controller = use_context::<WebController>();
    let mut view = use_context::<Signal<ViewState>>();
    let mut form = use_signal(PasswordForm::default);
    let mut status = use_signal(|| None::<Result<String, String>>);
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let on_change_password = {
        let controller = controller.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            let controller = controller.clone();
            let fields = form();
            spawn(async move {
                match controller.change_password(&fields).await {
                    Ok(()) => {
                        form.set(PasswordForm::default());
                        status.set(Some(Ok("Password changed".to_string())));
                    }
                    Err(err) => status.set(Some(Err(err.to_string()))),
                }
            });
        }
    };

    let on_delete = move |_| {
        let controller = controller.clone();
        deleting.set(true);
        spawn(async move {
            let result = controller.delete_account().await;
            deleting.set(false);
            show_delete.set(false);
            match result {
                Ok(screen) => view.write().show(screen),
                Err(err) => blocking_alert(&err.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "card bg-base-200 p-4 flex flex-col gap-2",
            h3 { class: "text-lg font-bold", "Account" }
            if let Some(user) = &user {
                p { "Username: {user.username}" }
                p { "Access level: {user.access_level}" }
                p {
                    "Registered: "
                    {user.registered_at.format(TIMESTAMP_FORMAT).to_string()}
                }
                p {
                    "Last login: "
                    {user.last_login.format(TIMESTAMP_FORMAT).to_string()}
                }
            }
            form {
                class: "flex flex-col gap-2",
                onsubmit: on_change_password,
                input {
                    r#type: "password",
                    class: "input input-bordered",
                    placeholder: "New password",
                    value: "{form.read().password}",
                    oninput: move |e| form.write().password = e.value(),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered",
                    placeholder: "Confirm new password",
                    value: "{form.read().confirm_password}",
                    oninput: move |e| form.write().confirm_password = e.value(),
                }
                match status() {
                    Some(Ok(message)) => rsx! {
                        div { class: "alert alert-success mt-4", span { "{message}" } }
                    },
                    Some(Err(message)) => rsx! { ErrorMessage { message } },
                    None => rsx! {},
                }
                button { r#type: "submit", class: "btn", "Change password" }
            }
            button {
                class: "btn btn-error btn-outline",
                onclick: move |_| show_delete.set(true),
                "Delete account"
            }
            ConfirmationModal {
                show: show_delete,
                title: "Delete account".to_string(),
                message: "This permanently deletes your account and logs you out.".to_string(),
                confirm_text: "Delete".to_string(),
                confirm_class: "btn-error".to_string(),
                is_processing: deleting(),
                on_confirm: on_delete,
            }
        }
    }
}
