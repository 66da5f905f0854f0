use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    app::WebController,
    component::{alert::blocking_alert, Page},
    controller::form::RegisterForm,
    model::screen::{Screen, ViewState},
};

#[component]
pub fn Register() -> Element {
    let controller = use_context::<WebController>();
    let mut view = use_context::<Signal<ViewState>>();
    let mut form = use_signal(RegisterForm::default);
    let mut submitting = use_signal(|| false);

    // Password confirmation is checked by the controller before any request
    let on_register = move |_: MouseEvent| {
        let controller = controller.clone();
        let fields = form();
        submitting.set(true);
        spawn(async move {
            let result = controller.register(&fields).await;
            submitting.set(false);
            match result {
                Ok(screen) => view.write().show(screen),
                Err(err) => {
                    tracing::warn!("{}", err);
                    blocking_alert(&err.to_string());
                }
            }
        });
    };

    rsx! {
        Page {
            class: "items-center max-w-sm mx-auto",
            h2 { class: "text-2xl", "Register" }
            input {
                r#type: "text",
                id: "reg_username",
                class: "input input-bordered w-full",
                placeholder: "Username",
                value: "{form.read().username}",
                oninput: move |e| form.write().username = e.value(),
            }
            input {
                r#type: "password",
                id: "reg_password",
                class: "input input-bordered w-full",
                placeholder: "Password",
                value: "{form.read().password}",
                oninput: move |e| form.write().password = e.value(),
            }
            input {
                r#type: "password",
                id: "reg_confirm_password",
                class: "input input-bordered w-full",
                placeholder: "Confirm Password",
                value: "{form.read().confirm_password}",
                oninput: move |e| form.write().confirm_password = e.value(),
            }
            label {
                class: "flex gap-2 items-center",
                input {
                    r#type: "checkbox",
                    id: "reg_rememberMe",
                    class: "checkbox",
                    checked: form.read().remember,
                    onchange: move |e| form.write().remember = e.checked(),
                }
                "Remember Me"
            }
            button {
                id: "registerSubmitBtn",
                class: "btn btn-primary w-full",
                disabled: submitting(),
                onclick: on_register,
                if submitting() {
                    span { class: "loading loading-spinner loading-sm mr-2" }
                }
                "Register"
            }
            button {
                id: "backToLoginBtn",
                class: "btn btn-link",
                onclick: move |_| view.write().show(Screen::Login),
                "Back to Login"
            }
        }
    }
}
