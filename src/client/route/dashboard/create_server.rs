use dioxus::prelude::*;

use crate::client::{
    app::WebController,
    component::ErrorMessage,
    controller::{form::CreateServerForm, ViewError},
    model::screen::ViewState,
};

const SERVER_TYPES: [&str; 2] = ["vanilla", "forge"];

/// Options from a loaded list, empty while loading or after a failure.
fn options(resource: &Resource<Result<Vec<String>, ViewError>>) -> Vec<String> {
    resource
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .cloned()
        .unwrap_or_default()
}

fn load_error(resource: &Resource<Result<Vec<String>, ViewError>>) -> Option<String> {
    resource
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().err())
        .map(ViewError::to_string)
}

#[component]
pub fn CreateServerPanel() -> Element {
    let controller = use_context::<WebController>();
    let mut view = use_context::<Signal<ViewState>>();
    let mut form = use_signal(CreateServerForm::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mc_versions = {
        let controller = controller.clone();
        use_resource(move || {
            let controller = controller.clone();
            async move { controller.load_mc_versions().await }
        })
    };
    let server_dirs = {
        let controller = controller.clone();
        use_resource(move || {
            let controller = controller.clone();
            async move { controller.load_server_dirs().await }
        })
    };

    // Only refetch Forge builds when the type or Minecraft version changes
    let forge_for = use_memo(move || {
        let fields = form.read();
        (fields.server_type == "forge" && !fields.mc_version.is_empty())
            .then(|| fields.mc_version.clone())
    });
    let forge_versions = {
        let controller = controller.clone();
        use_resource(move || {
            let controller = controller.clone();
            let mc_version = forge_for();
            async move {
                match mc_version {
                    Some(mc_version) => controller.load_forge_versions(&mc_version).await,
                    None => Ok(Vec::new()),
                }
            }
        })
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let controller = controller.clone();
        let fields = form();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = controller.create_server(&fields).await;
            submitting.set(false);
            match result {
                Ok(screen) => {
                    form.set(CreateServerForm::default());
                    view.write().show(screen);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let is_forge = form.read().server_type == "forge";
    let load_errors: Vec<String> = [&mc_versions, &server_dirs, &forge_versions]
        .into_iter()
        .filter_map(load_error)
        .collect();

    rsx! {
        form {
            class: "card bg-base-200 p-4 flex flex-col gap-2",
            onsubmit: on_submit,
            h3 { class: "text-lg font-bold", "Create Server" }
            input {
                r#type: "text",
                class: "input input-bordered",
                placeholder: "Name",
                value: "{form.read().name}",
                oninput: move |e| form.write().name = e.value(),
            }
            select {
                class: "select select-bordered",
                value: "{form.read().server_type}",
                onchange: move |e| form.write().server_type = e.value(),
                for server_type in SERVER_TYPES {
                    option { value: server_type, "{server_type}" }
                }
            }
            input {
                r#type: "text",
                class: "input input-bordered",
                placeholder: "Path",
                list: "server-dirs",
                value: "{form.read().path}",
                oninput: move |e| form.write().path = e.value(),
            }
            datalist {
                id: "server-dirs",
                for dir in options(&server_dirs) {
                    option { value: "{dir}" }
                }
            }
            select {
                class: "select select-bordered",
                value: "{form.read().mc_version}",
                onchange: move |e| form.write().mc_version = e.value(),
                option { value: "", disabled: true, "Minecraft version" }
                for version in options(&mc_versions) {
                    option { value: "{version}", "{version}" }
                }
            }
            if !is_forge {
                input {
                    r#type: "text",
                    class: "input input-bordered",
                    placeholder: "Modloader version",
                    value: "{form.read().modloader_version}",
                    oninput: move |e| form.write().modloader_version = e.value(),
                }
            }
            if is_forge {
                select {
                    class: "select select-bordered",
                    value: "{form.read().modloader_version}",
                    onchange: move |e| form.write().modloader_version = e.value(),
                    option { value: "", disabled: true, "Forge version" }
                    for version in options(&forge_versions) {
                        option { value: "{version}", "{version}" }
                    }
                }
            }
            input {
                r#type: "number",
                class: "input input-bordered",
                placeholder: "RAM (MB)",
                min: "1",
                value: "{form.read().ram}",
                oninput: move |e| form.write().ram = e.value(),
            }
            label {
                class: "flex gap-2 items-center",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: form.read().autostart,
                    onchange: move |e| form.write().autostart = e.checked(),
                }
                "Autostart"
            }
            for message in load_errors {
                ErrorMessage { message }
            }
            if let Some(err) = error() {
                ErrorMessage { message: err }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: submitting(),
                if submitting() {
                    span { class: "loading loading-spinner loading-sm mr-2" }
                }
                "Create"
            }
        }
    }
}
