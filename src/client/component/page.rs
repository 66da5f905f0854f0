use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "flex flex-col gap-4 {class}",
            {children}
        }
    )
}

/// Error line shown under a form.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx!(
        div {
            class: "alert alert-error mt-4",
            span { "{message}" }
        }
    )
}
