use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "alert alert-danger", role: "alert",
            span { "{message}" }
            button {
                class: "alert-close",
                r#type: "button",
                aria_label: "Close",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
