use dioxus::prelude::*;

use crate::api::ApiClient;

#[component]
pub fn ServerStatus() -> Element {
    let client = use_context::<ApiClient>();
    let health_resource = use_resource(move || {
        let client = client.clone();
        async move {
            client
                .check_health()
                .await
                .map(|health| health.message)
                .unwrap_or_else(|_| "Down".to_string())
        }
    });

    rsx! {
        div { class: "server-status",
            match health_resource.read().as_ref() {
                Some(status) => {
                    let dot_class = if status == "Down" {
                        "status-dot error"
                    } else {
                        "status-dot healthy"
                    };
                    rsx! {
                        span { class: "{dot_class}" }
                        span { "Server Status: {status}" }
                    }
                }
                None => rsx! {
                    span { class: "status-dot loading" }
                    span { "Server Status: Checking..." }
                },
            }
        }
    }
}
