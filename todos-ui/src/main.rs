use dioxus::prelude::*;

mod api;
mod config;
mod pages;
mod widgets;

use crate::api::ApiClient;
use crate::pages::TodoList;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        TodoList {}
    }
}
