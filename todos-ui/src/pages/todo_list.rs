use dioxus::prelude::*;
use shared_http::api::UpdateTodoRequest;

use crate::api::ApiClient;
use crate::widgets::error_banner::ErrorBanner;
use crate::widgets::server_status::ServerStatus;
use crate::widgets::todo_form::TodoForm;
use crate::widgets::todo_item::TodoItem;

/// The whole list is re-fetched after every successful change
#[component]
pub fn TodoList() -> Element {
    let client = use_context::<ApiClient>();
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let list_client = client.clone();
    let mut todos = use_resource(move || {
        let client = list_client.clone();
        async move {
            match client.list_todos().await {
                Ok(todos) => todos,
                Err(err) => {
                    error.set(Some(err.message));
                    Vec::new()
                }
            }
        }
    });

    let update_client = client.clone();
    let on_update = EventHandler::new(move |(id, request): (String, UpdateTodoRequest)| {
        let client = update_client.clone();
        spawn(async move {
            match client.update_todo(&id, &request).await {
                Ok(_) => {
                    error.set(None);
                    todos.restart();
                }
                Err(err) => error.set(Some(err.message)),
            }
        });
    });

    let delete_client = client.clone();
    let on_delete = EventHandler::new(move |id: String| {
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_todo(&id).await {
                Ok(()) => {
                    error.set(None);
                    todos.restart();
                }
                Err(err) => error.set(Some(err.message)),
            }
        });
    });

    rsx! {
        div { class: "container",
            ServerStatus {}
            h1 { class: "mt-4", "Todo List" }

            if let Some(message) = error() {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            TodoForm {
                on_created: move |_| {
                    error.set(None);
                    todos.restart();
                },
                on_error: move |message: String| error.set(Some(message)),
            }

            ul { class: "list-group",
                match todos.read().as_ref() {
                    Some(items) => rsx! {
                        for todo in items.iter().cloned() {
                            TodoItem {
                                key: "{todo.id}",
                                todo: todo.clone(),
                                on_update,
                                on_delete,
                            }
                        }
                    },
                    None => rsx! {
                        li { class: "list-group-item text-muted", "Loading..." }
                    },
                }
            }
        }
    }
}
