use dioxus::prelude::*;
use shared_http::api::CreateTodoRequest;

use crate::api::ApiClient;

/// Creates a todo; the form is cleared only once the server accepts it
#[component]
pub fn TodoForm(on_created: EventHandler<()>, on_error: EventHandler<String>) -> Element {
    let client = use_context::<ApiClient>();
    let mut title: Signal<String> = use_signal(|| "".to_string());
    let mut description: Signal<String> = use_signal(|| "".to_string());

    rsx! {
        form {
            class: "todo-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                let client = client.clone();
                let request = CreateTodoRequest {
                    title: title(),
                    description: description(),
                };

                spawn(async move {
                    match client.create_todo(&request).await {
                        Ok(todo) => {
                            info!("Created todo {}", todo.id);
                            title.set(String::new());
                            description.set(String::new());
                            on_created.call(());
                        }
                        Err(err) => on_error.call(err.message),
                    }
                });
            },
            div { class: "form-group",
                label { r#for: "title", "Title" }
                input {
                    id: "title",
                    class: "form-control",
                    r#type: "text",
                    required: true,
                    value: "{title}",
                    oninput: move |e: Event<FormData>| title.set(e.value()),
                }
            }
            div { class: "form-group",
                label { r#for: "description", "Description" }
                input {
                    id: "description",
                    class: "form-control",
                    r#type: "text",
                    required: true,
                    value: "{description}",
                    oninput: move |e: Event<FormData>| description.set(e.value()),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Add Todo" }
        }
    }
}
