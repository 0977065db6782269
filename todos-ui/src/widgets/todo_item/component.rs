use dioxus::prelude::*;
use shared_http::api::{TodoResponse, UpdateTodoRequest};

#[component]
pub fn TodoItem(
    todo: TodoResponse,
    on_update: EventHandler<(String, UpdateTodoRequest)>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut is_editing = use_signal(|| false);
    let mut edited_title = use_signal(|| todo.title.clone());
    let mut edited_description = use_signal(|| todo.description.clone());

    let id = todo.id.clone();
    let completed = todo.completed;

    if is_editing() {
        let save_id = id.clone();
        return rsx! {
            li { class: "list-group-item",
                form {
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        on_update.call((
                            save_id.clone(),
                            UpdateTodoRequest {
                                title: edited_title(),
                                description: edited_description(),
                                completed,
                            },
                        ));
                        is_editing.set(false);
                    },
                    div { class: "form-group",
                        label { "Title" }
                        input {
                            class: "form-control",
                            r#type: "text",
                            value: "{edited_title}",
                            oninput: move |e: Event<FormData>| edited_title.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Description" }
                        input {
                            class: "form-control",
                            r#type: "text",
                            value: "{edited_description}",
                            oninput: move |e: Event<FormData>| edited_description.set(e.value()),
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| is_editing.set(false),
                        "Cancel"
                    }
                }
            }
        };
    }

    // Toggling keeps the stored title and description, not unsaved edits
    let toggle_id = id.clone();
    let toggle_title = todo.title.clone();
    let toggle_description = todo.description.clone();
    let delete_id = id.clone();
    let reset_title = todo.title.clone();
    let reset_description = todo.description.clone();
    let text_class = if completed { "text-muted" } else { "" };

    rsx! {
        li { class: "list-group-item",
            label { class: "form-check-inline",
                input {
                    r#type: "checkbox",
                    checked: completed,
                    onchange: move |_| {
                        on_update.call((
                            toggle_id.clone(),
                            UpdateTodoRequest {
                                title: toggle_title.clone(),
                                description: toggle_description.clone(),
                                completed: !completed,
                            },
                        ));
                    },
                }
                " Completed"
            }
            span { class: "{text_class}",
                strong { "{todo.title}" }
                " - {todo.description}"
            }
            button {
                class: "btn btn-danger btn-sm float-right",
                r#type: "button",
                onclick: move |_| on_delete.call(delete_id.clone()),
                "Delete"
            }
            button {
                class: "btn btn-primary btn-sm float-right mr-2",
                r#type: "button",
                onclick: move |_| {
                    edited_title.set(reset_title.clone());
                    edited_description.set(reset_description.clone());
                    is_editing.set(true);
                },
                "Edit"
            }
        }
    }
}
