use dioxus::prelude::*;
use store::{DraftField, ROLES};

use crate::provider::{use_user_store, AppStore};

/// Create/edit form bound to the store's edit buffer.
#[component]
pub fn UserForm() -> Element {
    let store = use_user_store();
    let draft = store.with(|s| s.editing_user.clone());
    let submit_label = draft.mode().label();

    let handle_submit = {
        let store = store.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let store = store.clone();
            spawn(async move {
                store.save_user().await;
            });
        }
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,

            label {
                "first: "
                input {
                    r#type: "text",
                    name: "first",
                    value: "{draft.first}",
                    oninput: edit_field(&store, DraftField::First),
                }
            }
            label {
                "last: "
                input {
                    r#type: "text",
                    name: "last",
                    value: "{draft.last}",
                    oninput: edit_field(&store, DraftField::Last),
                }
            }
            label {
                "email: "
                input {
                    r#type: "text",
                    name: "email",
                    value: "{draft.email}",
                    oninput: edit_field(&store, DraftField::Email),
                }
            }
            label {
                "role: "
                select {
                    name: "role",
                    value: "{draft.role}",
                    onchange: edit_field(&store, DraftField::Role),
                    for (value, text) in ROLES.iter() {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: draft.role == *value,
                            "{text}"
                        }
                    }
                }
            }
            input {
                r#type: "submit",
                value: "{submit_label}",
            }
        }
    }
}

fn edit_field(store: &AppStore, field: DraftField) -> impl FnMut(FormEvent) + 'static {
    let store = store.clone();
    move |evt: FormEvent| store.set_draft_field(field, evt.value())
}
