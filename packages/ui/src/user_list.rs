use dioxus::prelude::*;
use store::{User, UserId};

use crate::provider::use_user_store;

/// Table of the users matching the current filter.
#[component]
pub fn UserList() -> Element {
    let store = use_user_store();
    let rows: Vec<(String, User)> = store.with(|s| {
        s.filtered()
            .enumerate()
            .map(|(index, user)| (row_key(index, user), user.clone()))
            .collect()
    });

    let on_toggle = EventHandler::new({
        let store = store.clone();
        move |id: UserId| store.toggle(&id)
    });
    let on_edit = EventHandler::new({
        let store = store.clone();
        move |id: UserId| store.set_editing_user(&id)
    });

    rsx! {
        table {
            class: "user-list",
            thead {
                tr {
                    th { "First Name" }
                    th { "Last Name" }
                    th { "Email Id" }
                    th { "Role" }
                    th { "Active" }
                    th {}
                }
            }
            tbody {
                for (key, user) in rows {
                    UserRow {
                        key: "{key}",
                        user: user,
                        on_toggle: on_toggle,
                        on_edit: on_edit,
                    }
                }
            }
        }
    }
}

fn row_key(index: usize, user: &User) -> String {
    match &user.id {
        Some(id) => id.to_string(),
        None => format!("unsaved-{index}"),
    }
}

/// One user: read-only fields, an active checkbox and an edit link.
#[component]
pub fn UserRow(user: User, on_toggle: EventHandler<UserId>, on_edit: EventHandler<UserId>) -> Element {
    let toggle_id = user.id.clone();
    let edit_id = user.id.clone();

    rsx! {
        tr {
            td { "{user.first}" }
            td { "{user.last}" }
            td { "{user.email}" }
            td { "{user.role}" }
            td {
                input {
                    r#type: "checkbox",
                    name: "actived",
                    checked: user.actived,
                    onclick: move |_| {
                        if let Some(id) = &toggle_id {
                            on_toggle.call(id.clone());
                        }
                    },
                }
            }
            td {
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        if let Some(id) = &edit_id {
                            on_edit.call(id.clone());
                        }
                    },
                    "Edit"
                }
            }
        }
    }
}
