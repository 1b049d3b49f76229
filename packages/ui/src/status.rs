//! Read-only summaries of the store: fetch status and the active counter.

use dioxus::prelude::*;

use crate::provider::use_user_store;

/// The raw status of the most recent list fetch.
#[component]
pub fn FetchIndicator() -> Element {
    let store = use_user_store();
    let fetch_state = store.with(|s| s.fetch_state);

    rsx! {
        div {
            class: "fetch-state fetch-state--{fetch_state}",
            "Fetch State : {fetch_state}"
        }
    }
}

/// "N of M active", counted over the whole list regardless of filter.
#[component]
pub fn UserCounter() -> Element {
    let store = use_user_store();
    let (active, total) = store.with(|s| (s.active_count(), s.users.len()));

    rsx! {
        span { class: "user-counter", "{active} of {total} active" }
    }
}
