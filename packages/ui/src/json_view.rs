use dioxus::prelude::*;

use crate::provider::use_user_store;

/// Debug dump of the whole store as JSON, hidden until the box is ticked.
#[component]
pub fn JsonView() -> Element {
    let store = use_user_store();
    let mut show_json = use_signal(|| false);

    // Only subscribe to the store while the dump is visible
    let json = if show_json() {
        Some(store.with(|s| s.to_json()))
    } else {
        None
    };

    rsx! {
        div {
            class: "json-view",
            label {
                input {
                    r#type: "checkbox",
                    name: "showjson",
                    checked: show_json(),
                    onchange: move |_| {
                        let visible = show_json();
                        show_json.set(!visible);
                    },
                }
                " Show JSON"
            }
            if let Some(json) = json {
                pre { "{json}" }
            }
        }
    }
}
