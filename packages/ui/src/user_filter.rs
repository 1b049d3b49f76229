use dioxus::prelude::*;
use store::FilterType;

use crate::provider::use_user_store;

/// "All | Active | Inactive" selector. The current filter is not a link.
#[component]
pub fn UserFilter() -> Element {
    let store = use_user_store();
    let current = store.with(|s| s.filter_type.clone());

    let on_select = EventHandler::new({
        let store = store.clone();
        move |filter: FilterType| store.set_filter_type(filter)
    });

    rsx! {
        span {
            class: "user-filter",
            b { "Filter Users" }
            ":"
            for (index, filter) in FilterType::CHOICES.into_iter().enumerate() {
                FilterLink {
                    key: "{index}",
                    active: current == filter,
                    filter: filter.clone(),
                    on_select: on_select,
                }
            }
        }
    }
}

#[component]
fn FilterLink(filter: FilterType, active: bool, on_select: EventHandler<FilterType>) -> Element {
    let label = filter.label().to_string();

    if active {
        return rsx! {
            span { class: "user-filter-current", " | {label}" }
        };
    }

    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_select.call(filter.clone());
            },
            " | {label}"
        }
    }
}
