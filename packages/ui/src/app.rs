use dioxus::prelude::*;
use store::ClientConfig;

use crate::{FetchIndicator, JsonView, UserCounter, UserFilter, UserForm, UserList, UserStoreProvider};

const USERS_CSS: Asset = asset!("/assets/users.css");

/// The whole user management page.
#[component]
pub fn UserApp(config: ClientConfig) -> Element {
    rsx! {
        document::Stylesheet { href: USERS_CSS }

        UserStoreProvider {
            config: config,
            div {
                class: "user-app",
                UserForm {}
                hr {}
                UserList {}
                hr {}
                FetchIndicator {}
                UserCounter {}
                hr {}
                UserFilter {}
                JsonView {}
            }
        }
    }
}
