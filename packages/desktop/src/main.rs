use dioxus::prelude::*;

use ui::UserApp;

mod config;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load_default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        UserApp { config: config }
    }
}
