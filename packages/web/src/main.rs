use dioxus::prelude::*;

use store::ClientConfig;
use ui::UserApp;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Build-time override for the users endpoint, e.g.
/// `ROSTER_API_URL=http://localhost:3000 dx serve --platform web`.
const API_URL_OVERRIDE: Option<&str> = option_env!("ROSTER_API_URL");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(web_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        UserApp { config: config }
    }
}

fn web_config() -> ClientConfig {
    match API_URL_OVERRIDE {
        Some(url) => {
            tracing::info!("Using ROSTER_API_URL override");
            ClientConfig::new(url)
        }
        None => ClientConfig::default(),
    }
}
