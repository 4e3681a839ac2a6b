use dioxus::prelude::*;

mod catalog;
mod components;
mod config;
mod gesture;
mod layout;
mod lyrics;
mod playlist;
mod session;
mod transport;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const HLS_JS: &str = "https://cdn.jsdelivr.net/npm/hls.js@1";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Kasi Player" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#111318" }

        document::Script { src: HLS_JS }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
