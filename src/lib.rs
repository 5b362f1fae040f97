use dioxus::prelude::*;

// Module Declarations
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod nav;

use components::layout::AppLayout;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppLayout {}
    }
}
