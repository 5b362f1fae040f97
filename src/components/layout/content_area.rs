use dioxus::prelude::*;

use crate::config::MAIN_CONTENT_ID;
use crate::hooks::NavHandle;

/// The page body: one section per navigable anchor, shifted aside while the
/// panel is open. Section ids are what the observer watches.
#[component]
pub fn ContentArea() -> Element {
    let nav = use_context::<NavHandle>();
    let open = nav.is_open();
    let sections = nav.sections();

    rsx! {
        main {
            id: MAIN_CONTENT_ID,
            class: if open { "main-content sidebar-open" } else { "main-content" },

            header { class: "content-header",
                h2 { "Navkit" }
            }

            for (anchor, title) in sections {
                section {
                    key: "{anchor}",
                    id: "{anchor}",
                    class: "content-section",

                    h2 { "{title}" }
                    p { "Scroll or use the menu to jump between sections. This one is \"{title}\"." }
                }
            }
        }
    }
}
