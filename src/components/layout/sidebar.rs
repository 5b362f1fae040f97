use dioxus::prelude::*;

use crate::components::navigation::MenuEntry;
use crate::config::{CLOSE_CONTROL_ID, SIDEBAR_ID};
use crate::hooks::NavHandle;

#[component]
pub fn Sidebar() -> Element {
    let mut nav = use_context::<NavHandle>();
    let open = nav.is_open();
    // Clone data to avoid borrowing issues
    let entries = nav.entries();

    rsx! {
        aside {
            id: SIDEBAR_ID,
            class: if open { "sidebar active" } else { "sidebar" },

            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    span { "NK" }
                }
                button {
                    id: CLOSE_CONTROL_ID,
                    class: "close-sidebar",
                    aria_label: "Close navigation",
                    onclick: move |_| nav.close_panel(),
                    "×"
                }
            }

            nav { class: "sidebar-menu",
                ul { class: "menu-list",
                    for (index, entry) in entries.into_iter().enumerate() {
                        MenuEntry { key: "{entry.id}", entry: entry.clone(), index }
                    }
                }
            }
        }
    }
}
