use dioxus::prelude::*;

use crate::config::{link_dom_id, ENTRY_STAGGER_MS};
use crate::hooks::NavHandle;
use crate::nav::model::{NavEntry, NavLink};
use crate::nav::state::ClickOutcome;

/// One top-level menu entry. Entries that own a submenu intercept the click
/// and expand instead of navigating; plain entries classify their href and
/// either scroll in-page or fall through to the browser.
#[component]
pub fn MenuEntry(entry: NavEntry, index: usize) -> Element {
    let nav = use_context::<NavHandle>();
    let expanded = nav.is_expanded(&entry.id);
    let active = nav.is_active(&entry.link.id);
    let has_submenu = entry.has_submenu();

    let link_id = entry.link.id.clone();
    let dom_id = link_dom_id(&entry.link.id);
    // Drives the staggered reveal while the panel opens.
    let delay_ms = index as u32 * ENTRY_STAGGER_MS;

    rsx! {
        li {
            class: if expanded { "menu-item expanded" } else { "menu-item" },
            style: "animation-delay: {delay_ms}ms",

            a {
                id: "{dom_id}",
                href: "{entry.link.href}",
                class: if active { "menu-link active" } else { "menu-link" },
                onclick: move |evt| handle_link_click(nav, evt, &link_id),

                span { class: "menu-icon", "{entry.icon}" }
                span { class: "menu-text", "{entry.link.label}" }
                if has_submenu {
                    span { class: "submenu-arrow", "▾" }
                }
            }

            if has_submenu {
                ul { class: "submenu",
                    for link in entry.submenu.iter() {
                        SubmenuLink { key: "{link.id}", link: link.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SubmenuLink(link: NavLink) -> Element {
    let nav = use_context::<NavHandle>();
    let active = nav.is_active(&link.id);

    let link_id = link.id.clone();
    let dom_id = link_dom_id(&link.id);

    rsx! {
        li {
            a {
                id: "{dom_id}",
                href: "{link.href}",
                class: if active { "submenu-link active" } else { "submenu-link" },
                onclick: move |evt| handle_link_click(nav, evt, &link_id),
                "{link.label}"
            }
        }
    }
}

/// Shared click delegation for both menu levels. Default navigation is
/// suppressed for everything the chrome handles itself; external links keep
/// the browser's behavior.
fn handle_link_click(mut nav: NavHandle, evt: Event<MouseData>, link_id: &str) {
    let point = evt.client_coordinates();
    match nav.click_link(link_id, point.x, point.y) {
        ClickOutcome::External | ClickOutcome::Unknown => {}
        ClickOutcome::SubmenuToggled { .. } | ClickOutcome::Navigate { .. } => {
            evt.prevent_default();
        }
    }
}
