use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::config::{OVERLAY_ID, RESIZE_DEBOUNCE_MS, TOGGLE_CONTROL_ID};
use crate::dom;
use crate::dom::observer::SectionObserver;
use crate::dom::ripple;
use crate::dom::scroll::HashWatcher;
use crate::dom::timers::Debounce;
use crate::dom::viewport;
use crate::error::NavResult;
use crate::hooks::{use_nav_state, NavHandle};

/// The chrome shell: toggle control, sidebar, dimming overlay and content.
/// Also the one place where the document-level wiring (keyboard shortcuts,
/// debounced resize, hash watching, section observation) gets attached.
#[component]
pub fn AppLayout() -> Element {
    let mut nav = use_nav_state();
    use_context_provider(|| nav);

    let mut wiring = use_signal(|| None::<DomWiring>);
    use_effect(move || match DomWiring::attach(nav) {
        Ok(attached) => wiring.set(Some(attached)),
        Err(err) => warn!("navigation wiring failed: {err}"),
    });

    let open = nav.is_open();

    rsx! {
        button {
            id: TOGGLE_CONTROL_ID,
            class: if open { "sidebar-toggle active" } else { "sidebar-toggle" },
            aria_label: "Toggle navigation",
            onclick: move |_| nav.toggle_panel(),
            span { class: "hamburger" }
            span { class: "hamburger" }
            span { class: "hamburger" }
        }

        crate::components::layout::Sidebar {}

        div {
            id: OVERLAY_ID,
            class: if open { "sidebar-overlay active" } else { "sidebar-overlay" },
            onclick: move |_| nav.close_panel(),
        }

        crate::components::layout::ContentArea {}
    }
}

/// Listener and observer handles for the page-level behaviors. Dropping the
/// wiring (component unmount) detaches everything.
struct DomWiring {
    _keydown: EventListener,
    _resize: EventListener,
    _hash: HashWatcher,
    _sections: SectionObserver,
}

impl DomWiring {
    fn attach(mut nav: NavHandle) -> NavResult<Self> {
        ripple::inject_keyframes()?;
        viewport::fade_in_body()?;
        nav.select_for_location();

        let document = dom::document()?;
        let keydown = EventListener::new_with_options(
            &document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if key_event.key() == "Escape" && nav.is_open() {
                    nav.close_panel();
                }
                // Ctrl/Cmd + B toggles the panel, overriding the browser's
                // own binding for that combination.
                if (key_event.ctrl_key() || key_event.meta_key()) && key_event.key() == "b" {
                    key_event.prevent_default();
                    nav.toggle_panel();
                }
            },
        );

        let window = dom::window()?;
        let mut debounce = Debounce::new(RESIZE_DEBOUNCE_MS);
        let resize = EventListener::new(&window, "resize", move |_| {
            debounce.trigger(move || nav.handle_resize());
        });

        let hash = HashWatcher::attach()?;

        let anchors = nav.section_anchors();
        let sections = SectionObserver::watch(&anchors, move |section_id| {
            nav.activate_section(&section_id);
        })?;

        Ok(Self {
            _keydown: keydown,
            _resize: resize,
            _hash: hash,
            _sections: sections,
        })
    }
}
