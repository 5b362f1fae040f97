use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::config::{self, AUTO_CLOSE_DELAY_MS, CLOSE_CONTROL_ID, TOGGLE_CONTROL_ID};
use crate::dom::{ripple, scroll, timers::TimerSlot, viewport};
use crate::nav::model::NavEntry;
use crate::nav::state::{ClickOutcome, NavState};

/// Shared handle to the navigation state plus the side effects the state
/// transitions imply (scroll lock, focus moves, deferred close). Components
/// receive it through context; the pure state lives in [`NavState`].
#[derive(Clone, Copy)]
pub struct NavHandle {
    state: Signal<NavState>,
    auto_close: Signal<TimerSlot>,
}

pub fn use_nav_state() -> NavHandle {
    let state = use_signal(|| NavState::new(config::default_menu()));
    let auto_close = use_signal(TimerSlot::new);

    NavHandle { state, auto_close }
}

impl NavHandle {
    pub fn is_open(&self) -> bool {
        self.state.read().open
    }

    pub fn is_active(&self, link_id: &str) -> bool {
        self.state.read().is_active(link_id)
    }

    pub fn is_expanded(&self, entry_id: &str) -> bool {
        self.state.read().is_expanded(entry_id)
    }

    /// Clone the entries out to avoid holding the state borrow while rendering.
    pub fn entries(&self) -> Vec<NavEntry> {
        self.state.read().menu.entries.clone()
    }

    /// Section ids the tracker observes. Peeked rather than read: the DOM
    /// wiring runs inside an effect and must not subscribe to state changes.
    pub fn section_anchors(&self) -> Vec<String> {
        self.state.peek().menu.section_anchors()
    }

    /// `(anchor, label)` for every in-page target, in menu order. The
    /// content area renders one section per pair.
    pub fn sections(&self) -> Vec<(String, String)> {
        let state = self.state.read();
        let mut sections = Vec::new();
        for entry in &state.menu.entries {
            if let Some(fragment) = entry.link.anchor() {
                sections.push((fragment.to_string(), entry.link.label.clone()));
            }
            for link in &entry.submenu {
                if let Some(fragment) = link.anchor() {
                    sections.push((fragment.to_string(), link.label.clone()));
                }
            }
        }
        sections
    }

    pub fn toggle_panel(&mut self) {
        if self.is_open() {
            self.close_panel();
        } else {
            self.open_panel();
        }
    }

    /// Opens the panel: locks page scrolling and moves focus onto the close
    /// control so keyboard users land inside the panel.
    pub fn open_panel(&mut self) {
        self.auto_close.write().cancel();
        if !self.state.write().open() {
            return;
        }
        if let Err(err) = viewport::lock_body_scroll() {
            warn!("body scroll lock failed: {err}");
        }
        if let Err(err) = viewport::focus_element(CLOSE_CONTROL_ID) {
            warn!("focus move to close control failed: {err}");
        }
    }

    /// Closes the panel, undoing everything `open_panel` did and returning
    /// focus to the toggle control. A pending auto-close is superseded.
    pub fn close_panel(&mut self) {
        self.auto_close.write().cancel();
        if !self.state.write().close() {
            return;
        }
        if let Err(err) = viewport::unlock_body_scroll() {
            warn!("body scroll unlock failed: {err}");
        }
        if let Err(err) = viewport::focus_element(TOGGLE_CONTROL_ID) {
            warn!("focus move to toggle control failed: {err}");
        }
    }

    /// Resolves a link click and runs the matching effects: ripple and
    /// smooth scroll for anchors, plus the deferred close when the viewport
    /// is mobile-sized. Returns the outcome so the caller can decide whether
    /// to suppress the browser's default navigation.
    pub fn click_link(&mut self, link_id: &str, client_x: f64, client_y: f64) -> ClickOutcome {
        let outcome = self.state.write().click_link(link_id);
        if let ClickOutcome::Navigate { anchor } = &outcome {
            if let Err(err) = ripple::spawn(&config::link_dom_id(link_id), client_x, client_y) {
                warn!("ripple failed: {err}");
            }
            if let Err(err) = scroll::scroll_to_anchor(anchor) {
                warn!("scroll to '{anchor}' failed: {err}");
            }
            if config::is_mobile_width(viewport::viewport_width()) {
                let mut handle = *self;
                self.auto_close
                    .write()
                    .schedule(AUTO_CLOSE_DELAY_MS, move || handle.close_panel());
            }
        }
        outcome
    }

    /// Scroll-driven selection from the section observer.
    pub fn activate_section(&mut self, section_id: &str) {
        self.state.write().activate_section(section_id);
    }

    /// Marks the link matching the current location fragment active.
    pub fn select_for_location(&mut self) {
        let fragment = scroll::current_fragment();
        self.state.write().select_for_location(fragment.as_deref());
    }

    /// Debounced resize handler: leaving the mobile range closes the panel.
    pub fn handle_resize(&mut self) {
        let width = viewport::viewport_width();
        if self.state.write().viewport_resized(width) {
            if let Err(err) = viewport::unlock_body_scroll() {
                warn!("body scroll unlock failed: {err}");
            }
            if let Err(err) = viewport::focus_element(TOGGLE_CONTROL_ID) {
                warn!("focus move to toggle control failed: {err}");
            }
        }
    }
}
