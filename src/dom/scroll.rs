//! Smooth scrolling to anchor targets, with hash-change tracking.

use dioxus::logger::tracing::warn;
use gloo::events::EventListener;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::{HEADER_OFFSET_PX, INITIAL_SCROLL_DELAY_MS};
use crate::dom;
use crate::dom::timers::TimerSlot;
use crate::error::NavResult;

/// Scrolls the element with id `anchor` into view, leaving the fixed-header
/// allowance above it. A missing element is a no-op, not an error.
pub fn scroll_to_anchor(anchor: &str) -> NavResult<()> {
    let document = dom::document()?;
    let Some(target) = document.get_element_by_id(anchor) else {
        return Ok(());
    };

    let window = dom::window()?;
    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + page_offset - HEADER_OFFSET_PX;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// The location fragment without its leading `#`, if one is present.
pub fn current_fragment() -> Option<String> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let fragment = hash.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    Some(fragment.to_string())
}

/// Follows the document fragment: every hash change scrolls to its target,
/// and a fragment already present at startup gets a short-delayed scroll so
/// layout can settle first.
pub struct HashWatcher {
    _listener: EventListener,
    _initial: TimerSlot,
}

impl HashWatcher {
    pub fn attach() -> NavResult<Self> {
        let window = dom::window()?;
        let listener = EventListener::new(&window, "hashchange", move |_| {
            if let Some(fragment) = current_fragment() {
                if let Err(err) = scroll_to_anchor(&fragment) {
                    warn!("hash scroll failed: {err}");
                }
            }
        });

        let mut initial = TimerSlot::new();
        if let Some(fragment) = current_fragment() {
            initial.schedule(INITIAL_SCROLL_DELAY_MS, move || {
                if let Err(err) = scroll_to_anchor(&fragment) {
                    warn!("initial scroll failed: {err}");
                }
            });
        }

        Ok(Self {
            _listener: listener,
            _initial: initial,
        })
    }
}
