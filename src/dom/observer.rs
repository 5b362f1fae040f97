//! IntersectionObserver wiring for scroll-driven section tracking.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::error::{NavError, NavResult};
use crate::nav::tracker;

/// Watches the content sections and reports, in observation order, each one
/// that enters the trigger band. Owns the JS callback; dropping the watcher
/// disconnects the observer.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// Observes the elements with the given ids. Ids with no matching
    /// element are skipped silently. `on_enter` receives the section id each
    /// time a section becomes intersecting.
    pub fn watch(
        section_ids: &[String],
        on_enter: impl FnMut(String) + 'static,
    ) -> NavResult<Self> {
        let mut on_enter = on_enter;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let id = entry.target().id();
                    if !id.is_empty() {
                        on_enter(id);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(tracker::ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(tracker::THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(NavError::js)?;

        let document = dom::document()?;
        for id in section_ids {
            if let Some(section) = document.get_element_by_id(id) {
                observer.observe(&section);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
