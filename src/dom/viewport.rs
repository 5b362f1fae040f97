//! Viewport and focus helpers shared by the panel's open/close effects.

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::BODY_FADE_IN_DELAY_MS;
use crate::dom;
use crate::error::{NavError, NavResult};

/// Current viewport width in CSS pixels, 0.0 when unavailable.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn body() -> NavResult<HtmlElement> {
    dom::document()?
        .body()
        .ok_or_else(|| NavError::ElementMissing("body".into()))
}

/// Stops the page behind the open panel from scrolling.
pub fn lock_body_scroll() -> NavResult<()> {
    body()?
        .style()
        .set_property("overflow", "hidden")
        .map_err(NavError::js)
}

pub fn unlock_body_scroll() -> NavResult<()> {
    body()?
        .style()
        .remove_property("overflow")
        .map(|_| ())
        .map_err(NavError::js)
}

/// Moves input focus to the element with the given id. The panel's open and
/// close paths use this so focus always lands on an interactive control.
pub fn focus_element(id: &str) -> NavResult<()> {
    let element = dom::document()?
        .get_element_by_id(id)
        .ok_or_else(|| NavError::ElementMissing(id.into()))?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| NavError::ElementMissing(id.into()))?
        .focus()
        .map_err(NavError::js)
}

/// Fades the page in shortly after mount.
pub fn fade_in_body() -> NavResult<()> {
    let style = body()?.style();
    style.set_property("opacity", "0").map_err(NavError::js)?;
    Timeout::new(BODY_FADE_IN_DELAY_MS, move || {
        let _ = style.set_property("transition", "opacity 0.5s ease");
        let _ = style.set_property("opacity", "1");
    })
    .forget();
    Ok(())
}
