//! Transient click ripple. Purely cosmetic: a span anchored at the click
//! point that scales out and removes itself.

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::RIPPLE_LIFETIME_MS;
use crate::dom;
use crate::error::{NavError, NavResult};

const KEYFRAMES_STYLE_ID: &str = "nav-ripple-keyframes";

/// Installs the `@keyframes ripple` rule the ripple nodes animate with. The
/// only styling the chrome provisions for itself; everything else belongs to
/// the host stylesheet. Idempotent.
pub fn inject_keyframes() -> NavResult<()> {
    let document = dom::document()?;
    if document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style").map_err(NavError::js)?;
    style.set_id(KEYFRAMES_STYLE_ID);
    style.set_text_content(Some(
        "@keyframes ripple { to { transform: scale(2); opacity: 0; } }",
    ));
    document
        .head()
        .ok_or_else(|| NavError::ElementMissing("head".into()))?
        .append_child(&style)
        .map_err(NavError::js)?;
    Ok(())
}

/// Spawns a ripple inside the element with `parent_id`, centred on the click
/// coordinates. The node removes itself once the animation has played out;
/// each ripple owns its own removal, so overlapping clicks simply overlap.
pub fn spawn(parent_id: &str, client_x: f64, client_y: f64) -> NavResult<()> {
    let document = dom::document()?;
    let Some(parent) = document.get_element_by_id(parent_id) else {
        return Ok(());
    };

    let rect = parent.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = client_x - rect.left() - size / 2.0;
    let y = client_y - rect.top() - size / 2.0;

    let ripple = document.create_element("span").map_err(NavError::js)?;
    ripple.set_class_name("ripple");
    ripple
        .set_attribute(
            "style",
            &format!(
                "position: absolute; width: {size}px; height: {size}px; \
                 left: {x}px; top: {y}px; background: rgba(218, 165, 32, 0.3); \
                 border-radius: 50%; transform: scale(0); \
                 animation: ripple 0.6s ease-out; pointer-events: none;"
            ),
        )
        .map_err(NavError::js)?;

    // The ripple is positioned against the link, which must clip it.
    if let Some(parent) = parent.dyn_ref::<HtmlElement>() {
        let style = parent.style();
        let _ = style.set_property("position", "relative");
        let _ = style.set_property("overflow", "hidden");
    }

    parent.append_child(&ripple).map_err(NavError::js)?;
    Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    Ok(())
}
