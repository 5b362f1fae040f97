//! Browser glue: everything that touches web-sys lives under here.

pub mod observer;
pub mod ripple;
pub mod scroll;
pub mod timers;
pub mod viewport;

use crate::error::{NavError, NavResult};

pub fn window() -> NavResult<web_sys::Window> {
    web_sys::window().ok_or(NavError::WindowUnavailable)
}

pub fn document() -> NavResult<web_sys::Document> {
    window()?.document().ok_or(NavError::DocumentUnavailable)
}
