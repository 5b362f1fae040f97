//! Error types for the browser glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by the DOM glue layer. A missing scroll target or an
/// unmatched hash is deliberately NOT an error (those lookups no-op); these
/// variants cover the infrastructure the chrome assumes is present.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("browser window is unavailable")]
    WindowUnavailable,

    #[error("document is unavailable")]
    DocumentUnavailable,

    #[error("required element '{0}' not found in document")]
    ElementMissing(String),

    #[error("JS error: {0}")]
    Js(String),
}

impl NavError {
    /// Flattens an opaque `JsValue` thrown by a web API into a displayable error.
    pub fn js(value: JsValue) -> Self {
        NavError::Js(format!("{value:?}"))
    }
}

/// Result type for DOM glue operations.
pub type NavResult<T> = Result<T, NavError>;
