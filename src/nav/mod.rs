//! Navigation core: menu data model, UI state machine and section tracking
//! policy. Everything in here is browser-free so it can be unit tested
//! without a document; the `dom` and `components` layers translate these
//! decisions into class names, scrolling and focus moves.

pub mod model;
pub mod state;
pub mod tracker;

pub use model::{LinkTarget, NavEntry, NavLink, NavMenu};
pub use state::{ClickOutcome, NavState};
