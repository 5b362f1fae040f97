//! Tunables and the built-in menu definition.

use crate::nav::model::{NavEntry, NavLink, NavMenu};

/// Widest viewport (CSS pixels) at which the sidebar behaves as a mobile overlay.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Fixed-header allowance so a scroll target is not flush against the viewport top.
pub const HEADER_OFFSET_PX: f64 = 20.0;

/// Delay before the sidebar closes itself after an anchor click on a mobile
/// viewport, letting the scroll settle first.
pub const AUTO_CLOSE_DELAY_MS: u32 = 300;

/// Lifetime of a ripple node before it removes itself.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Per-entry delay step for the staggered menu reveal.
pub const ENTRY_STAGGER_MS: u32 = 100;

/// Delay before scrolling to the location fragment present at page load.
pub const INITIAL_SCROLL_DELAY_MS: u32 = 100;

/// Debounce window applied to window resize events.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Delay before the body fades in after mount.
pub const BODY_FADE_IN_DELAY_MS: u32 = 100;

/// Fragment selected when the location carries none.
pub const HOME_ANCHOR: &str = "home";

/// DOM ids of the fixed chrome elements.
pub const SIDEBAR_ID: &str = "sidebar";
pub const TOGGLE_CONTROL_ID: &str = "sidebar-toggle";
pub const CLOSE_CONTROL_ID: &str = "close-sidebar";
pub const OVERLAY_ID: &str = "sidebar-overlay";
pub const MAIN_CONTENT_ID: &str = "main-content";

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

/// DOM id of the anchor element rendered for a menu or submenu link.
pub fn link_dom_id(link_id: &str) -> String {
    format!("nav-link-{link_id}")
}

/// The built-in site menu. Entries with a submenu intercept clicks and expand
/// instead of navigating; the docs entry exercises the external-link path.
pub fn default_menu() -> NavMenu {
    NavMenu {
        entries: vec![
            NavEntry::new("home", NavLink::new("home", "Home", "#home"), "⌂"),
            NavEntry::new("about", NavLink::new("about", "About", "#about"), "◉"),
            NavEntry::new("services", NavLink::new("services", "Services", "#services"), "⚙")
                .with_submenu(vec![
                    NavLink::new("web-design", "Web Design", "#web-design"),
                    NavLink::new("development", "Development", "#development"),
                    NavLink::new("seo", "SEO", "#seo"),
                ]),
            NavEntry::new("portfolio", NavLink::new("portfolio", "Portfolio", "#portfolio"), "▦")
                .with_submenu(vec![
                    NavLink::new("case-studies", "Case Studies", "#case-studies"),
                    NavLink::new("testimonials", "Testimonials", "#testimonials"),
                ]),
            NavEntry::new("pricing", NavLink::new("pricing", "Pricing", "#pricing"), "◈"),
            NavEntry::new("team", NavLink::new("team", "Team", "#team"), "◎"),
            NavEntry::new("contact", NavLink::new("contact", "Contact", "#contact"), "✉"),
            NavEntry::new("docs", NavLink::new("docs", "Docs", "https://example.com/docs"), "❏"),
        ],
    }
}
