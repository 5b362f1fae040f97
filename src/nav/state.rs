use serde::{Deserialize, Serialize};

use crate::config::{HOME_ANCHOR, MOBILE_BREAKPOINT_PX};
use crate::nav::model::{LinkTarget, NavMenu};

/// What a link click resolved to. The component layer maps each outcome to
/// its side effects (prevent default, scroll, ripple, deferred close).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The entry owns a submenu; the click only expands or collapses it.
    SubmenuToggled { expanded: bool },
    /// In-page anchor: the link is now active and the view should scroll.
    Navigate { anchor: String },
    /// External URL: untouched, default browser navigation proceeds.
    External,
    /// The id matched no link. Nothing changed.
    Unknown,
}

/// The sidebar's entire UI state, modelled explicitly instead of being read
/// back from style classes. At most one link is active and at most one entry
/// is expanded at any time; both click-driven and scroll-driven updates
/// funnel through the same slots, so concurrent sources resolve to whichever
/// wrote last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    pub menu: NavMenu,
    pub open: bool,
    pub active_link: Option<String>,
    pub expanded_entry: Option<String>,
}

impl NavState {
    pub fn new(menu: NavMenu) -> Self {
        Self {
            menu,
            open: false,
            active_link: None,
            expanded_entry: None,
        }
    }

    /// Opens the panel. Returns `true` when the state actually changed.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }

    /// Closes the panel. Returns `true` when the state actually changed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }

    pub fn is_active(&self, link_id: &str) -> bool {
        self.active_link.as_deref() == Some(link_id)
    }

    pub fn is_expanded(&self, entry_id: &str) -> bool {
        self.expanded_entry.as_deref() == Some(entry_id)
    }

    /// Resolves a click on the link with the given id.
    ///
    /// An entry that owns a submenu swallows the click and toggles its
    /// expansion exclusively. Otherwise the href decides: external targets
    /// are left to the browser, anchors become the active link.
    pub fn click_link(&mut self, link_id: &str) -> ClickOutcome {
        if let Some(entry) = self.menu.entry_for_link(link_id) {
            if entry.has_submenu() {
                let entry_id = entry.id.clone();
                return if self.is_expanded(&entry_id) {
                    self.expanded_entry = None;
                    ClickOutcome::SubmenuToggled { expanded: false }
                } else {
                    self.expanded_entry = Some(entry_id);
                    ClickOutcome::SubmenuToggled { expanded: true }
                };
            }
        }

        let Some(link) = self.menu.link(link_id) else {
            return ClickOutcome::Unknown;
        };
        match link.target() {
            LinkTarget::External(_) => ClickOutcome::External,
            LinkTarget::Anchor(fragment) => {
                let anchor = fragment.to_string();
                self.active_link = Some(link_id.to_string());
                ClickOutcome::Navigate { anchor }
            }
        }
    }

    /// Scroll-driven selection: the section with `section_id` entered the
    /// trigger band. Marks the matching link active and, when it sits in a
    /// submenu, expands the owning entry. Returns `false` when no link
    /// targets that section.
    pub fn activate_section(&mut self, section_id: &str) -> bool {
        let Some((link, parent)) = self.menu.link_for_anchor(section_id) else {
            return false;
        };
        self.active_link = Some(link.id.clone());
        if let Some(parent) = parent {
            self.expanded_entry = Some(parent.id.clone());
        }
        true
    }

    /// Initial-state contract: select the link matching the location
    /// fragment, defaulting to the home anchor.
    pub fn select_for_location(&mut self, fragment: Option<&str>) {
        let fragment = fragment.unwrap_or(HOME_ANCHOR);
        self.activate_section(fragment);
    }

    /// Resize contract: above the mobile breakpoint the panel is not an
    /// overlay, so an open panel closes. Returns `true` when it closed.
    pub fn viewport_resized(&mut self, width: f64) -> bool {
        if width > MOBILE_BREAKPOINT_PX && self.open {
            self.open = false;
            return true;
        }
        false
    }
}
