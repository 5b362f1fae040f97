use serde::{Deserialize, Serialize};

/// Classification of a link's href.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Same-document fragment; the value carries no leading `#`.
    Anchor(&'a str),
    /// Absolute URL, `www.`-prefixed host or a dotted document path. The
    /// browser's default navigation is left alone for these.
    External(&'a str),
}

impl<'a> LinkTarget<'a> {
    pub fn parse(href: &'a str) -> Self {
        if let Some(fragment) = href.strip_prefix('#') {
            return LinkTarget::Anchor(fragment);
        }
        if href.starts_with("http") || href.starts_with("www") || href.contains('.') {
            return LinkTarget::External(href);
        }
        // Bare relative names ("about") behave as anchors, matching scroll
        // lookup by element id.
        LinkTarget::Anchor(href)
    }
}

/// A single navigation link, top-level or nested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn target(&self) -> LinkTarget<'_> {
        LinkTarget::parse(&self.href)
    }

    /// The fragment this link scrolls to, if it is an in-page anchor.
    pub fn anchor(&self) -> Option<&str> {
        match self.target() {
            LinkTarget::Anchor(fragment) => Some(fragment),
            LinkTarget::External(_) => None,
        }
    }
}

/// A top-level menu entry, optionally owning a submenu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub link: NavLink,
    pub icon: String,
    #[serde(default)]
    pub submenu: Vec<NavLink>,
}

impl NavEntry {
    pub fn new(id: impl Into<String>, link: NavLink, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link,
            icon: icon.into(),
            submenu: Vec::new(),
        }
    }

    pub fn with_submenu(mut self, submenu: Vec<NavLink>) -> Self {
        self.submenu = submenu;
        self
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// The whole menu tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavMenu {
    pub entries: Vec<NavEntry>,
}

impl NavMenu {
    /// Finds a link by id at either level.
    pub fn link(&self, link_id: &str) -> Option<&NavLink> {
        for entry in &self.entries {
            if entry.link.id == link_id {
                return Some(&entry.link);
            }
            if let Some(link) = entry.submenu.iter().find(|l| l.id == link_id) {
                return Some(link);
            }
        }
        None
    }

    /// Finds the top-level entry whose own link has the given id.
    pub fn entry_for_link(&self, link_id: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.link.id == link_id)
    }

    /// Finds the link whose anchor equals `fragment`. Top-level links are
    /// searched first; for a submenu match the owning entry is returned
    /// alongside so the caller can expand it.
    pub fn link_for_anchor(&self, fragment: &str) -> Option<(&NavLink, Option<&NavEntry>)> {
        for entry in &self.entries {
            if entry.link.anchor() == Some(fragment) {
                return Some((&entry.link, None));
            }
        }
        for entry in &self.entries {
            if let Some(link) = entry.submenu.iter().find(|l| l.anchor() == Some(fragment)) {
                return Some((link, Some(entry)));
            }
        }
        None
    }

    /// Every anchor fragment the menu can navigate to, in menu order. These
    /// are the section ids the tracker observes.
    pub fn section_anchors(&self) -> Vec<String> {
        let mut anchors = Vec::new();
        for entry in &self.entries {
            if let Some(fragment) = entry.link.anchor() {
                anchors.push(fragment.to_string());
            }
            for link in &entry.submenu {
                if let Some(fragment) = link.anchor() {
                    anchors.push(fragment.to_string());
                }
            }
        }
        anchors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_hrefs() {
        assert_eq!(LinkTarget::parse("#home"), LinkTarget::Anchor("home"));
        assert_eq!(
            LinkTarget::parse("https://example.com"),
            LinkTarget::External("https://example.com")
        );
        assert_eq!(
            LinkTarget::parse("http://example.com"),
            LinkTarget::External("http://example.com")
        );
        assert_eq!(
            LinkTarget::parse("www.example.com"),
            LinkTarget::External("www.example.com")
        );
        assert_eq!(
            LinkTarget::parse("page.html"),
            LinkTarget::External("page.html")
        );
        assert_eq!(LinkTarget::parse("about"), LinkTarget::Anchor("about"));
    }

    #[test]
    fn dotted_fragment_is_still_an_anchor() {
        // The leading '#' wins over the dotted-path heuristic.
        assert_eq!(LinkTarget::parse("#v1.2"), LinkTarget::Anchor("v1.2"));
    }

    #[test]
    fn anchor_accessor_skips_external_links() {
        let link = NavLink::new("docs", "Docs", "https://example.com/docs");
        assert_eq!(link.anchor(), None);
        let link = NavLink::new("home", "Home", "#home");
        assert_eq!(link.anchor(), Some("home"));
    }

    #[test]
    fn anchor_lookup_prefers_top_level_and_reports_parents() {
        let menu = crate::config::default_menu();

        let (link, parent) = menu.link_for_anchor("pricing").unwrap();
        assert_eq!(link.id, "pricing");
        assert!(parent.is_none());

        let (link, parent) = menu.link_for_anchor("seo").unwrap();
        assert_eq!(link.id, "seo");
        assert_eq!(parent.unwrap().id, "services");

        assert!(menu.link_for_anchor("nope").is_none());
    }
}
