use navkit::config::{self, is_mobile_width};
use navkit::nav::model::{NavEntry, NavLink, NavMenu};
use navkit::nav::state::{ClickOutcome, NavState};

fn build_menu() -> NavMenu {
    NavMenu {
        entries: vec![
            NavEntry::new("home", NavLink::new("home", "Home", "#home"), "⌂"),
            NavEntry::new("about", NavLink::new("about", "About", "#about"), "◉"),
            NavEntry::new("services", NavLink::new("services", "Services", "#services"), "⚙")
                .with_submenu(vec![
                    NavLink::new("web-design", "Web Design", "#web-design"),
                    NavLink::new("seo", "SEO", "#seo"),
                ]),
            NavEntry::new("portfolio", NavLink::new("portfolio", "Portfolio", "#portfolio"), "▦")
                .with_submenu(vec![NavLink::new("case-studies", "Case Studies", "#case-studies")]),
            NavEntry::new("pricing", NavLink::new("pricing", "Pricing", "#pricing"), "◈"),
            NavEntry::new("docs", NavLink::new("docs", "Docs", "https://example.com"), "❏"),
        ],
    }
}

fn build_state() -> NavState {
    NavState::new(build_menu())
}

fn active_count(state: &NavState) -> usize {
    usize::from(state.active_link.is_some())
}

#[test]
fn submenu_click_expands_exactly_one_entry() {
    let mut state = build_state();

    assert_eq!(
        state.click_link("services"),
        ClickOutcome::SubmenuToggled { expanded: true }
    );
    assert_eq!(state.expanded_entry.as_deref(), Some("services"));

    // Expanding another entry collapses the first.
    state.click_link("portfolio");
    assert_eq!(state.expanded_entry.as_deref(), Some("portfolio"));

    // Toggling the expanded entry closes it, leaving none expanded.
    state.click_link("portfolio");
    assert_eq!(state.expanded_entry, None);
}

#[test]
fn submenu_click_never_navigates() {
    let mut state = build_state();
    state.click_link("about");
    let active_before = state.active_link.clone();

    let outcome = state.click_link("services");
    assert!(matches!(outcome, ClickOutcome::SubmenuToggled { .. }));
    assert_eq!(state.active_link, active_before);
}

#[test]
fn anchor_click_marks_exactly_the_clicked_link() {
    let mut state = build_state();

    assert_eq!(
        state.click_link("about"),
        ClickOutcome::Navigate {
            anchor: "about".into()
        }
    );
    assert!(state.is_active("about"));
    assert_eq!(active_count(&state), 1);

    state.click_link("pricing");
    assert!(state.is_active("pricing"));
    assert!(!state.is_active("about"));
    assert_eq!(active_count(&state), 1);
}

#[test]
fn nested_anchor_click_activates_the_submenu_link() {
    let mut state = build_state();
    state.click_link("services");

    assert_eq!(
        state.click_link("seo"),
        ClickOutcome::Navigate {
            anchor: "seo".into()
        }
    );
    assert!(state.is_active("seo"));
    assert_eq!(active_count(&state), 1);
}

#[test]
fn external_click_leaves_everything_alone() {
    let mut state = build_state();
    state.click_link("about");

    assert_eq!(state.click_link("docs"), ClickOutcome::External);
    assert!(state.is_active("about"));
    assert_eq!(state.expanded_entry, None);
}

#[test]
fn unknown_link_is_ignored() {
    let mut state = build_state();
    assert_eq!(state.click_link("missing"), ClickOutcome::Unknown);
    assert_eq!(state.active_link, None);
}

#[test]
fn panel_state_machine() {
    let mut state = build_state();
    assert!(!state.open);

    assert!(state.open());
    assert!(state.open);
    assert!(!state.open());

    assert!(state.close());
    assert!(!state.open);
    assert!(!state.close());
}

#[test]
fn resize_past_breakpoint_closes_an_open_panel() {
    let mut state = build_state();
    state.open();

    assert!(state.viewport_resized(769.0));
    assert!(!state.open);
}

#[test]
fn resize_while_closed_is_a_no_op() {
    let mut state = build_state();
    assert!(!state.viewport_resized(1920.0));
    assert!(!state.open);
}

#[test]
fn resize_within_mobile_range_keeps_the_panel_open() {
    let mut state = build_state();
    state.open();
    assert!(!state.viewport_resized(768.0));
    assert!(state.open);
}

#[test]
fn startup_selects_the_location_fragment() {
    let mut state = build_state();
    state.select_for_location(Some("pricing"));
    assert!(state.is_active("pricing"));
    assert_eq!(active_count(&state), 1);
}

#[test]
fn startup_defaults_to_home_without_a_fragment() {
    let mut state = build_state();
    state.select_for_location(None);
    assert!(state.is_active("home"));
}

#[test]
fn startup_with_unmatched_fragment_selects_nothing() {
    let mut state = build_state();
    state.select_for_location(Some("nowhere"));
    assert_eq!(state.active_link, None);
}

#[test]
fn mobile_width_classification() {
    assert!(is_mobile_width(500.0));
    assert!(is_mobile_width(config::MOBILE_BREAKPOINT_PX));
    assert!(!is_mobile_width(769.0));
}
