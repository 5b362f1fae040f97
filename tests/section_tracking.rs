use navkit::config::default_menu;
use navkit::nav::model::NavMenu;
use navkit::nav::state::NavState;
use navkit::nav::tracker::band_contains;

fn build_state() -> NavState {
    NavState::new(default_menu())
}

#[test]
fn entering_section_activates_only_its_link() {
    let mut state = build_state();
    state.activate_section("about");

    assert!(state.activate_section("pricing"));
    assert!(state.is_active("pricing"));
    assert!(!state.is_active("about"));
}

#[test]
fn submenu_section_expands_its_parent_entry() {
    let mut state = build_state();

    assert!(state.activate_section("seo"));
    assert!(state.is_active("seo"));
    assert_eq!(state.expanded_entry.as_deref(), Some("services"));
}

#[test]
fn top_level_section_leaves_expansion_alone() {
    let mut state = build_state();
    state.click_link("services");

    state.activate_section("team");
    assert!(state.is_active("team"));
    assert_eq!(state.expanded_entry.as_deref(), Some("services"));
}

#[test]
fn unmatched_section_changes_nothing() {
    let mut state = build_state();
    state.activate_section("about");

    assert!(!state.activate_section("not-a-section"));
    assert!(state.is_active("about"));
}

#[test]
fn batched_observations_resolve_to_the_last_one() {
    let mut state = build_state();

    // Two sections in one observation batch: processed in order, last wins.
    state.activate_section("about");
    state.activate_section("team");
    assert!(state.is_active("team"));
}

#[test]
fn click_and_scroll_updates_share_the_active_slot() {
    let mut state = build_state();

    state.click_link("about");
    state.activate_section("pricing");
    assert!(state.is_active("pricing"));

    state.click_link("team");
    assert!(state.is_active("team"));
    assert!(!state.is_active("pricing"));
}

#[test]
fn band_is_the_middle_tenth_of_the_viewport() {
    // 1000px viewport: the band runs 200..300.
    assert!(band_contains(1000.0, 150.0, 250.0));
    assert!(band_contains(1000.0, 250.0, 2000.0));
    assert!(!band_contains(1000.0, 0.0, 199.0));
    assert!(!band_contains(1000.0, 301.0, 900.0));
}

#[test]
fn menu_round_trips_through_json() {
    let menu = default_menu();
    let json = serde_json::to_string(&menu).unwrap();
    let restored: NavMenu = serde_json::from_str(&json).unwrap();
    assert_eq!(menu, restored);
}
