//! Tests for multi-level breadcrumb jumps
//!
//! `jump_to` is a batch pop, not repeated single-step ascends: it must land
//! on the target level in one state change, with intermediate levels never
//! becoming current and no selection events fired along the way.

use drilltui::model::{Direction, NavItem, NavigationState};
use std::sync::Arc;

/// Helper: a linear tree four levels deep (Root > D1 > D2 > D3)
fn deep_tree() -> Arc<[NavItem]> {
    vec![NavItem::new("d1", "D1").with_children(vec![NavItem::new("d2", "D2")
        .with_children(vec![
            NavItem::new("d3", "D3").with_children(vec![NavItem::new("leaf", "Leaf")]),
        ])])]
    .into()
}

/// Helper: descend `n` times along the first child
fn descend_times(nav: &mut NavigationState, n: usize) {
    for _ in 0..n {
        let item = nav.current().items[0].clone();
        nav.descend(&item, |_| panic!("descending branches must not fire events"));
    }
}

#[test]
fn jump_to_ancestor_truncates_to_target() {
    let mut nav = NavigationState::new(deep_tree(), "Root");
    descend_times(&mut nav, 3);
    assert_eq!(nav.depth(), 3);
    assert_eq!(nav.breadcrumbs(), ["Root", "D1", "D2", "D3"]);

    nav.jump_to(1);

    assert_eq!(nav.levels().len(), 2);
    assert_eq!(nav.breadcrumbs(), ["Root", "D1"]);
    assert_eq!(nav.current().title, "D1");
    assert_eq!(nav.direction(), Direction::Back);
}

#[test]
fn jump_to_root_equals_repeated_ascends() {
    let mut jumped = NavigationState::new(deep_tree(), "Root");
    descend_times(&mut jumped, 3);
    let mut stepped = jumped.clone();

    jumped.jump_to(0);
    while stepped.can_go_back() {
        stepped.ascend();
    }

    assert_eq!(jumped, stepped);
    assert!(jumped.at_root());
    assert_eq!(jumped.breadcrumbs(), ["Root"]);
}

#[test]
fn jump_fires_no_events_for_intermediate_levels() {
    // The spy here is the leaf-selection hook: a jump takes no callback and
    // must not route through descend/ascend of intermediate levels, so the
    // only observable change is the final truncated state
    let mut nav = NavigationState::new(deep_tree(), "Root");
    descend_times(&mut nav, 3);

    let before = nav.clone();
    nav.jump_to(0);

    // One batch change: the surviving prefix is bitwise-identical to what it
    // was before the jump, nothing was rebuilt via re-entry
    assert_eq!(nav.levels(), &before.levels()[..1]);
    assert_eq!(nav.breadcrumbs(), &before.breadcrumbs()[..1]);
}

#[test]
fn jump_to_current_level_is_noop() {
    let mut nav = NavigationState::new(deep_tree(), "Root");
    descend_times(&mut nav, 2);
    let snapshot = nav.clone();

    nav.jump_to(2); // already current
    assert_eq!(nav, snapshot);
}

#[test]
fn jump_beyond_depth_is_noop() {
    let mut nav = NavigationState::new(deep_tree(), "Root");
    descend_times(&mut nav, 1);
    let snapshot = nav.clone();

    nav.jump_to(5);
    assert_eq!(nav, snapshot);

    nav.jump_to(usize::MAX);
    assert_eq!(nav, snapshot);
}

#[test]
fn descend_after_jump_resumes_normally() {
    let mut nav = NavigationState::new(deep_tree(), "Root");
    descend_times(&mut nav, 3);

    nav.jump_to(1);
    descend_times(&mut nav, 1);

    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.breadcrumbs(), ["Root", "D1", "D2"]);
    assert_eq!(nav.direction(), Direction::Forward);
}
