//! Tests for the snap resolver and position side effects

mod common;

use common::{collapse, finish_animation, portrait_refined, portrait_simple, Event};
use slideover::commands::Cmd;
use slideover::geometry::GeometryBounds;
use slideover::messages::{Msg, PanelMsg};
use slideover::model::{DragState, Position};
use slideover::update::{resolve, transition_to, update};

// ============================================================================
// resolve
// ============================================================================

#[test]
fn test_resolve_is_idempotent() {
    let bounds = GeometryBounds {
        min_offset: 160.0,
        max_offset: 480.0,
    };
    for offset in [-20.0, 0.0, 159.0, 300.0, 400.0, 400.1, 480.0, 800.0] {
        let first = resolve(offset, 800.0, &bounds);
        let second = resolve(offset, 800.0, &bounds);
        assert_eq!(first, second, "offset {}", offset);
    }
}

#[test]
fn test_resolve_prefers_bottom_when_past_max_even_below_midpoint() {
    // max below the midpoint: overshooting max alone is enough
    let bounds = GeometryBounds {
        min_offset: 40.0,
        max_offset: 220.0,
    };
    assert_eq!(resolve(230.0, 800.0, &bounds), (Position::Bottom, 220.0));
    assert_eq!(resolve(210.0, 800.0, &bounds), (Position::Top, 40.0));
}

// ============================================================================
// transition_to
// ============================================================================

#[test]
fn test_transition_to_top_side_effects() {
    let (mut model, harness) = portrait_refined();
    let offset_before = model.panel.offset;

    transition_to(&mut model, Position::Top);

    assert_eq!(model.panel.position, Position::Top);
    assert_eq!(model.tracking.state, DragState::Inactive);
    assert_eq!(model.panel.dim_alpha, 0.5);
    assert!(!harness.interactive.get());
    assert_eq!(
        harness.notifications(),
        vec![Event::SnappedTop("front"), Event::Interaction(false)]
    );
    // The offset is the resolver's job, not the transition's
    assert_eq!(model.panel.offset, offset_before);
}

#[test]
fn test_transition_to_bottom_side_effects() {
    let (mut model, harness) = portrait_refined();
    transition_to(&mut model, Position::Top);
    harness.clear();

    transition_to(&mut model, Position::Bottom);

    assert_eq!(model.panel.position, Position::Bottom);
    assert_eq!(model.panel.dim_alpha, 0.0);
    assert!(harness.interactive.get());
    assert_eq!(
        harness.notifications(),
        vec![Event::SnappedBottom("front"), Event::Interaction(true)]
    );
}

#[test]
fn test_collapsed_alpha_is_zero_without_dimming() {
    let (mut model, _) = portrait_simple();
    transition_to(&mut model, Position::Top);
    assert_eq!(model.panel.dim_alpha, 0.0);
}

#[test]
fn test_transition_without_content_is_harmless() {
    let mut model =
        slideover::SlideOverModel::new(slideover::SlideOverConfig::refined()).unwrap();
    transition_to(&mut model, Position::Top);
    assert_eq!(model.panel.position, Position::Top);
}

// ============================================================================
// Explicit snap API
// ============================================================================

#[test]
fn test_snap_to_commits_state_before_animation_completes() {
    let (mut model, _) = portrait_refined();

    let cmd = update(&mut model, Msg::Panel(PanelMsg::SnapTo(Position::Top))).unwrap();

    assert!(matches!(cmd, Cmd::AnimateSnap { .. }));
    assert_eq!(model.panel.position, Position::Top);
    assert_eq!(model.panel.offset, 160.0);
    assert_eq!(model.tracking.begin_offset, 160.0);
    // Still on screen at the old offset
    assert_eq!(model.presented_offset(), 480.0);
    assert!(model.is_animating());
}

#[test]
fn test_snap_duration_comes_from_config() {
    let (mut refined, _) = portrait_refined();
    let (mut simple, _) = portrait_simple();

    let Some(Cmd::AnimateSnap { duration, .. }) =
        update(&mut refined, Msg::Panel(PanelMsg::SnapTo(Position::Top)))
    else {
        panic!("expected a snap animation");
    };
    assert!((duration.as_secs_f32() - 0.333).abs() < 1e-6);

    let Some(Cmd::AnimateSnap { duration, .. }) =
        update(&mut simple, Msg::Panel(PanelMsg::SnapTo(Position::Top)))
    else {
        panic!("expected a snap animation");
    };
    assert_eq!(duration.as_millis(), 500);
}

#[test]
fn test_explicit_snap_leaves_collapsed_state_without_overscroll() {
    let (mut model, harness) = portrait_refined();
    collapse(&mut model);
    assert_eq!(model.tracking.state, DragState::Inactive);
    harness.clear();

    update(&mut model, Msg::Panel(PanelMsg::SnapTo(Position::Bottom)));
    finish_animation(&mut model);

    assert_eq!(model.panel.position, Position::Bottom);
    assert_eq!(model.panel.offset, 480.0);
    assert_eq!(model.tracking.state, DragState::Active);
    assert_eq!(harness.count(&Event::SnappedBottom("front")), 1);
}

#[test]
fn test_toggle_alternates_positions() {
    let (mut model, _) = portrait_refined();

    update(&mut model, Msg::Panel(PanelMsg::Toggle));
    assert_eq!(model.panel.position, Position::Top);

    update(&mut model, Msg::Panel(PanelMsg::Toggle));
    assert_eq!(model.panel.position, Position::Bottom);
}

#[test]
fn test_snap_before_realize_is_ignored() {
    let mut model =
        slideover::SlideOverModel::new(slideover::SlideOverConfig::refined()).unwrap();
    assert!(update(&mut model, Msg::Panel(PanelMsg::Toggle)).is_none());
    assert!(!model.is_animating());
}

#[test]
fn test_zero_duration_snap_settles_immediately() {
    let config = slideover::SlideOverConfig {
        snap_duration_secs: 0.0,
        ..slideover::SlideOverConfig::refined()
    };
    let (mut model, _) = common::realized_model(config, 400.0, 800.0);

    let cmd = update(&mut model, Msg::Panel(PanelMsg::SnapTo(Position::Top)));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(!model.is_animating());
    assert_eq!(model.presented_offset(), 160.0);
    assert_eq!(model.presented_dim_alpha(), 0.5);
}
