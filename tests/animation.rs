//! Snap animation tests: presented values, tokens, interruption

mod common;

use std::time::Duration;

use common::{collapse, drag, finish_animation, portrait_refined};
use slideover::commands::Cmd;
use slideover::messages::{AnimationMsg, GesturePhase, LayoutMsg, Msg, PanelMsg};
use slideover::model::{Position, SlideOverModel};
use slideover::update::update;

fn snap(model: &mut SlideOverModel, position: Position) -> Cmd {
    update(model, Msg::Panel(PanelMsg::SnapTo(position))).expect("realized model snaps")
}

fn tick(model: &mut SlideOverModel, dt: Duration) -> Option<Cmd> {
    update(model, Msg::Animation(AnimationMsg::Tick(dt)))
}

fn half_duration(model: &SlideOverModel) -> Duration {
    model.config.snap_duration() / 2
}

fn near(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-2
}

#[test]
fn test_presented_offset_eases_towards_target() {
    let (mut model, _) = portrait_refined();
    snap(&mut model, Position::Top);

    let half = half_duration(&model);
    assert_eq!(tick(&mut model, half), Some(Cmd::Redraw));

    assert!(model.is_animating());
    assert!(near(model.presented_offset(), 320.0));
    assert!(near(model.presented_dim_alpha(), 0.25));
    assert!(near(model.front_rect().y, 320.0));

    tick(&mut model, half);
    tick(&mut model, Duration::from_millis(1));
    assert!(!model.is_animating());
    assert_eq!(model.presented_offset(), 160.0);
}

#[test]
fn test_tick_without_transition_is_noop() {
    let (mut model, _) = portrait_refined();
    assert_eq!(tick(&mut model, Duration::from_millis(16)), None);
}

#[test]
fn test_completion_settles_matching_snap() {
    let (mut model, _) = portrait_refined();
    let token = snap(&mut model, Position::Top).snap_token().unwrap();

    let cmd = update(&mut model, Msg::Animation(AnimationMsg::Completed(token)));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(!model.is_animating());
    assert_eq!(model.presented_offset(), 160.0);
}

#[test]
fn test_superseded_completion_is_ignored() {
    let (mut model, _) = portrait_refined();
    let first = snap(&mut model, Position::Top).snap_token().unwrap();
    let second = snap(&mut model, Position::Bottom).snap_token().unwrap();
    assert_ne!(first, second);

    let cmd = update(&mut model, Msg::Animation(AnimationMsg::Completed(first)));
    assert_eq!(cmd, None);
    assert!(model.is_animating());
    assert_eq!(model.panel.position, Position::Bottom);

    update(&mut model, Msg::Animation(AnimationMsg::Completed(second)));
    assert!(!model.is_animating());
    assert_eq!(model.presented_offset(), 480.0);
}

#[test]
fn test_superseding_snap_starts_from_presented_offset() {
    let (mut model, _) = portrait_refined();
    snap(&mut model, Position::Top);
    let half = half_duration(&model);
    tick(&mut model, half);

    snap(&mut model, Position::Bottom);

    let transition = model.transition.as_ref().unwrap();
    assert!(near(transition.from_offset, 320.0));
    assert!(near(model.presented_offset(), 320.0));
}

#[test]
fn test_drag_interrupts_snap_at_presented_offset() {
    let (mut model, _) = portrait_refined();
    collapse(&mut model);
    snap(&mut model, Position::Bottom);
    let half = half_duration(&model);
    tick(&mut model, half);

    let cmd = drag(&mut model, GesturePhase::Began, 0.0);

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(!model.is_animating());
    assert!(near(model.panel.offset, 320.0));

    // Translation is measured from the committed target
    drag(&mut model, GesturePhase::Changed, -10.0);
    assert_eq!(model.panel.offset, 470.0);
    assert!(near(model.panel.dim_alpha, 0.0125));
}

#[test]
fn test_resize_cancels_snap_and_stales_token() {
    let (mut model, _) = portrait_refined();
    let token = snap(&mut model, Position::Top).snap_token().unwrap();

    update(
        &mut model,
        Msg::Layout(LayoutMsg::Resize {
            width: 300.0,
            height: 600.0,
        }),
    );

    assert!(!model.is_animating());
    assert_eq!(model.presented_offset(), 120.0);
    assert_eq!(
        update(&mut model, Msg::Animation(AnimationMsg::Completed(token))),
        None
    );
}

#[test]
fn test_finish_animation_reaches_committed_values() {
    let (mut model, _) = portrait_refined();
    snap(&mut model, Position::Top);
    finish_animation(&mut model);

    assert_eq!(model.presented_offset(), model.panel.offset);
    assert_eq!(model.presented_dim_alpha(), model.panel.dim_alpha);
}
