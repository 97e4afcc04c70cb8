//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use slideover::commands::Cmd;
use slideover::config::SlideOverConfig;
use slideover::geometry::Rect;
use slideover::messages::{AnimationMsg, GesturePhase, LayoutMsg, Msg};
use slideover::model::SlideOverModel;
use slideover::panel::{BackPanelContent, FrontPanelContent, PanelContent};
use slideover::update::update;

/// Something a fake panel observed
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Attached(&'static str),
    Detached(&'static str),
    Layout(&'static str, Rect),
    SnappedTop(&'static str),
    SnappedBottom(&'static str),
    ScrollEnabled(bool),
    Interaction(bool),
    BottomOffset(f32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Recording front panel; `overscrolling` is controlled by the test
pub struct FakeFront {
    pub name: &'static str,
    pub log: EventLog,
    pub overscrolling: Rc<Cell<bool>>,
}

impl PanelContent for FakeFront {
    fn attached(&mut self) {
        self.log.borrow_mut().push(Event::Attached(self.name));
    }
    fn detached(&mut self) {
        self.log.borrow_mut().push(Event::Detached(self.name));
    }
    fn layout(&mut self, region: Rect) {
        self.log.borrow_mut().push(Event::Layout(self.name, region));
    }
}

impl FrontPanelContent for FakeFront {
    fn is_overscrolling(&self) -> bool {
        self.overscrolling.get()
    }
    fn on_snapped_to_bottom(&mut self) {
        self.log.borrow_mut().push(Event::SnappedBottom(self.name));
    }
    fn on_snapped_to_top(&mut self) {
        self.log.borrow_mut().push(Event::SnappedTop(self.name));
    }
    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Event::ScrollEnabled(enabled));
    }
}

/// Recording back panel
pub struct FakeBack {
    pub name: &'static str,
    pub log: EventLog,
    pub interactive: Rc<Cell<bool>>,
}

impl PanelContent for FakeBack {
    fn attached(&mut self) {
        self.log.borrow_mut().push(Event::Attached(self.name));
    }
    fn detached(&mut self) {
        self.log.borrow_mut().push(Event::Detached(self.name));
    }
    fn layout(&mut self, region: Rect) {
        self.log.borrow_mut().push(Event::Layout(self.name, region));
    }
}

impl BackPanelContent for FakeBack {
    fn user_interaction_enabled(&self) -> bool {
        self.interactive.get()
    }
    fn set_user_interaction_enabled(&mut self, enabled: bool) {
        self.interactive.set(enabled);
        self.log.borrow_mut().push(Event::Interaction(enabled));
    }
    fn on_bottom_offset_changed(&mut self, offset: f32) {
        self.log.borrow_mut().push(Event::BottomOffset(offset));
    }
}

/// Handles to observe the fake panels attached to a model
pub struct Harness {
    pub log: EventLog,
    pub overscrolling: Rc<Cell<bool>>,
    pub interactive: Rc<Cell<bool>>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            overscrolling: Rc::new(Cell::new(false)),
            interactive: Rc::new(Cell::new(false)),
        }
    }

    pub fn front(&self, name: &'static str) -> Box<FakeFront> {
        Box::new(FakeFront {
            name,
            log: Rc::clone(&self.log),
            overscrolling: Rc::clone(&self.overscrolling),
        })
    }

    pub fn back(&self, name: &'static str) -> Box<FakeBack> {
        Box::new(FakeBack {
            name,
            log: Rc::clone(&self.log),
            interactive: Rc::clone(&self.interactive),
        })
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn count(&self, event: &Event) -> usize {
        self.log.borrow().iter().filter(|e| *e == event).count()
    }

    /// Events other than layout passes
    pub fn notifications(&self) -> Vec<Event> {
        self.log
            .borrow()
            .iter()
            .filter(|e| !matches!(e, Event::Layout(..)))
            .cloned()
            .collect()
    }
}

/// Create a model with fake panels attached, realized at `width` x `height`
pub fn realized_model(config: SlideOverConfig, width: f32, height: f32) -> (SlideOverModel, Harness) {
    let harness = Harness::new();
    let mut model = SlideOverModel::new(config).expect("valid config");
    model.set_back_panel(harness.back("back"));
    model.set_front_panel(harness.front("front"));
    update(&mut model, Msg::Layout(LayoutMsg::Realize { width, height }));
    harness.clear();
    (model, harness)
}

/// Refined panel in a 400x800 portrait container (bounds 160 / 480)
pub fn portrait_refined() -> (SlideOverModel, Harness) {
    realized_model(SlideOverConfig::refined(), 400.0, 800.0)
}

/// Simple panel in a 400x800 container (bounds 160 / 640)
pub fn portrait_simple() -> (SlideOverModel, Harness) {
    realized_model(SlideOverConfig::simple(), 400.0, 800.0)
}

pub fn drag(model: &mut SlideOverModel, phase: GesturePhase, translation_y: f32) -> Option<Cmd> {
    update(model, Msg::drag(phase, translation_y))
}

/// Run the current snap animation to completion
pub fn finish_animation(model: &mut SlideOverModel) -> Option<Cmd> {
    update(
        model,
        Msg::Animation(AnimationMsg::Tick(Duration::from_secs(10))),
    )
}

/// Collapse the panel via the explicit API and let it settle
pub fn collapse(model: &mut SlideOverModel) {
    update(
        model,
        Msg::Panel(slideover::messages::PanelMsg::SnapTo(
            slideover::model::Position::Top,
        )),
    );
    finish_animation(model);
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
