use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window};

use slideover::commands::Cmd;
use slideover::messages::{AnimationMsg, GesturePhase, LayoutMsg, Msg, PanelMsg};
use slideover::model::{Position, SlideOverModel};
use slideover::update::update;

use crate::cli::StartupConfig;
use crate::panels::{Backdrop, BackdropState, ListPanel, ListState};
use crate::view::Renderer;

const LIST_ROWS: usize = 60;
const LIST_ROW_HEIGHT: f32 = 44.0;
const WHEEL_LINE_HEIGHT: f32 = 40.0;

/// An in-progress mouse drag on the front panel
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    start_y: f64,
    last_y: f64,
}

pub struct App {
    model: SlideOverModel,
    list: Rc<RefCell<ListState>>,
    backdrop: Rc<RefCell<BackdropState>>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    window_size: (u32, u32),
    scale_factor: f64,
    mouse_position: Option<(f64, f64)>,
    drag: Option<DragTracker>,
    last_frame: Instant,
}

impl App {
    pub fn new(startup: StartupConfig) -> Result<Self> {
        let mut model = SlideOverModel::new(startup.panel)
            .map_err(|e| anyhow::anyhow!("Invalid panel configuration: {}", e))?;

        let list = Rc::new(RefCell::new(ListState::new(LIST_ROWS, LIST_ROW_HEIGHT)));
        let backdrop = Rc::new(RefCell::new(BackdropState::default()));

        // Queued until the window exists and the model is realized
        model.set_back_panel(Box::new(Backdrop::new(Rc::clone(&backdrop))));
        model.set_front_panel(Box::new(ListPanel::new(Rc::clone(&list))));

        Ok(Self {
            model,
            list,
            backdrop,
            renderer: None,
            window: None,
            context: None,
            window_size: startup.window_size,
            scale_factor: 1.0,
            mouse_position: None,
            drag: None,
            last_frame: Instant::now(),
        })
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        self.renderer = Some(Renderer::new(window, context)?);
        Ok(())
    }

    fn logical(&self, value: f64) -> f32 {
        (value / self.scale_factor) as f32
    }

    fn send(&mut self, msg: Msg) -> Option<Cmd> {
        update(&mut self.model, msg)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                let width = self.logical(size.width as f64);
                let height = self.logical(size.height as f64);
                self.send(Msg::Layout(LayoutMsg::Resize { width, height }))
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                Some(Cmd::Redraw)
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                self.update_cursor_icon(position.x, position.y);

                let tracker = self.drag?;
                let step = self.logical(position.y - tracker.last_y);
                self.drag = Some(DragTracker {
                    last_y: position.y,
                    ..tracker
                });

                // The list scrolls alongside the drag while the panel is not
                // tracking; pulling past its top is the overscroll signal.
                if !self.model.tracking.is_active() {
                    self.list.borrow_mut().scroll_by(-step);
                }

                let translation = self.logical(position.y - tracker.start_y);
                self.send(Msg::drag(GesturePhase::Changed, translation))
                    .or(Some(Cmd::Redraw))
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let (x, y) = self.mouse_position?;
                    let front = self.model.front_rect();
                    if !front.contains(self.logical(x), self.logical(y)) {
                        return None;
                    }
                    self.drag = Some(DragTracker {
                        start_y: y,
                        last_y: y,
                    });
                    self.send(Msg::drag(GesturePhase::Began, 0.0))
                }
                ElementState::Released => {
                    let tracker = self.drag.take()?;
                    let (_, y) = self.mouse_position.unwrap_or((0.0, tracker.last_y));
                    let translation = self.logical(y - tracker.start_y);
                    self.list.borrow_mut().overscrolling = false;
                    self.send(Msg::drag(GesturePhase::Ended, translation))
                }
            },

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => -lines * WHEEL_LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => -self.logical(pos.y),
                };
                let mut list = self.list.borrow_mut();
                list.scroll_by(dy);
                list.overscrolling = false;
                Some(Cmd::Redraw)
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Named(NamedKey::Space) => self.send(Msg::Panel(PanelMsg::Toggle)),
                    Key::Character(c) if c.as_str() == "t" => {
                        self.send(Msg::Panel(PanelMsg::SnapTo(Position::Top)))
                    }
                    Key::Character(c) if c.as_str() == "b" => {
                        self.send(Msg::Panel(PanelMsg::SnapTo(Position::Bottom)))
                    }
                    _ => None,
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {}", e);
                }
                None
            }

            _ => None,
        }
    }

    fn update_cursor_icon(&self, x: f64, y: f64) {
        let Some(window) = &self.window else {
            return;
        };
        let over_front = self
            .model
            .front_rect()
            .contains(self.logical(x), self.logical(y));
        let icon = match (self.drag.is_some(), over_front) {
            (true, _) => CursorIcon::Grabbing,
            (false, true) => CursorIcon::Grab,
            (false, false) => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn render(&mut self) -> Result<()> {
        let Some(window) = &self.window else {
            return Ok(());
        };
        let size = window.inner_size();
        let scale = self.scale_factor as f32;

        if let Some(renderer) = &mut self.renderer {
            let list = self.list.borrow();
            let backdrop = self.backdrop.borrow();
            renderer.render(size.width, size.height, scale, &self.model, &list, &backdrop)?;
        }
        Ok(())
    }

    /// Advance the snap animation by the time since the last frame
    fn tick(&mut self) -> Option<Cmd> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        if !self.model.is_animating() {
            return None;
        }
        self.send(Msg::Animation(AnimationMsg::Tick(dt)))
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::AnimateSnap { token, duration } => {
                // Frames are driven from about_to_wait until the model settles
                tracing::debug!(token = token.0, ?duration, "animating snap");
                self.last_frame = Instant::now();
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.window_size;
        let window_attributes = Window::default_attributes()
            .with_title("Slide-over")
            .with_inner_size(LogicalSize::new(width, height));

        let setup = event_loop
            .create_window(window_attributes)
            .map_err(anyhow::Error::from)
            .and_then(|window| {
                let window = Rc::new(window);
                let context = Context::new(Rc::clone(&window))
                    .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
                Ok((window, context))
            });

        let (window, context) = match setup {
            Ok(parts) => parts,
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.init_renderer(Rc::clone(&window), &context) {
            tracing::error!("Failed to initialize renderer: {}", e);
            event_loop.exit();
            return;
        }

        self.scale_factor = window.scale_factor();
        let size = window.inner_size();
        let realize = Msg::Layout(LayoutMsg::Realize {
            width: self.logical(size.width as f64),
            height: self.logical(size.height as f64),
        });

        self.window = Some(window);
        self.context = Some(context);

        if let Some(cmd) = self.send(realize) {
            self.process_cmd(cmd);
        }
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }

        let should_exit = match &event {
            WindowEvent::CloseRequested => true,
            WindowEvent::KeyboardInput { event, .. } => {
                event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
            }
            _ => false,
        };
        if should_exit {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if needs_redraw {
                self.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.tick().is_some() {
            self.request_redraw();
        }

        let flow = if self.model.is_animating() {
            ControlFlow::Poll
        } else {
            ControlFlow::Wait
        };
        event_loop.set_control_flow(flow);
    }
}
