//! Software rendering of the slide-over demo
//!
//! Draws, back to front: the backdrop, the dimming overlay, then the front
//! panel with its grab handle and list rows. Model geometry is in logical
//! pixels and is scaled to the surface here.

pub mod frame;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::{Context, Surface};
use winit::window::Window;

use slideover::geometry::Rect;
use slideover::model::SlideOverModel;

use crate::panels::{BackdropState, ListState};
use frame::Frame;

/// Colors used by the demo (ARGB)
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub backdrop: u32,
    pub backdrop_stripe: u32,
    pub backdrop_inactive: u32,
    pub dim: u32,
    pub panel: u32,
    pub handle: u32,
    pub row: u32,
    pub row_alt: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            backdrop: 0xFF2E5E4E,
            backdrop_stripe: 0xFF3A7361,
            backdrop_inactive: 0xFF27493E,
            dim: 0xFF000000,
            panel: 0xFFF4F4F6,
            handle: 0xFFB8B8C0,
            row: 0xFFFFFFFF,
            row_alt: 0xFFE9E9EE,
        }
    }
}

const HANDLE_WIDTH: f32 = 36.0;
const HANDLE_HEIGHT: f32 = 5.0;
const HANDLE_MARGIN: f32 = 8.0;
const STRIPE_SPACING: f32 = 48.0;

fn scaled(rect: Rect, scale: f32) -> Rect {
    Rect::new(
        rect.x * scale,
        rect.y * scale,
        rect.width * scale,
        rect.height * scale,
    )
}

/// Paint the whole scene into `frame`
pub fn render_scene(
    frame: &mut Frame,
    model: &SlideOverModel,
    list: &ListState,
    backdrop: &BackdropState,
    palette: &Palette,
    scale: f32,
) {
    frame.clear(palette.backdrop);

    let back = scaled(model.back_rect(), scale);
    let base = if backdrop.interactive {
        palette.backdrop
    } else {
        palette.backdrop_inactive
    };
    frame.fill_rect(back, base);

    // Horizontal stripes down to the collapsed panel edge
    let mut y = STRIPE_SPACING;
    while y < backdrop.visible_bottom {
        frame.fill_rect(
            scaled(Rect::new(0.0, y, model.container.width, 2.0), scale),
            palette.backdrop_stripe,
        );
        y += STRIPE_SPACING;
    }

    frame.dim_rect(back, palette.dim, model.presented_dim_alpha());

    let front_logical = model.front_rect();
    frame.fill_rect(scaled(front_logical, scale), palette.panel);

    let handle = Rect::new(
        front_logical.x + (front_logical.width - HANDLE_WIDTH) / 2.0,
        front_logical.y + HANDLE_MARGIN,
        HANDLE_WIDTH,
        HANDLE_HEIGHT,
    );
    frame.fill_rect(scaled(handle, scale), palette.handle);

    render_rows(frame, front_logical, list, palette, scale);
}

fn render_rows(frame: &mut Frame, panel: Rect, list: &ListState, palette: &Palette, scale: f32) {
    let top = panel.y + HANDLE_MARGIN * 2.0 + HANDLE_HEIGHT;
    if list.row_height <= 0.0 || top >= panel.bottom() {
        return;
    }

    let (first, shift) = list.first_visible_row();
    let mut y = top + shift;
    let mut row = first;
    while row < list.rows && y < panel.bottom() {
        let visible_top = y.max(top);
        let height = (y + list.row_height - 1.0).min(panel.bottom()) - visible_top;
        if height > 0.0 {
            let color = if row % 2 == 0 { palette.row } else { palette.row_alt };
            frame.fill_rect(
                scaled(Rect::new(panel.x, visible_top, panel.width, height), scale),
                color,
            );
        }
        y += list.row_height;
        row += 1;
    }
}

/// softbuffer-backed renderer for the demo window
pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        // Sized lazily on the first render
        Ok(Self {
            surface,
            width: 0,
            height: 0,
            palette: Palette::default(),
        })
    }

    pub fn render(
        &mut self,
        width: u32,
        height: u32,
        scale: f32,
        model: &SlideOverModel,
        list: &ListState,
        backdrop: &BackdropState,
    ) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            render_scene(&mut frame, model, list, backdrop, &self.palette, scale);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
