//! Slide-over demo
//!
//! Opens a window with a draggable list panel over a backdrop. Drag the panel
//! with the mouse, scroll the list with the wheel, press Space to toggle,
//! `t`/`b` to snap to top/bottom, Escape to quit.

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

mod cli;
mod panels;
mod runtime;
mod view;

use cli::CliArgs;
use runtime::App;

fn main() -> Result<()> {
    slideover::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        drag_mode = ?startup.panel.drag_mode,
        dimming = startup.panel.dimming_enabled,
        "starting slide-over demo"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup)?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
