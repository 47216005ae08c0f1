// File: crates/speedup-plots/src/window.rs
// Summary: Figure windows: the CPU raster blitted into a winit window via softbuffer, one chart at a time.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use speedup_core::{ChartRenderer, ChartSpec, RenderOptions};
use tracing::{debug, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// Pack RGBA8 pixels into softbuffer's `0RGB` words. Alpha is dropped; charts are opaque.
pub fn pack_0rgb(rgba: &[u8], out: &mut [u32]) {
    for (dst, px) in out.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
}

/// Shows charts one after another. `show` returns once its window is closed
/// (close button, Escape or Q), so the caller builds the next chart only then.
pub struct Viewer {
    event_loop: EventLoop<()>,
    opts: RenderOptions,
}

impl Viewer {
    /// The event loop can only be created once per process, on the main thread.
    pub fn new(opts: RenderOptions) -> Self {
        Self { event_loop: EventLoop::new(), opts }
    }

    pub fn show(&mut self, name: &str, spec: &ChartSpec) -> Result<()> {
        let window = WindowBuilder::new()
            .with_title(spec.title())
            .with_inner_size(PhysicalSize::new(self.opts.width as u32, self.opts.height as u32))
            .build(&self.event_loop)
            .map_err(|e| anyhow!("opening window for '{name}': {e}"))?;
        // Declared after `window` so both are dropped before it.
        let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface =
            unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
        let mut renderer = ChartRenderer::new(self.opts.clone());
        info!(figure = name, "showing chart, close the window to continue");

        let mut failure = None;
        self.event_loop.run_return(|event, _, cf| match event {
            Event::NewEvents(StartCause::Init) => {
                cf.set_wait();
                window.request_redraw();
            }
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape | VirtualKeyCode::Q),
                            ..
                        },
                    ..
                } => cf.set_exit(),
                WindowEvent::Resized(_) => window.request_redraw(),
                _ => {}
            },
            Event::RedrawRequested(id) if id == window.id() => {
                if let Err(e) = redraw(&mut surface, &mut renderer, spec, window.inner_size()) {
                    failure = Some(e);
                    cf.set_exit();
                }
            }
            _ => {}
        });

        match failure {
            Some(e) => Err(e.context(format!("showing '{name}'"))),
            None => Ok(()),
        }
    }
}

fn redraw(
    surface: &mut softbuffer::Surface,
    renderer: &mut ChartRenderer,
    spec: &ChartSpec,
    size: PhysicalSize<u32>,
) -> Result<()> {
    // Zero-sized while minimized.
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    renderer.resize(w.get() as i32, h.get() as i32);
    let (rgba, _, _, _) = renderer.render_to_rgba8(spec)?;

    surface.resize(w, h).map_err(|e| anyhow!("resizing surface to {w}x{h}: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("mapping surface buffer: {e}"))?;
    pack_0rgb(&rgba, &mut buffer);
    buffer.present().map_err(|e| anyhow!("presenting frame: {e}"))?;
    debug!(width = w.get(), height = h.get(), "presented frame");
    Ok(())
}
