use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::platform::winit::translate_window_event;
use crate::input::{self, GameKey, InputState};
use crate::paint::Color;
use crate::raster::Canvas;
use crate::render::{PrimitiveRenderer, RenderCtx, RenderTarget};
use crate::time::{Clock, FrameClock, FrameTime};

/// How long `Surface::open` waits for the platform to hand over a window.
const OPEN_PUMP_TIMEOUT: Duration = Duration::from_millis(10);
const OPEN_MAX_PUMPS: u32 = 500;

/// Window/surface configuration.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub title: String,
    /// Initial drawable width in physical pixels.
    pub width: u32,
    /// Initial drawable height in physical pixels.
    pub height: u32,
    /// Color every frame starts from.
    pub clear_color: Color,
    pub gpu: GpuInit,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            title: "stipple".to_string(),
            width: 800,
            height: 600,
            clear_color: Color::BLACK,
            gpu: GpuInit::default(),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Event-handler half of the surface; `winit` calls into it while pumping.
struct ShimState {
    config: SurfaceConfig,
    entry: Option<WindowEntry>,
    canvas: Canvas<PrimitiveRenderer>,
    input: InputState,
    closing: bool,
    init_error: Option<anyhow::Error>,
}

/// A window with a drawable canvas, polled by the caller once per frame.
///
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// use stipple::window::{Surface, SurfaceConfig};
///
/// let mut surface = Surface::open(SurfaceConfig::default())?;
/// while !surface.is_closing() {
///     surface.poll_events();
///     surface.canvas().draw_quad(10.0, 10.0, 100.0, 50.0, 0x3366FF);
///     surface.swap_buffers()?;
/// }
/// surface.shutdown();
/// # Ok(())
/// # }
/// ```
pub struct Surface {
    event_loop: EventLoop<()>,
    state: ShimState,
    clock: Clock,
    frame_clock: FrameClock,
    last_frame: Option<FrameTime>,
}

impl Surface {
    /// Creates the event loop, the window and the GPU context.
    ///
    /// Blocks until the platform has delivered the window.
    pub fn open(config: SurfaceConfig) -> Result<Self> {
        let mut event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let canvas = Canvas::new(PrimitiveRenderer::new(), config.width, config.height);
        let mut state = ShimState {
            config,
            entry: None,
            canvas,
            input: InputState::default(),
            closing: false,
            init_error: None,
        };

        for _ in 0..OPEN_MAX_PUMPS {
            let status = event_loop.pump_app_events(Some(OPEN_PUMP_TIMEOUT), &mut state);

            if let Some(err) = state.init_error.take() {
                return Err(err);
            }
            if state.entry.is_some() {
                break;
            }
            if let PumpStatus::Exit(code) = status {
                anyhow::bail!("event loop exited with code {code} before the window opened");
            }
        }

        anyhow::ensure!(state.entry.is_some(), "window was not created");

        Ok(Self {
            event_loop,
            state,
            clock: Clock::new(),
            frame_clock: FrameClock::new(),
            last_frame: None,
        })
    }

    /// True once the user asked to close the window (or the loop exited).
    pub fn is_closing(&self) -> bool {
        self.state.closing
    }

    /// Drains pending window events without blocking.
    pub fn poll_events(&mut self) {
        let status = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(code) = status {
            log::info!("event loop exited ({code})");
            self.state.closing = true;
        }
    }

    /// Drawing surface for the current frame.
    pub fn canvas(&mut self) -> &mut Canvas<PrimitiveRenderer> {
        &mut self.state.canvas
    }

    /// Presents everything drawn since the last swap and starts a new frame.
    ///
    /// Transient surface failures skip the frame; only unrecoverable ones are
    /// returned.
    pub fn swap_buffers(&mut self) -> Result<()> {
        let result = self.state.present();
        self.last_frame = Some(self.frame_clock.tick());
        result
    }

    /// Seconds since `open`.
    pub fn time(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    /// Timing of the most recent `swap_buffers`.
    pub fn frame_time(&self) -> Option<FrameTime> {
        self.last_frame
    }

    /// Highest-priority game key currently held.
    pub fn poll_key(&self) -> Option<GameKey> {
        input::poll_key(&self.state.input)
    }

    pub fn input(&self) -> &InputState {
        &self.state.input
    }

    /// Current drawable size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let projection = self.state.canvas.projection();
        (projection.width(), projection.height())
    }

    /// Tears down the GPU context, then the window, then the event loop.
    pub fn shutdown(self) {
        let Surface { event_loop, mut state, .. } = self;
        state.canvas.backend_mut().discard();
        drop(state.entry.take());
        drop(state);
        drop(event_loop);
        log::info!("surface closed");
    }
}

impl ShimState {
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width.max(1), self.config.height.max(1)));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.config.gpu.clone();
        let entry = WindowEntry::try_new(window, |w| pollster::block_on(Gpu::new(w, gpu_init)))
            .context("GPU initialization failed")?;

        let size = entry.borrow_gpu().size();
        log::info!(
            "window \"{}\" created: {}x{}",
            self.config.title,
            size.width,
            size.height
        );

        self.canvas.configure_surface(size.width, size.height);
        self.entry = Some(entry);
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.entry.as_mut() else { return };
        entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        self.canvas.configure_surface(new_size.width, new_size.height);
        log::debug!("resized to {}x{}", new_size.width, new_size.height);
    }

    fn present(&mut self) -> Result<()> {
        let ShimState { entry, canvas, config, .. } = self;
        let renderer = canvas.backend_mut();

        let Some(entry) = entry.as_mut() else {
            renderer.discard();
            return Ok(());
        };

        let size = entry.borrow_gpu().size();
        if size.width == 0 || size.height == 0 {
            // Minimized; nothing to present into.
            renderer.discard();
            return Ok(());
        }

        let clear = config.clear_color;

        entry.with_mut(|fields| {
            let gpu = fields.gpu;

            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    renderer.discard();
                    let msg = err.to_string();
                    return match gpu.handle_surface_error(err) {
                        SurfaceErrorAction::Reconfigured => {
                            log::debug!("surface reconfigured, frame skipped: {msg}");
                            Ok(())
                        }
                        SurfaceErrorAction::SkipFrame => {
                            log::debug!("frame skipped: {msg}");
                            Ok(())
                        }
                        SurfaceErrorAction::Fatal => {
                            Err(anyhow::anyhow!("surface error: {msg}"))
                        }
                    };
                }
            };

            {
                let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                renderer.render(&ctx, &mut target, clear);
            }

            fields.window.pre_present_notify();
            gpu.submit(frame);
            Ok(())
        })
    }
}

impl ApplicationHandler for ShimState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.init_error = Some(e);
            self.closing = true;
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(ev) = translate_window_event(&event) {
            self.input.apply_event(&ev);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.closing = true;
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(new_size) = self
                    .entry
                    .as_ref()
                    .map(|entry| entry.with_window(|w| w.inner_size()))
                {
                    self.resize(new_size);
                }
            }

            _ => {}
        }
    }
}
