//! Standalone window backed by winit.
//!
//! The viewer owns a [`SceneEngine`] and a [`RenderBackend`], forwards
//! keyboard and cursor events into the engine's queue and renders one
//! frame per redraw request. Cursor positions are converted to logical
//! pixels first.
//!
//! ```no_run
//! # use starbot::{SceneKind, Viewer};
//! Viewer::builder()
//!     .with_scene(SceneKind::Robot)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::SceneEngine,
    error::StarbotError,
    gpu::{LogBackend, RenderBackend},
    input::InputEvent,
    options::Options,
    scene::SceneKind,
};

/// Window size when the monitor cannot be queried.
const FALLBACK_SIZE: (u32, u32) = (1280, 800);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    scene: SceneKind,
    options: Option<Options>,
    title: Option<String>,
    backend: Option<Box<dyn RenderBackend>>,
}

impl ViewerBuilder {
    /// Galaxy scene, default options, tracing backend.
    fn new() -> Self {
        Self {
            scene: SceneKind::Galaxy,
            options: None,
            title: None,
            backend: None,
        }
    }

    /// Choose the scene.
    #[must_use]
    pub fn with_scene(mut self, scene: SceneKind) -> Self {
        self.scene = scene;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title (defaults to "Starbot - <scene>").
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render through `backend` instead of the tracing [`LogBackend`].
    #[must_use]
    pub fn with_backend(mut self, backend: Box<dyn RenderBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let title = self
            .title
            .unwrap_or_else(|| format!("Starbot - {}", self.scene));
        Viewer {
            scene: self.scene,
            options: self.options.unwrap_or_default(),
            title,
            backend: self
                .backend
                .unwrap_or_else(|| Box::new(LogBackend::new())),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running one scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    scene: SceneKind,
    options: Options,
    title: String,
    backend: Box<dyn RenderBackend>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`StarbotError::Viewer`] if the event loop cannot start, and
    /// the first backend error raised while rendering.
    pub fn run(self) -> Result<(), StarbotError> {
        let event_loop =
            EventLoop::new().map_err(|e| StarbotError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: SceneEngine::new(self.scene, self.options),
            backend: self.backend,
            title: self.title,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| StarbotError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: SceneEngine,
    backend: Box<dyn RenderBackend>,
    title: String,
    /// First render error; ends the event loop.
    error: Option<StarbotError>,
}

/// Three quarters of the monitor, in logical pixels.
fn initial_size(event_loop: &ActiveEventLoop) -> winit::dpi::LogicalSize<u32> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next());
    let (w, h) = monitor.map_or(FALLBACK_SIZE, |mon| {
        let size = mon.size();
        let scale = mon.scale_factor();
        (
            (f64::from(size.width) / scale * 0.75) as u32,
            (f64::from(size.height) / scale * 0.75) as u32,
        )
    });
    winit::dpi::LogicalSize::new(w, h)
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(initial_size(event_loop));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.error = Some(StarbotError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        self.engine.set_scale_factor(window.scale_factor());
        let inner = window.inner_size();
        self.engine.resize(inner.width.max(1), inner.height.max(1));
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                self.engine.resize(size.width.max(1), size.height.max(1));
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.engine.set_scale_factor(scale_factor);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical =
                    position.to_logical::<f32>(self.engine.scale_factor());
                self.engine.push_event(InputEvent::CursorMoved {
                    x: logical.x,
                    y: logical.y,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = InputEvent::from_winit_key(&event) {
                    self.engine.push_event(input);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.engine.frame(self.backend.as_mut()) {
                    log::error!("render error: {e}");
                    self.error = Some(e);
                    event_loop.exit();
                    return;
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => (),
        }
    }
}
