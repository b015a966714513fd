use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use aurum::cli::StartupConfig;
use aurum::commands::Cmd;
use aurum::keymap::{key_event_from_winit, KeyTranslator};
use aurum::model::{EditSession, SessionError};

use crate::view::Renderer;

/// How often the autosave clock is advanced while idle
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How the event loop ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Window closed normally
    Clean,
    /// The session hit a fatal error; the file should be rolled back
    Crashed(SessionError),
    /// The window or renderer could not be set up
    Failed(anyhow::Error),
}

pub struct App {
    session: EditSession,
    translator: KeyTranslator,
    startup: StartupConfig,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    last_tick: Instant,
    outcome: Option<RunOutcome>,
}

impl App {
    pub fn new(session: EditSession, startup: StartupConfig) -> Self {
        Self {
            session,
            translator: KeyTranslator::new(),
            startup,
            renderer: None,
            window: None,
            context: None,
            last_tick: Instant::now(),
            outcome: None,
        }
    }

    pub fn into_outcome(self) -> RunOutcome {
        self.outcome.unwrap_or(RunOutcome::Clean)
    }

    fn title(&self) -> String {
        format!("Aurum - {}", self.startup.path.display())
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(LogicalSize::new(
                self.startup.editor.window.width,
                self.startup.editor.window.height,
            ));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;

        let renderer = Renderer::new(Rc::clone(&window), &context, &self.startup.editor.font)?;
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        self.relayout();
        Ok(())
    }

    /// Tell the session how much text fits after a resize or gutter toggle
    fn relayout(&mut self) {
        if let Some(renderer) = &self.renderer {
            let (lines, columns) = renderer.text_area_size(self.session.is_preview());
            tracing::debug!(lines, columns, "Viewport size");
            self.session.set_viewport_size(lines, columns);
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Result<Option<Cmd>, SessionError> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::warn!("{:#}", e);
                    }
                }
                Ok(Some(Cmd::Relayout))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key_event) = key_event_from_winit(event.physical_key, event.state) else {
                    return Ok(None);
                };
                match self.translator.translate(&key_event) {
                    Some(command) => self.session.apply(command),
                    None => Ok(None),
                }
            }
            _ => Ok(None),
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_relayout() {
            self.relayout();
        }
        if cmd.needs_redraw() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        self.session.reconcile_viewport();
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.session.render_model())?;
        }
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, outcome: RunOutcome) {
        match &outcome {
            RunOutcome::Crashed(e) => tracing::error!("Session crashed: {}", e),
            RunOutcome::Failed(e) => tracing::error!("{:#}", e),
            RunOutcome::Clean => {}
        }
        self.outcome = Some(outcome);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                self.fail(event_loop, RunOutcome::Failed(e));
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::warn!("Render failed: {:#}", e);
                }
            }
            event => match self.handle_event(&event) {
                Ok(Some(cmd)) => self.process_cmd(cmd),
                Ok(None) => {}
                Err(e) => self.fail(event_loop, RunOutcome::Crashed(e)),
            },
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        if let Err(e) = self.session.tick(elapsed) {
            self.fail(event_loop, RunOutcome::Crashed(e));
            return;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(now + TICK_INTERVAL));
    }
}
