use anyhow::{Context as _, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::gl::{GlInit, GlStack};
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub gl: GlInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "pexeso".to_string(),
            initial_size: LogicalSize::new(1024.0, 768.0),
            gl: GlInit::default(),
        }
    }
}

/// Entry point for the runtime.
///
/// The loop is event-driven (`ControlFlow::Wait`): frames are only drawn
/// in response to window events, input, or an explicit redraw request
/// from the app.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        // A setup or present failure recorded mid-loop surfaces here.
        if let Some(err) = state.fatal.take() {
            return Err(err);
        }

        Ok(())
    }
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,

    stack: Option<GlStack>,
    input_state: InputState,
    input_frame: InputFrame,

    fatal: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            stack: None,
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            fatal: None,
            exit_requested: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.exit_requested = true;
        event_loop.exit();
    }

    fn bring_up(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let stack = GlStack::create(event_loop, attrs, &self.config.gl)?;
        self.app.on_ready(stack.gl())?;

        stack.resize(stack.size());
        stack.window().request_redraw();
        self.stack = Some(stack);

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(stack) = self.stack.as_ref() else {
            return;
        };

        stack.begin_frame();

        let control = {
            let mut ctx = FrameCtx {
                window: stack.window(),
                gl: stack.gl(),
                input: &self.input_state,
                frame: &self.input_frame,
            };
            self.app.on_frame(&mut ctx)
        };

        // Per-frame deltas are consumed by exactly one frame.
        self.input_frame.clear();

        if let Err(err) = stack.present() {
            self.fail(event_loop, err);
            return;
        }

        if control == AppControl::Exit {
            self.exit_requested = true;
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.stack.is_some() {
            return;
        }

        if let Err(err) = self.bring_up(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(stack) = self.stack.as_ref() {
                    stack.resize(new_size);
                    stack.window().request_redraw();
                }
            }

            WindowEvent::Focused(focused) => {
                self.input_state
                    .apply_event(&mut self.input_frame, InputEvent::Focused(focused));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let state = match event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                };

                let ev = InputEvent::Key {
                    key: map_key(event.physical_key),
                    state,
                    repeat: event.repeat,
                };
                self.input_state.apply_event(&mut self.input_frame, ev);

                // Input drives the game; wake the render path.
                if let Some(stack) = self.stack.as_ref() {
                    stack.window().request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Space => Key::Space,
            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,
            other => Key::Unknown(other as u32),
        },
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
