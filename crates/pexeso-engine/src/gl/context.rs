use std::num::NonZeroU32;

use anyhow::{Context as _, Result, anyhow};
use glow::HasContext;
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::coords::ColorRgba;

/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only
/// when a concrete platform requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Multisampling sample count requested from the config template.
    pub multisampling: u8,

    /// Core-profile context version to request.
    pub version: (u8, u8),

    /// Block buffer swaps on vertical sync.
    pub vsync: bool,

    /// Color the surface is cleared to at the start of each frame.
    pub clear_color: ColorRgba,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            multisampling: 4,
            version: (3, 3),
            vsync: true,
            clear_color: ColorRgba::white(),
        }
    }
}

/// Owns the window together with its GL display, context, surface and the
/// loaded [`glow::Context`].
///
/// The context is made current on the creating thread and stays current;
/// the runtime is single-threaded and synchronous throughout.
pub struct GlStack {
    // Field order is drop order: GL objects go before the window.
    gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
    clear_color: ColorRgba,
}

impl GlStack {
    /// Creates the window, picks a config, builds a core-profile context
    /// and window surface, makes the context current and loads the GL
    /// function pointers.
    pub fn create(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<Self> {
        let template = ConfigTemplateBuilder::new().with_multisampling(init.multisampling);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |configs| {
                // Prefer the config with the most samples the template allows.
                configs
                    .reduce(|best, c| {
                        if c.num_samples() > best.num_samples() {
                            c
                        } else {
                            best
                        }
                    })
                    .expect("no GL configs matched the template")
            })
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;

        let window = window.context("display builder did not produce a window")?;
        let display = gl_config.display();

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let (major, minor) = init.version;
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));

        let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }
            .context("failed to create GL context")?;

        let surface_attrs = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .context("failed to build surface attributes")?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        if init.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::new(1).expect("1 is non-zero"));
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("vsync not available: {e}");
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };

        log::debug!(
            "GL context up: {}.{} core, {} samples",
            major,
            minor,
            gl_config.num_samples(),
        );

        Ok(Self {
            window,
            context,
            surface,
            gl,
            clear_color: init.clear_color,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Resizes the surface and the viewport to the new physical size.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let w = NonZeroU32::new(size.width.max(1)).expect("clamped to 1");
        let h = NonZeroU32::new(size.height.max(1)).expect("clamped to 1");
        self.surface.resize(&self.context, w, h);

        unsafe {
            self.gl
                .viewport(0, 0, size.width.max(1) as i32, size.height.max(1) as i32);
        }
    }

    /// Clears color and depth for a new frame.
    pub fn begin_frame(&self) {
        let c = self.clear_color;
        unsafe {
            self.gl.clear_color(c.r, c.g, c.b, c.a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    /// Swaps the back buffer onto the window.
    pub fn present(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}
