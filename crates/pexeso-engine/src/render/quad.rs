use anyhow::{Context as _, Result};
use glow::HasContext;

use crate::coords::{ColorRgba, Rect};

/// Unit quad in local space, expanded by `u_offset`/`u_scale` in the
/// vertex shader. Triangle strip order.
const UNIT_QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

/// Draws axis-aligned colored quads with a single program.
///
/// The program is produced by the shader pipeline and owned by the caller;
/// the renderer caches its uniform locations and owns the unit-quad
/// VAO/VBO. All methods require the creating GL context to be current.
pub struct QuadRenderer {
    program: glow::Program,
    vao: glow::VertexArray,

    /// `u_offset` — quad origin in pixels.
    u_offset: glow::UniformLocation,
    /// `u_scale` — quad extent in pixels.
    u_scale: glow::UniformLocation,
    /// `u_resolution` — viewport size for NDC conversion.
    u_resolution: glow::UniformLocation,
    /// `u_color` — fill color.
    u_color: glow::UniformLocation,
}

impl QuadRenderer {
    pub fn new(gl: &glow::Context, program: glow::Program) -> Result<Self> {
        let vao = unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow::anyhow!("failed to create vertex array: {e}"))?;
            let vbo = gl
                .create_buffer()
                .map_err(|e| anyhow::anyhow!("failed to create vertex buffer: {e}"))?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(UNIT_QUAD.as_slice()),
                glow::STATIC_DRAW,
            );

            let position = gl
                .get_attrib_location(program, "a_position")
                .context("program has no a_position attribute")?;
            gl.enable_vertex_attrib_array(position);
            gl.vertex_attrib_pointer_f32(position, 2, glow::FLOAT, false, 8, 0);
            gl.bind_vertex_array(None);

            vao
        };

        let uniform = |name: &str| {
            unsafe { gl.get_uniform_location(program, name) }
                .with_context(|| format!("program has no {name} uniform"))
        };

        Ok(Self {
            program,
            vao,
            u_offset: uniform("u_offset")?,
            u_scale: uniform("u_scale")?,
            u_resolution: uniform("u_resolution")?,
            u_color: uniform("u_color")?,
        })
    }

    /// Binds the program and VAO and sets the viewport resolution for the
    /// frame. Call once before any `fill_rect`/`stroke_rect`.
    pub fn begin(&self, gl: &glow::Context, width: f32, height: f32) {
        unsafe {
            gl.use_program(Some(self.program));
            gl.bind_vertex_array(Some(self.vao));
            gl.uniform_2_f32(Some(&self.u_resolution), width, height);
        }
    }

    pub fn fill_rect(&self, gl: &glow::Context, rect: Rect, color: ColorRgba) {
        if rect.is_empty() {
            return;
        }

        unsafe {
            gl.uniform_2_f32(Some(&self.u_offset), rect.origin.x, rect.origin.y);
            gl.uniform_2_f32(Some(&self.u_scale), rect.size.x, rect.size.y);
            gl.uniform_4_f32(Some(&self.u_color), color.r, color.g, color.b, color.a);
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);
        }
    }

    /// Draws a rectangular frame as four thin fills just inside `rect`.
    pub fn stroke_rect(&self, gl: &glow::Context, rect: Rect, width: f32, color: ColorRgba) {
        let (x, y) = (rect.origin.x, rect.origin.y);
        let (w, h) = (rect.size.x, rect.size.y);

        self.fill_rect(gl, Rect::new(x, y, w, width), color);
        self.fill_rect(gl, Rect::new(x, y + h - width, w, width), color);
        self.fill_rect(gl, Rect::new(x, y + width, width, h - 2.0 * width), color);
        self.fill_rect(gl, Rect::new(x + w - width, y + width, width, h - 2.0 * width), color);
    }
}
