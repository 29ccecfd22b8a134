use glow::HasContext;

use crate::error::ShaderError;

/// Pipeline position a shader unit is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    fn gl_enum(self) -> u32 {
        match self {
            Stage::Vertex => glow::VERTEX_SHADER,
            Stage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// The subset of the driver API the preparation pipeline touches.
///
/// Handles are plain `Copy` identifiers with manual lifecycle management;
/// ownership discipline lives in the pipeline, not here. Tests implement
/// this trait with a scripted fake.
pub trait ShaderApi {
    type Unit: Copy;
    type Program: Copy;

    fn create_unit(&self, stage: Stage) -> Result<Self::Unit, ShaderError>;
    fn unit_source(&self, unit: Self::Unit, source: &str);
    fn compile(&self, unit: Self::Unit);
    fn compile_status(&self, unit: Self::Unit) -> bool;
    fn unit_log(&self, unit: Self::Unit) -> String;
    fn delete_unit(&self, unit: Self::Unit);

    fn create_program(&self) -> Result<Self::Program, ShaderError>;
    fn attach(&self, program: Self::Program, unit: Self::Unit);
    fn link(&self, program: Self::Program);
    fn link_status(&self, program: Self::Program) -> bool;
    fn program_log(&self, program: Self::Program) -> String;
    fn detach(&self, program: Self::Program, unit: Self::Unit);
}

/// [`ShaderApi`] adapter over a live [`glow::Context`].
///
/// All calls require the context to be current on the calling thread.
pub struct GlShaderApi<'gl> {
    gl: &'gl glow::Context,
}

impl<'gl> GlShaderApi<'gl> {
    pub fn new(gl: &'gl glow::Context) -> Self {
        Self { gl }
    }
}

impl ShaderApi for GlShaderApi<'_> {
    type Unit = glow::Shader;
    type Program = glow::Program;

    fn create_unit(&self, stage: Stage) -> Result<Self::Unit, ShaderError> {
        unsafe { self.gl.create_shader(stage.gl_enum()) }
            .map_err(|message| ShaderError::Driver { message })
    }

    fn unit_source(&self, unit: Self::Unit, source: &str) {
        unsafe { self.gl.shader_source(unit, source) }
    }

    fn compile(&self, unit: Self::Unit) {
        unsafe { self.gl.compile_shader(unit) }
    }

    fn compile_status(&self, unit: Self::Unit) -> bool {
        unsafe { self.gl.get_shader_compile_status(unit) }
    }

    fn unit_log(&self, unit: Self::Unit) -> String {
        unsafe { self.gl.get_shader_info_log(unit) }
    }

    fn delete_unit(&self, unit: Self::Unit) {
        unsafe { self.gl.delete_shader(unit) }
    }

    fn create_program(&self) -> Result<Self::Program, ShaderError> {
        unsafe { self.gl.create_program() }.map_err(|message| ShaderError::Driver { message })
    }

    fn attach(&self, program: Self::Program, unit: Self::Unit) {
        unsafe { self.gl.attach_shader(program, unit) }
    }

    fn link(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn link_status(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn detach(&self, program: Self::Program, unit: Self::Unit) {
        unsafe { self.gl.detach_shader(program, unit) }
    }
}
