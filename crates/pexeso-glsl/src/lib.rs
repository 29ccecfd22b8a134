//! GLSL shader preparation: load sources from disk, compile them into
//! stage units, and link them into executable programs.
//!
//! The driver surface is the [`ShaderApi`] trait rather than a concrete GL
//! context, so the whole compile/link sequence can be exercised against an
//! in-process fake. [`GlShaderApi`] is the real adapter over [`glow`].
//!
//! Two entry points cover the two shader sets this workspace ships:
//! [`load_program`] builds a single program from one vertex/fragment pair,
//! and [`load_program_pair`] builds the terrain demo's two programs that
//! share a fragment stage.
//!
//! Diagnostic policy is asymmetric on purpose: any non-empty compile log is
//! a hard error, while a non-empty link log is only warned about and the
//! program is still returned. Callers relying on zero-tolerance compile
//! output depend on this.

mod api;
mod error;
mod loader;
mod pipeline;

pub use api::{GlShaderApi, ShaderApi, Stage};
pub use error::ShaderError;
pub use loader::load_source;
pub use pipeline::{ShaderUnit, link_pair, load_program, load_program_pair, prepare_unit};
