use std::path::Path;

use crate::api::{ShaderApi, Stage};
use crate::error::ShaderError;
use crate::loader::load_source;

/// A compiled (or compiling) stage unit, released on drop.
///
/// The pipeline is the sole owner of every unit it creates. Wrapping the
/// raw handle in a drop guard makes release-on-every-path structural: a
/// unit that fails its diagnostic check is deleted on the error return,
/// and shared units are deleted exactly once when the last guard drops.
pub struct ShaderUnit<'a, A: ShaderApi> {
    api: &'a A,
    raw: A::Unit,
    stage: Stage,
}

impl<'a, A: ShaderApi> ShaderUnit<'a, A> {
    pub fn raw(&self) -> A::Unit {
        self.raw
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
}

impl<A: ShaderApi> Drop for ShaderUnit<'_, A> {
    fn drop(&mut self) {
        self.api.delete_unit(self.raw);
    }
}

/// Loads a source file and compiles it for `stage`.
///
/// The driver is queried for both the status flag and the info log after
/// submission, but the decision is made on the log alone: any non-empty
/// log fails with [`ShaderError::CompileDiagnostic`], even when the
/// status flag reports success.
pub fn prepare_unit<'a, A: ShaderApi>(
    api: &'a A,
    stage: Stage,
    path: &Path,
) -> Result<ShaderUnit<'a, A>, ShaderError> {
    let source = load_source(path)?;

    log::info!("compiling shader: {}", path.display());

    let unit = ShaderUnit {
        api,
        raw: api.create_unit(stage)?,
        stage,
    };

    api.unit_source(unit.raw, &source);
    api.compile(unit.raw);

    let compiled = api.compile_status(unit.raw);
    let diagnostics = api.unit_log(unit.raw);

    if !diagnostics.is_empty() {
        // `unit` drops here and releases the handle.
        return Err(ShaderError::CompileDiagnostic {
            path: path.to_owned(),
            log: diagnostics,
        });
    }

    log::debug!(
        "compiled {} shader {} (status: {})",
        match stage {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        },
        path.display(),
        compiled,
    );

    Ok(unit)
}

/// Links one vertex unit and one fragment unit into a program.
///
/// A non-empty link log is advisory: it is warned about and the program
/// handle is returned regardless, also when the status flag reports a
/// failed link. The units stay attached; callers detach them once they
/// are done linking.
pub fn link_pair<A: ShaderApi>(
    api: &A,
    vertex: &ShaderUnit<'_, A>,
    fragment: &ShaderUnit<'_, A>,
) -> Result<A::Program, ShaderError> {
    let program = api.create_program()?;

    log::info!("linking program");
    api.attach(program, vertex.raw());
    api.attach(program, fragment.raw());
    api.link(program);

    let linked = api.link_status(program);
    let diagnostics = api.program_log(program);

    if !diagnostics.is_empty() {
        log::warn!("link diagnostics: {diagnostics}");
    }
    if !linked {
        log::debug!("link status flag reported failure");
    }

    Ok(program)
}

/// Builds a single program from one vertex source and one fragment source.
///
/// Both intermediate units are detached and released before this returns,
/// on the success path and on every failure path.
pub fn load_program<A: ShaderApi>(
    api: &A,
    vertex_path: &Path,
    fragment_path: &Path,
) -> Result<A::Program, ShaderError> {
    let vertex = prepare_unit(api, Stage::Vertex, vertex_path)?;
    let fragment = prepare_unit(api, Stage::Fragment, fragment_path)?;

    let program = link_pair(api, &vertex, &fragment)?;

    api.detach(program, vertex.raw());
    api.detach(program, fragment.raw());

    log::info!("shaders loaded");

    Ok(program)
}

/// Builds the terrain demo's two programs, which share one fragment stage.
///
/// Both programs are linked before any unit is released, since the second
/// link still references the shared fragment unit. The fragment unit is
/// detached from both programs and released once.
pub fn load_program_pair<A: ShaderApi>(
    api: &A,
    vertex_a_path: &Path,
    vertex_b_path: &Path,
    fragment_path: &Path,
) -> Result<(A::Program, A::Program), ShaderError> {
    let vertex_a = prepare_unit(api, Stage::Vertex, vertex_a_path)?;
    let vertex_b = prepare_unit(api, Stage::Vertex, vertex_b_path)?;
    let fragment = prepare_unit(api, Stage::Fragment, fragment_path)?;

    let program_a = link_pair(api, &vertex_a, &fragment)?;
    let program_b = link_pair(api, &vertex_b, &fragment)?;

    api.detach(program_a, vertex_a.raw());
    api.detach(program_a, fragment.raw());
    api.detach(program_b, vertex_b.raw());
    api.detach(program_b, fragment.raw());

    log::info!("shaders loaded");

    Ok((program_a, program_b))
}
