use std::fs;
use std::path::Path;

use crate::error::ShaderError;

/// Reads a shader source file into a string.
///
/// Content is passed through as-is; there is no size cap and no encoding
/// validation beyond UTF-8. A file that cannot be opened or read yields
/// [`ShaderError::SourceUnavailable`] before any driver call is made.
pub fn load_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::SourceUnavailable {
        path: path.to_owned(),
        source,
    })
}
