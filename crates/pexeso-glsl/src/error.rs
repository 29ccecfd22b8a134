use std::fmt;
use std::io;
use std::path::PathBuf;

/// A failure while preparing a shader program.
#[derive(Debug)]
pub enum ShaderError {
    /// A shader source file could not be opened for reading.
    SourceUnavailable {
        path: PathBuf,
        source: io::Error,
    },

    /// The compiler produced a non-empty diagnostic log.
    ///
    /// The log is carried verbatim. A warnings-only log on a successful
    /// compile still lands here.
    CompileDiagnostic {
        path: PathBuf,
        log: String,
    },

    /// The driver refused to create a shader or program object.
    Driver {
        message: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::SourceUnavailable { path, source } => {
                write!(f, "cannot open shader source {}: {}", path.display(), source)
            }
            ShaderError::CompileDiagnostic { path, log } => {
                write!(f, "shader compile diagnostic for {}: {}", path.display(), log)
            }
            ShaderError::Driver { message } => {
                write!(f, "graphics driver error: {message}")
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::SourceUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
