use std::{fmt, io, path};

use crate::shader;

/// Crate result type.
pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io {
        path: path::PathBuf,
        source: io::Error,
    },
    ShaderCompile {
        kind: shader::Kind,
        path: Option<path::PathBuf>,
        log: String,
    },
    ProgramLink {
        log: String,
    },
    InteriorNul {
        path: Option<path::PathBuf>,
    },
    Image {
        path: path::PathBuf,
        source: image::ImageError,
    },
    TextureData {
        expected: usize,
        actual: usize,
    },
    Window(glutin::CreationError),
    Context(glutin::ContextError),
    Config {
        path: path::PathBuf,
        source: toml::de::Error,
    },
    UnknownLesson {
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::ShaderCompile { kind, path: Some(path), log } => write!(
                f,
                "{}: ERROR::SHADER::{}::COMPILATION_FAILED\n{log}",
                path.display(),
                kind.label(),
            ),
            Self::ShaderCompile { kind, path: None, log } => {
                write!(f, "ERROR::SHADER::{}::COMPILATION_FAILED\n{log}", kind.label())
            }
            Self::ProgramLink { log } => write!(f, "ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}"),
            Self::InteriorNul { path: Some(path) } => {
                write!(f, "{}: shader source contains a NUL byte", path.display())
            }
            Self::InteriorNul { path: None } => write!(f, "shader source contains a NUL byte"),
            Self::Image { path, source } => write!(f, "{}: {source}", path.display()),
            Self::TextureData { expected, actual } => {
                write!(f, "texture data holds {actual} bytes, {expected} needed")
            }
            Self::Window(err) => write!(f, "failed to create window: {err}"),
            Self::Context(err) => write!(f, "OpenGL context error: {err}"),
            Self::Config { path, source } => write!(f, "{}: {source}", path.display()),
            Self::UnknownLesson { name } => write!(f, "unknown lesson `{name}`"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Window(err) => Some(err),
            Self::Context(err) => Some(err),
            Self::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Self {
        Error::Window(err)
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Self {
        Error::Context(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = Error::ShaderCompile {
            kind: shader::Kind::Fragment,
            path: None,
            log: "0:3: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ERROR::SHADER::FRAGMENT::COMPILATION_FAILED\n0:3: syntax error",
        );
    }

    #[test]
    fn compile_error_from_file_names_the_file() {
        let err = Error::ShaderCompile {
            kind: shader::Kind::Vertex,
            path: Some(path::PathBuf::from("assets/shaders/textures.vert")),
            log: "0:1: bad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "assets/shaders/textures.vert: ERROR::SHADER::VERTEX::COMPILATION_FAILED\n0:1: bad",
        );
    }

    #[test]
    fn io_error_keeps_path_and_source() {
        let err = Error::Io {
            path: path::PathBuf::from("assets/missing.vert"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("assets/missing.vert"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
