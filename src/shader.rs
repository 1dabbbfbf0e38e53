//! GLSL shader stages and sources.

use crate::error::{Error, Result};
use crate::gl;
use crate::program::Destroyed;
use crate::queue;
use std::{ffi, fmt, fs, ops, path, sync};

/// Shader pipeline stage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Corresponds to `GL_VERTEX_SHADER`.
    Vertex,

    /// Corresponds to `GL_FRAGMENT_SHADER`.
    Fragment,
}

impl Kind {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Vertex => gl::VERTEX_SHADER,
            Kind::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    /// Upper-case stage name used in compile error messages.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Vertex => "VERTEX",
            Kind::Fragment => "FRAGMENT",
        }
    }
}

/// NUL-terminated GLSL source code.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Source {
    code: ffi::CString,
    origin: Option<path::PathBuf>,
}

impl Source {
    /// Wraps source code held in memory.
    pub fn new(code: &str) -> Result<Self> {
        let code = ffi::CString::new(code)
            .map_err(|_| Error::InteriorNul { path: None })?;
        Ok(Self { code, origin: None })
    }

    /// Reads source code from a file.
    pub fn from_file<P: AsRef<path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let code = ffi::CString::new(bytes)
            .map_err(|_| Error::InteriorNul { path: Some(path.to_path_buf()) })?;
        debug!("Loaded shader source {}", path.display());
        Ok(Self {
            code,
            origin: Some(path.to_path_buf()),
        })
    }

    /// Returns the source as a C string.
    pub fn as_cstr(&self) -> &ffi::CStr {
        &self.code
    }

    /// Returns the file the source was read from, if any.
    pub fn origin(&self) -> Option<&path::Path> {
        self.origin.as_deref()
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.origin {
            Some(ref path) => write!(f, "Source({})", path.display()),
            None => write!(f, "Source({} bytes)", self.code.as_bytes().len()),
        }
    }
}

/// Pushes the shader ID onto the factory program queue when destroyed.
struct Destructor {
    id: u32,
    tx: queue::Sender<Destroyed>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        queue::release(&self.tx, Destroyed::Object(self.id));
    }
}

/// A compiled shader object.
///
/// Objects only need to live until they are linked into a program.
#[derive(Clone)]
pub struct Object {
    id: u32,
    kind: Kind,
    _destructor: sync::Arc<Destructor>,
}

impl Object {
    pub(crate) fn new(id: u32, kind: Kind, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            kind,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    /// Returns the pipeline stage.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Object(u32, Kind);

        Object(self.id, self.kind).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, process};

    /// Temporary directory removed when dropped.
    struct Scratch(path::PathBuf);

    impl Scratch {
        fn new(test: &str) -> Self {
            let dir = env::temp_dir().join(format!("learn-opengl-{}-{}", process::id(), test));
            fs::create_dir_all(&dir).unwrap();
            Scratch(dir)
        }

        fn file(&self, name: &str, contents: &[u8]) -> path::PathBuf {
            let path = self.0.join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn source_from_file_is_nul_terminated() {
        let scratch = Scratch::new("nul-terminated");
        let path = scratch.file("ok.vert", b"#version 330 core\nvoid main() {}\n");
        let source = Source::from_file(&path).unwrap();
        assert_eq!(source.as_cstr().to_bytes_with_nul().last(), Some(&0));
        assert_eq!(source.origin(), Some(path.as_path()));
    }

    #[test]
    fn scratch_directory_is_removed() {
        let dir = {
            let scratch = Scratch::new("cleanup");
            scratch.file("a.frag", b"void main() {}");
            scratch.0.clone()
        };
        assert!(!dir.exists());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Source::from_file("does/not/exist.frag").unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, path::PathBuf::from("does/not/exist.frag")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn interior_nul_is_rejected() {
        let scratch = Scratch::new("interior-nul");
        let path = scratch.file("nul.frag", b"void main() {}\0garbage");
        assert!(matches!(Source::from_file(&path), Err(Error::InteriorNul { path: Some(_) })));
        assert!(matches!(Source::new("a\0b"), Err(Error::InteriorNul { path: None })));
    }

    #[test]
    fn dropped_object_is_queued_for_deletion() {
        let queue = queue::Queue::new();
        let object = Object::new(4, Kind::Vertex, queue.tx());
        drop(object);
        assert!(matches!(queue.next(), Some(Destroyed::Object(4))));
    }
}
