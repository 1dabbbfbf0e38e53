//! GPU buffer management.

use crate::gl;
use crate::queue;
use std::{cmp, fmt, hash, ops, sync};

#[doc(inline)]
pub use self::format::Format;

/// OpenGL buffer ID type.
pub(crate) type Id = u32;

/// Determines what the buffer may be used for.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    /// Corresponds to `GL_ARRAY_BUFFER`.
    Array,

    /// Corresponds to `GL_ELEMENT_ARRAY_BUFFER`.
    Index,
}

impl Kind {
    /// Returns the equivalent OpenGL target enumeration constant.
    pub fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Array => gl::ARRAY_BUFFER,
            Kind::Index => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// A buffer data usage hint.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Usage {
    /// Set once, drawn a few times. Corresponds to `GL_STREAM_DRAW`.
    StreamDraw,

    /// Set once, drawn many times. Corresponds to `GL_STATIC_DRAW`.
    StaticDraw,

    /// Changed often, drawn many times. Corresponds to `GL_DYNAMIC_DRAW`.
    DynamicDraw,
}

impl Usage {
    /// Returns the equivalent OpenGL usage enumeration constant.
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Usage::StreamDraw => gl::STREAM_DRAW,
            Usage::StaticDraw => gl::STATIC_DRAW,
            Usage::DynamicDraw => gl::DYNAMIC_DRAW,
        }
    }
}

/// Pushes the buffer ID onto the factory buffer queue when destroyed.
pub(crate) struct Destructor {
    id: Id,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        queue::release(&self.tx, self.id);
    }
}

/// A contiguous region of GPU memory.
#[derive(Clone)]
pub struct Buffer {
    /// The OpenGL buffer ID.
    id: Id,

    /// The type of buffer, e.g. a vertex buffer.
    kind: Kind,

    /// The number of bytes held by the buffer.
    size: usize,

    /// Data usage hint.
    usage: Usage,

    /// Returns the buffer back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl Buffer {
    /// Constructor.
    pub(crate) fn new(
        id: Id,
        kind: Kind,
        size: usize,
        usage: Usage,
        tx: queue::Sender<Id>,
    ) -> Self {
        Self {
            _destructor: sync::Arc::new(Destructor { id, tx }),
            id,
            kind,
            size,
            usage,
        }
    }

    /// Returns the OpenGL buffer ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Sets the buffer size.
    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Returns the buffer kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the buffer data usage hint.
    pub fn usage(&self) -> Usage {
        self.usage
    }
}

impl cmp::PartialEq<Self> for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Buffer {}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Buffer {
            id: Id,
            kind: Kind,
            size: usize,
            usage: Usage,
        }

        Buffer {
            id: self.id,
            kind: self.kind,
            size: self.size,
            usage: self.usage,
        }.fmt(f)
    }
}

impl hash::Hash for Buffer {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A formatted view into a [`Buffer`].
///
/// This is what `glVertexAttribPointer` describes: where the first item
/// starts, how it is laid out and how far apart consecutive items are.
///
/// [`Buffer`]: struct.Buffer.html
#[derive(Clone, Debug)]
pub struct Accessor {
    /// The buffer the accessor reads from.
    buffer: Buffer,

    /// The accessor data format.
    format: Format,

    /// The number of bytes into the buffer the accessor reads from.
    offset: usize,

    /// The number of bytes between each element.
    stride: usize,
}

impl Accessor {
    /// Constructor.
    pub fn new(
        buffer: Buffer,
        format: Format,
        offset: usize,
        stride: usize,
    ) -> Self {
        Self {
            buffer,
            format,
            offset,
            stride,
        }
    }

    /// Returns the parent buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Returns the accessor data format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the accessor byte offset into the parent buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the accessor byte stride between consecutive elements.
    ///
    /// Zero means tightly packed.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

/// Buffer format descriptors. descriptors.
pub mod format {
    use crate::gl;

    /// Describes the data format of an individual item in an accessor.
    ///
    /// The payload is the number of components, between 1 and 4.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Format {
        /// 32-bit floating point number.
        F32(u8),

        /// Unsigned 8-bit integer.
        U8(u8),

        /// Unsigned normalized 8-bit rational.
        U8Norm(u8),

        /// Unsigned 16-bit integer.
        U16(u8),

        /// Unsigned 32-bit integer.
        U32(u8),
    }

    impl Format {
        /// Returns the corresponding GL data type enumeration constant.
        pub(crate) fn gl_data_type(self) -> u32 {
            match self {
                Format::F32(_) => gl::FLOAT,
                Format::U8(_) | Format::U8Norm(_) => gl::UNSIGNED_BYTE,
                Format::U16(_) => gl::UNSIGNED_SHORT,
                Format::U32(_) => gl::UNSIGNED_INT,
            }
        }

        /// Returns true if this is a normalized type.
        pub fn norm(self) -> bool {
            matches!(self, Format::U8Norm(_))
        }

        /// Returns the number of components.
        pub fn size(self) -> usize {
            let size = match self {
                Format::F32(size) => size,
                Format::U8(size) => size,
                Format::U8Norm(size) => size,
                Format::U16(size) => size,
                Format::U32(size) => size,
            };
            match size {
                1 | 2 | 3 | 4 => size as usize,
                _ => panic!("invalid buffer format size"),
            }
        }

        /// Returns the number of bytes a single component occupies.
        pub fn component_bytes(self) -> usize {
            match self {
                Format::F32(_) | Format::U32(_) => 4,
                Format::U16(_) => 2,
                Format::U8(_) | Format::U8Norm(_) => 1,
            }
        }

        /// Returns the number of bytes a whole item occupies.
        pub fn byte_size(self) -> usize {
            self.size() * self.component_bytes()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_sizes() {
        assert_eq!(Format::F32(3).byte_size(), 12);
        assert_eq!(Format::F32(2).byte_size(), 8);
        assert_eq!(Format::U8Norm(4).byte_size(), 4);
        assert_eq!(Format::U32(1).byte_size(), 4);
        assert_eq!(Format::U16(1).byte_size(), 2);
    }

    #[test]
    fn format_gl_types() {
        assert_eq!(Format::F32(3).gl_data_type(), gl::FLOAT);
        assert_eq!(Format::U32(1).gl_data_type(), gl::UNSIGNED_INT);
        assert!(Format::U8Norm(4).norm());
        assert!(!Format::U8(4).norm());
    }

    #[test]
    #[should_panic(expected = "invalid buffer format size")]
    fn five_components_are_rejected() {
        let _ = Format::F32(5).size();
    }

    #[test]
    fn usage_hints_map_to_gl() {
        assert_eq!(Usage::StreamDraw.as_gl_enum(), gl::STREAM_DRAW);
        assert_eq!(Usage::StaticDraw.as_gl_enum(), gl::STATIC_DRAW);
        assert_eq!(Usage::DynamicDraw.as_gl_enum(), gl::DYNAMIC_DRAW);
        assert_eq!(Kind::Index.as_gl_enum(), gl::ELEMENT_ARRAY_BUFFER);
    }

    #[test]
    fn dropping_last_handle_queues_the_id() {
        let queue = queue::Queue::new();
        let buffer = Buffer::new(7, Kind::Array, 0, Usage::StaticDraw, queue.tx());
        let copy = buffer.clone();
        drop(buffer);
        assert_eq!(queue.next(), None);
        drop(copy);
        assert_eq!(queue.next(), Some(7));
    }
}
