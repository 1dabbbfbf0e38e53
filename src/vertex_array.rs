//! Vertex array objects.

use crate::buffer;
use crate::queue;
use std::{cmp, fmt, hash, ops, sync};
use vec_map::VecMap;

/// The maximum number of vertex attributes permitted by the crate.
pub const MAX_ATTRIBUTES: usize = 8;

/// The OpenGL VAO ID type.
pub(crate) type Id = u32;

/// Vertex attribute.
pub type Attribute = buffer::Accessor;

/// Index data.
pub type Indices = buffer::Accessor;

/// Returns the VAO back to the factory upon destruction.
struct Destructor {
    id: u32,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        queue::release(&self.tx, self.id);
    }
}

/// Collects the attributes of a [`VertexArray`] before it is created.
///
/// Attributes are keyed by their shader `location`.
///
/// [`VertexArray`]: struct.VertexArray.html
#[derive(Clone, Debug, Default)]
pub struct Builder {
    /// Vertex attributes keyed by shader location.
    pub attributes: VecMap<Attribute>,

    /// Optional element array.
    pub indices: Option<Indices>,
}

impl Builder {
    /// Constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an accessor to the given shader location.
    ///
    /// # Panics
    ///
    /// Panics if `location` is not below [`MAX_ATTRIBUTES`].
    ///
    /// [`MAX_ATTRIBUTES`]: constant.MAX_ATTRIBUTES.html
    pub fn attribute(mut self, location: usize, accessor: Attribute) -> Self {
        assert!(location < MAX_ATTRIBUTES, "attribute location out of range");
        self.attributes.insert(location, accessor);
        self
    }

    /// Sets the element array.
    pub fn indices(mut self, accessor: Indices) -> Self {
        self.indices = Some(accessor);
        self
    }
}

/// Corresponds to an OpenGL vertex array object.
#[derive(Clone)]
pub struct VertexArray {
    /// The OpenGL VAO ID.
    id: Id,

    /// Draw sequence indices to bind at draw time.
    indices: Option<Indices>,

    /// Vertex attributes to bind at draw time.
    attributes: VecMap<Attribute>,

    /// Returns the VAO back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl VertexArray {
    /// Begins describing a new vertex array.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Constructor.
    pub(crate) fn new(
        id: Id,
        builder: Builder,
        tx: queue::Sender<Id>,
    ) -> Self {
        Self {
            id,
            indices: builder.indices,
            attributes: builder.attributes,
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    /// Returns the OpenGL VAO ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the accessor bound as the element array buffer.
    pub fn indices(&self) -> Option<&Indices> {
        self.indices.as_ref()
    }

    /// Returns the accessor bound to the given attribute index.
    pub fn attribute(&self, index: u8) -> Option<&Attribute> {
        self.attributes.get(index as usize)
    }
}

impl cmp::Eq for VertexArray {}

impl cmp::PartialEq<Self> for VertexArray {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for VertexArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct VertexArray<'a> {
            id: u32,
            indices: Option<&'a Indices>,
            attributes: &'a VecMap<Attribute>,
        }

        VertexArray {
            id: self.id,
            indices: self.indices.as_ref(),
            attributes: &self.attributes,
        }.fmt(f)
    }
}

impl hash::Hash for VertexArray {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Accessor, Buffer, Format, Kind, Usage};

    #[test]
    fn builder_keys_attributes_by_location() {
        let queue = queue::Queue::new();
        let buffer = Buffer::new(1, Kind::Array, 72, Usage::StaticDraw, queue.tx());
        let builder = VertexArray::builder()
            .attribute(0, Accessor::new(buffer.clone(), Format::F32(3), 0, 24))
            .attribute(1, Accessor::new(buffer, Format::F32(3), 12, 24));
        let vao = VertexArray::new(3, builder, queue.tx());
        assert_eq!(vao.attribute(0).map(|a| a.offset()), Some(0));
        assert_eq!(vao.attribute(1).map(|a| a.offset()), Some(12));
        assert!(vao.attribute(2).is_none());
        assert!(vao.indices().is_none());
    }

    #[test]
    #[should_panic(expected = "attribute location out of range")]
    fn location_beyond_limit_panics() {
        let queue = queue::Queue::new();
        let buffer = Buffer::new(1, Kind::Array, 12, Usage::StaticDraw, queue.tx());
        let _ = VertexArray::builder()
            .attribute(MAX_ATTRIBUTES, Accessor::new(buffer, Format::F32(3), 0, 0));
    }
}
