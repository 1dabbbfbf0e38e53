//! Draw call dispatch.

use crate::buffer::Format;

/// Draw call kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// `glDrawArrays`: vertices are read in order.
    Arrays,

    /// `glDrawElements`: vertices are read through the index buffer.
    Elements,
}

/// A triangle list draw call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DrawCall {
    /// Where the vertices/elements begin.
    pub offset: usize,

    /// Number of vertices/elements to draw.
    pub count: usize,

    /// Draw call kind.
    pub kind: Kind,
}

impl DrawCall {
    /// Draws `count` vertices as triangles.
    pub fn triangles(count: usize) -> Self {
        Self {
            offset: 0,
            count,
            kind: Kind::Arrays,
        }
    }

    /// Draws `count` indices as triangles.
    pub fn indexed_triangles(count: usize) -> Self {
        Self {
            offset: 0,
            count,
            kind: Kind::Elements,
        }
    }

    /// Byte offset of the first index read by an indexed draw, given the
    /// index accessor's own offset and format.
    pub fn index_byte_offset(&self, accessor_offset: usize, format: Format) -> usize {
        accessor_offset + self.offset * format.byte_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_index_is_at_accessor_offset() {
        let draw_call = DrawCall::indexed_triangles(6);
        assert_eq!(draw_call.index_byte_offset(0, Format::U32(1)), 0);
        assert_eq!(draw_call.index_byte_offset(16, Format::U32(1)), 16);
    }

    #[test]
    fn skipped_indices_advance_by_index_size() {
        let draw_call = DrawCall { offset: 3, ..DrawCall::indexed_triangles(3) };
        assert_eq!(draw_call.index_byte_offset(0, Format::U32(1)), 12);
        assert_eq!(draw_call.index_byte_offset(8, Format::U16(1)), 14);
    }
}
