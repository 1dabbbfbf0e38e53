//! A rectangle from four vertices and six indices.
//!
//! The element buffer lets both triangles share the two vertices on their
//! common edge instead of storing them twice.

use crate::buffer::{self, Accessor, Format};
use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::{Frame, Lesson, LoopFeedback, ORANGE_FRAGMENT_SHADER, POSITION_VERTEX_SHADER};
use crate::{DrawCall, Invocation, Program, VertexArray};

const VERTICES: [[f32; 3]; 4] = [
    [ 0.5,  0.5, 0.0], // top right
    [ 0.5, -0.5, 0.0], // bottom right
    [-0.5, -0.5, 0.0], // bottom left
    [-0.5,  0.5, 0.0], // top left
];

const INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

pub struct HelloRectangle {
    program: Program,
    vertex_array: VertexArray,
}

impl Lesson for HelloRectangle {
    fn bootstrap(factory: &Factory, _: &Config) -> Result<Self> {
        let program = factory.program_from_sources(POSITION_VERTEX_SHADER, ORANGE_FRAGMENT_SHADER)?;
        let vertex_buffer = factory.buffer_with_data(
            buffer::Kind::Array,
            buffer::Usage::StaticDraw,
            &VERTICES,
        );
        let index_buffer = factory.buffer_with_data(
            buffer::Kind::Index,
            buffer::Usage::StaticDraw,
            &INDICES,
        );
        let vertex_array = factory.vertex_array(
            VertexArray::builder()
                .attribute(0, Accessor::new(vertex_buffer, Format::F32(3), 0, 0))
                .indices(Accessor::new(index_buffer, Format::U32(1), 0, 0)),
        );
        Ok(HelloRectangle { program, vertex_array })
    }

    fn render_frame(
        &mut self,
        factory: &Factory,
        framebuffer: &Framebuffer,
        frame: &Frame,
        _: &[InputAction],
    ) -> LoopFeedback {
        factory.draw(
            framebuffer,
            &frame.state,
            &self.vertex_array,
            &DrawCall::indexed_triangles(INDICES.len()),
            &Invocation::new(&self.program),
        );
        LoopFeedback::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_reference_every_vertex() {
        for vertex in 0 .. VERTICES.len() as u32 {
            assert!(INDICES.contains(&vertex));
        }
        assert!(INDICES.iter().all(|&i| (i as usize) < VERTICES.len()));
    }
}
