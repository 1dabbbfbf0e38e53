//! A single orange triangle.

use crate::buffer::{self, Accessor, Format};
use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::{Frame, Lesson, LoopFeedback, ORANGE_FRAGMENT_SHADER, POSITION_VERTEX_SHADER};
use crate::{DrawCall, Invocation, Program, VertexArray};

const VERTICES: [[f32; 3]; 3] = [
    [-0.5, -0.5, 0.0],
    [ 0.5, -0.5, 0.0],
    [ 0.0,  0.5, 0.0],
];

pub struct HelloTriangle {
    program: Program,
    vertex_array: VertexArray,
}

impl Lesson for HelloTriangle {
    fn bootstrap(factory: &Factory, _: &Config) -> Result<Self> {
        let program = factory.program_from_sources(POSITION_VERTEX_SHADER, ORANGE_FRAGMENT_SHADER)?;
        let vertex_buffer = factory.buffer_with_data(
            buffer::Kind::Array,
            buffer::Usage::StaticDraw,
            &VERTICES,
        );
        let vertex_array = factory.vertex_array(
            VertexArray::builder()
                .attribute(0, Accessor::new(vertex_buffer, Format::F32(3), 0, 0)),
        );
        Ok(HelloTriangle { program, vertex_array })
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
            &DrawCall::triangles(VERTICES.len()),
            &Invocation::new(&self.program),
        );
        LoopFeedback::Continue
    }
}
