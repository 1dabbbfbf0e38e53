//! Two triangles side by side, each with its own vertex array and program.

use crate::buffer::{self, Accessor, Format};
use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::{
    Frame,
    Lesson,
    LoopFeedback,
    ORANGE_FRAGMENT_SHADER,
    POSITION_VERTEX_SHADER,
    YELLOW_FRAGMENT_SHADER,
};
use crate::{DrawCall, Invocation, Program, VertexArray};

pub(crate) const LEFT: [[f32; 3]; 3] = [
    [-0.9, -0.5, 0.0], // bottom left
    [-0.1, -0.5, 0.0], // bottom right
    [-0.5,  0.5, 0.0], // top
];

pub(crate) const RIGHT: [[f32; 3]; 3] = [
    [ 0.1, -0.5, 0.0], // bottom left
    [ 0.9, -0.5, 0.0], // bottom right
    [ 0.5,  0.5, 0.0], // top
];

pub struct TwoTriangles {
    orange: Program,
    yellow: Program,
    left: VertexArray,
    right: VertexArray,
}

/// Uploads a position-only triangle into its own vertex array.
pub(crate) fn triangle(factory: &Factory, vertices: &[[f32; 3]; 3]) -> VertexArray {
    let vertex_buffer = factory.buffer_with_data(
        buffer::Kind::Array,
        buffer::Usage::StaticDraw,
        vertices,
    );
    factory.vertex_array(
        VertexArray::builder()
            .attribute(0, Accessor::new(vertex_buffer, Format::F32(3), 0, 0)),
    )
}

impl Lesson for TwoTriangles {
    fn bootstrap(factory: &Factory, _: &Config) -> Result<Self> {
        Ok(TwoTriangles {
            orange: factory.program_from_sources(POSITION_VERTEX_SHADER, ORANGE_FRAGMENT_SHADER)?,
            yellow: factory.program_from_sources(POSITION_VERTEX_SHADER, YELLOW_FRAGMENT_SHADER)?,
            left: triangle(factory, &LEFT),
            right: triangle(factory, &RIGHT),
        })
    }

    fn render_frame(
        &mut self,
        factory: &Factory,
        framebuffer: &Framebuffer,
        frame: &Frame,
        _: &[InputAction],
    ) -> LoopFeedback {
        let draw_call = DrawCall::triangles(3);
        factory.draw(
            framebuffer,
            &frame.state,
            &self.left,
            &draw_call,
            &Invocation::new(&self.orange),
        );
        factory.draw(
            framebuffer,
            &frame.state,
            &self.right,
            &draw_call,
            &Invocation::new(&self.yellow),
        );
        LoopFeedback::Continue
    }
}
