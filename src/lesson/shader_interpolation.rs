//! Per-vertex colors interpolated by the rasterizer.
//!
//! Position and color are interleaved in one buffer: each vertex is six
//! floats, the color starting three floats in. A second triangle is drawn
//! with another program whose red channel pulses through the `ourColor2`
//! uniform.

use crate::buffer::{self, Accessor, Format};
use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::two_triangles::{triangle, RIGHT};
use crate::lesson::{pulse_cos, Frame, Lesson, LoopFeedback};
use crate::program::Uniform;
use crate::{DrawCall, Invocation, Program, VertexArray};
use memoffset::offset_of;
use std::mem;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;
out vec3 ourColor;
void main()
{
    gl_Position = vec4(aPos, 1.0);
    ourColor = aColor;
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
in vec3 ourColor;
void main()
{
    FragColor = vec4(ourColor, 1.0);
}
";

const PULSE_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
uniform vec4 ourColor2;
void main()
{
    FragColor = ourColor2;
}
";

#[allow(dead_code)]
#[repr(C)]
pub(crate) struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

const VERTICES: [Vertex; 3] = [
    Vertex { position: [ 0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] }, // bottom right
    Vertex { position: [-0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0] }, // bottom left
    Vertex { position: [ 0.0,  0.5, 0.0], color: [0.0, 0.0, 1.0] }, // top
];

/// Builds a vertex array reading `Vertex` position at location 0 and color
/// at location 1.
pub(crate) fn colored_triangle(factory: &Factory, vertices: &[Vertex]) -> VertexArray {
    let vertex_buffer = factory.buffer_with_data(
        buffer::Kind::Array,
        buffer::Usage::StaticDraw,
        vertices,
    );
    let stride = mem::size_of::<Vertex>();
    factory.vertex_array(
        VertexArray::builder()
            .attribute(0, Accessor::new(
                vertex_buffer.clone(),
                Format::F32(3),
                offset_of!(Vertex, position),
                stride,
            ))
            .attribute(1, Accessor::new(
                vertex_buffer,
                Format::F32(3),
                offset_of!(Vertex, color),
                stride,
            )),
    )
}

pub struct ShaderInterpolation {
    interpolated: Program,
    pulsing: Program,
    colored: VertexArray,
    plain: VertexArray,
}

impl Lesson for ShaderInterpolation {
    fn bootstrap(factory: &Factory, _: &Config) -> Result<Self> {
        Ok(ShaderInterpolation {
            interpolated: factory.program_from_sources(VERTEX_SHADER, FRAGMENT_SHADER)?,
            pulsing: factory.program_from_sources(VERTEX_SHADER, PULSE_FRAGMENT_SHADER)?,
            colored: colored_triangle(factory, &VERTICES),
            plain: triangle(factory, &RIGHT),
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
            &self.colored,
            &draw_call,
            &Invocation::new(&self.interpolated),
        );
        let red = pulse_cos(frame.time);
        factory.draw(
            framebuffer,
            &frame.state,
            &self.plain,
            &draw_call,
            &Invocation::new(&self.pulsing).uniform("ourColor2", Uniform::Vec4([red, 0.0, 0.0, 1.0])),
        );
        LoopFeedback::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_layout() {
        assert_eq!(mem::size_of::<Vertex>(), 6 * mem::size_of::<f32>());
        assert_eq!(offset_of!(Vertex, position), 0);
        assert_eq!(offset_of!(Vertex, color), 3 * mem::size_of::<f32>());
    }
}
