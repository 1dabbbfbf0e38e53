//! A triangle whose color is set from the application every frame.

use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::two_triangles::triangle;
use crate::lesson::{pulse_sin, Frame, Lesson, LoopFeedback, POSITION_VERTEX_SHADER};
use crate::program::Uniform;
use crate::{DrawCall, Invocation, Program, VertexArray};

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
uniform vec4 ourColor;
void main()
{
    FragColor = ourColor;
}
";

const VERTICES: [[f32; 3]; 3] = [
    [-0.5, -0.5, 0.0],
    [ 0.5, -0.5, 0.0],
    [ 0.0,  0.5, 0.0],
];

pub struct ShaderUniform {
    program: Program,
    vertex_array: VertexArray,
}

/// The green channel follows a sine wave.
pub fn color_at(time: f32) -> [f32; 4] {
    [0.0, pulse_sin(time), 0.0, 1.0]
}

impl Lesson for ShaderUniform {
    fn bootstrap(factory: &Factory, _: &Config) -> Result<Self> {
        Ok(ShaderUniform {
            program: factory.program_from_sources(POSITION_VERTEX_SHADER, FRAGMENT_SHADER)?,
            vertex_array: triangle(factory, &VERTICES),
        })
    }

    fn render_frame(
        &mut self,
        factory: &Factory,
        framebuffer: &Framebuffer,
        frame: &Frame,
        _: &[InputAction],
    ) -> LoopFeedback {
        let invocation = Invocation::new(&self.program)
            .uniform("ourColor", Uniform::Vec4(color_at(frame.time)));
        factory.draw(
            framebuffer,
            &frame.state,
            &self.vertex_array,
            &DrawCall::triangles(3),
            &invocation,
        );
        LoopFeedback::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_green_changes() {
        for &t in &[0.0f32, 1.0, 2.5, 10.0] {
            let [r, g, b, a] = color_at(t);
            assert_eq!((r, b, a), (0.0, 0.0, 1.0));
            assert!((0.0 ..= 1.0).contains(&g));
        }
        assert!((color_at(std::f32::consts::FRAC_PI_2)[1] - 1.0).abs() < 1e-6);
    }
}
