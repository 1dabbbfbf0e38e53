//! The interpolated triangle again, with its shaders read from files.
//!
//! A `xOffset` uniform shifts the triangle horizontally; the left and right
//! arrow keys move it.

use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::shader_interpolation::{colored_triangle, Vertex};
use crate::lesson::{Frame, Lesson, LoopFeedback};
use crate::program::Uniform;
use crate::{DrawCall, Invocation, Program, VertexArray};

const STEP: f32 = 0.05;
const LIMIT: f32 = 0.5;

const VERTICES: [Vertex; 3] = [
    Vertex { position: [ 0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] },
    Vertex { position: [-0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0] },
    Vertex { position: [ 0.0,  0.5, 0.0], color: [0.0, 0.0, 1.0] },
];

pub struct ShaderClass {
    program: Program,
    vertex_array: VertexArray,
    x_offset: f32,
}

/// Moves the offset one step per arrow key, clamped to `[-LIMIT, LIMIT]`.
pub fn nudge(x_offset: f32, action: InputAction) -> f32 {
    let moved = match action {
        InputAction::Left => x_offset - STEP,
        InputAction::Right => x_offset + STEP,
        _ => x_offset,
    };
    moved.max(-LIMIT).min(LIMIT)
}

impl Lesson for ShaderClass {
    fn bootstrap(factory: &Factory, config: &Config) -> Result<Self> {
        let program = factory.program_from_files(
            config.assets.shader("shader_class.vert"),
            config.assets.shader("shader_class.frag"),
        )?;
        Ok(ShaderClass {
            program,
            vertex_array: colored_triangle(factory, &VERTICES),
            x_offset: 0.0,
        })
    }

    fn render_frame(
        &mut self,
        factory: &Factory,
        framebuffer: &Framebuffer,
        frame: &Frame,
        actions: &[InputAction],
    ) -> LoopFeedback {
        for &action in actions {
            self.x_offset = nudge(self.x_offset, action);
        }
        let invocation = Invocation::new(&self.program)
            .uniform("xOffset", Uniform::Float(self.x_offset));
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
    fn arrows_move_and_clamp() {
        assert!((nudge(0.0, InputAction::Right) - STEP).abs() < 1e-6);
        assert!((nudge(0.0, InputAction::Left) + STEP).abs() < 1e-6);
        assert_eq!(nudge(LIMIT, InputAction::Right), LIMIT);
        assert_eq!(nudge(-LIMIT, InputAction::Left), -LIMIT);
        assert_eq!(nudge(0.1, InputAction::Up), 0.1);
    }
}
