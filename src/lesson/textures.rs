//! A quad sampling two textures, blended in the fragment shader.
//!
//! Each vertex carries a position, a color and a texture coordinate. The
//! fragment shader mixes `texture1` and `texture2` by `mixValue`, which the
//! up and down arrow keys adjust.

use crate::buffer::{self, Accessor, Format};
use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::{Frame, Lesson, LoopFeedback};
use crate::program::Uniform;
use crate::sampler::{Filter, Wrap};
use crate::{DrawCall, Invocation, Program, Sampler, VertexArray};
use memoffset::offset_of;
use std::mem;

const DEFAULT_MIX: f32 = 0.2;
const MIX_STEP: f32 = 0.1;

#[allow(dead_code)]
#[repr(C)]
struct Vertex {
    position: [f32; 3],
    color: [f32; 3],
    tex_coord: [f32; 2],
}

const VERTICES: [Vertex; 4] = [
    Vertex { position: [ 0.5,  0.5, 0.0], color: [1.0, 0.0, 0.0], tex_coord: [1.0, 1.0] }, // top right
    Vertex { position: [ 0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0], tex_coord: [1.0, 0.0] }, // bottom right
    Vertex { position: [-0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0], tex_coord: [0.0, 0.0] }, // bottom left
    Vertex { position: [-0.5,  0.5, 0.0], color: [1.0, 1.0, 0.0], tex_coord: [0.0, 1.0] }, // top left
];

const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

pub struct Textures {
    program: Program,
    vertex_array: VertexArray,
    container: Sampler,
    face: Sampler,
    mix: f32,
}

/// Steps the mix factor with the up and down keys, clamped to `[0, 1]`.
pub fn adjust_mix(mix: f32, action: InputAction) -> f32 {
    let adjusted = match action {
        InputAction::Up => mix + MIX_STEP,
        InputAction::Down => mix - MIX_STEP,
        _ => mix,
    };
    adjusted.max(0.0).min(1.0)
}

impl Lesson for Textures {
    fn bootstrap(factory: &Factory, config: &Config) -> Result<Self> {
        let program = factory.program_from_files(
            config.assets.shader("textures.vert"),
            config.assets.shader("textures.frag"),
        )?;

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
        let stride = mem::size_of::<Vertex>();
        let vertex_array = factory.vertex_array(
            VertexArray::builder()
                .attribute(0, Accessor::new(
                    vertex_buffer.clone(),
                    Format::F32(3),
                    offset_of!(Vertex, position),
                    stride,
                ))
                .attribute(1, Accessor::new(
                    vertex_buffer.clone(),
                    Format::F32(3),
                    offset_of!(Vertex, color),
                    stride,
                ))
                .attribute(2, Accessor::new(
                    vertex_buffer,
                    Format::F32(2),
                    offset_of!(Vertex, tex_coord),
                    stride,
                ))
                .indices(Accessor::new(index_buffer, Format::U32(1), 0, 0)),
        );

        let container = Sampler::from_texture2(
            factory.texture2_from_file(config.assets.texture("container.png"))?,
        );
        let mut face = Sampler::from_texture2(
            factory.texture2_from_file(config.assets.texture("awesomeface.png"))?,
        );
        face.wrap_s = Wrap::MirroredRepeat;
        face.wrap_t = Wrap::MirroredRepeat;
        face.mag_filter = Filter::Nearest;

        Ok(Textures {
            program,
            vertex_array,
            container,
            face,
            mix: DEFAULT_MIX,
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
            self.mix = adjust_mix(self.mix, action);
        }
        let invocation = Invocation::new(&self.program)
            .uniform("mixValue", Uniform::Float(self.mix))
            .sampler("texture1", &self.container)
            .sampler("texture2", &self.face);
        factory.draw(
            framebuffer,
            &frame.state,
            &self.vertex_array,
            &DrawCall::indexed_triangles(INDICES.len()),
            &invocation,
        );
        LoopFeedback::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_steps_and_saturates() {
        assert!((adjust_mix(DEFAULT_MIX, InputAction::Up) - 0.3).abs() < 1e-6);
        assert!((adjust_mix(DEFAULT_MIX, InputAction::Down) - 0.1).abs() < 1e-6);
        assert_eq!(adjust_mix(1.0, InputAction::Up), 1.0);
        assert_eq!(adjust_mix(0.0, InputAction::Down), 0.0);
        assert_eq!(adjust_mix(0.5, InputAction::Left), 0.5);
    }

    #[test]
    fn vertex_layout() {
        assert_eq!(mem::size_of::<Vertex>(), 8 * mem::size_of::<f32>());
        assert_eq!(offset_of!(Vertex, color), 12);
        assert_eq!(offset_of!(Vertex, tex_coord), 24);
    }

    #[test]
    fn corners_span_the_whole_texture() {
        let (mut min, mut max) = ([1.0f32; 2], [0.0f32; 2]);
        for vertex in VERTICES.iter() {
            for axis in 0 .. 2 {
                min[axis] = min[axis].min(vertex.tex_coord[axis]);
                max[axis] = max[axis].max(vertex.tex_coord[axis]);
            }
        }
        assert_eq!((min, max), ([0.0, 0.0], [1.0, 1.0]));
    }
}
