//! GLSL programs.

use crate::queue;
use crate::sampler::Sampler;
use arrayvec::ArrayVec;
use std::{cmp, fmt, hash, ops, sync};

/// Specifies the maximum number of uniform values per invocation.
pub const MAX_UNIFORMS: usize = 8;

/// Specifies the maximum number of samplers permitted by the crate.
pub const MAX_SAMPLERS: usize = 4;

/// A value assigned to a named uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Uniform {
    /// GLSL `bool`, uploaded with `glUniform1i`.
    Bool(bool),

    /// GLSL `int` or sampler unit, uploaded with `glUniform1i`.
    Int(i32),

    /// GLSL `float`.
    Float(f32),

    /// GLSL `vec2`.
    Vec2([f32; 2]),

    /// GLSL `vec3`.
    Vec3([f32; 3]),

    /// GLSL `vec4`.
    Vec4([f32; 4]),
}

/// Maps a `glGetUniformLocation` result to a location worth setting.
///
/// GL reports uniforms that are unknown or optimized out as -1; values
/// assigned there would be discarded, so they are skipped.
pub(crate) fn active_location(location: i32) -> Option<i32> {
    match location {
        -1 => None,
        x => Some(x),
    }
}

/// Specifies whether the destroyed item was an object or a program.
#[derive(Clone, Debug)]
pub(crate) enum Destroyed {
    /// A shader object.
    Object(u32),

    /// A compiled and linked program.
    Program(u32),
}

/// Pushes the program ID onto the factory program queue when destroyed.
pub(crate) struct ProgramDestructor {
    id: u32,
    tx: queue::Sender<Destroyed>,
}

impl ops::Drop for ProgramDestructor {
    fn drop(&mut self) {
        queue::release(&self.tx, Destroyed::Program(self.id));
    }
}

/// An invocation of a shader program.
///
/// Uniform values and samplers are looked up by name and applied when the
/// invocation is drawn. Sampler `i` is bound to texture unit `i`.
#[derive(Clone)]
pub struct Invocation<'a> {
    /// The program to bind at draw time.
    pub program: &'a Program,

    /// Uniform values to be set on the program at draw time.
    pub uniforms: ArrayVec<(&'a str, Uniform), MAX_UNIFORMS>,

    /// Texture samplers to be bound to the program at draw time.
    pub samplers: ArrayVec<(&'a str, &'a Sampler), MAX_SAMPLERS>,
}

impl<'a> Invocation<'a> {
    /// An invocation with no uniforms or samplers.
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            uniforms: ArrayVec::new(),
            samplers: ArrayVec::new(),
        }
    }

    /// Adds a uniform value.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_UNIFORMS`] values are added.
    ///
    /// [`MAX_UNIFORMS`]: constant.MAX_UNIFORMS.html
    pub fn uniform(mut self, name: &'a str, value: Uniform) -> Self {
        self.uniforms.push((name, value));
        self
    }

    /// Adds a sampler, bound to the next free texture unit.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_SAMPLERS`] samplers are added.
    ///
    /// [`MAX_SAMPLERS`]: constant.MAX_SAMPLERS.html
    pub fn sampler(mut self, name: &'a str, sampler: &'a Sampler) -> Self {
        self.samplers.push((name, sampler));
        self
    }
}

/// A compiled shader program.
#[derive(Clone)]
pub struct Program {
    /// The OpenGL program ID.
    id: u32,

    /// Returns the program back to the factory upon destruction.
    _destructor: sync::Arc<ProgramDestructor>,
}

impl Program {
    /// Constructor.
    pub(crate) fn new(
        id: u32,
        tx: queue::Sender<Destroyed>,
    ) -> Self {
        Self {
            id,
            _destructor: sync::Arc::new(
                ProgramDestructor {
                    id,
                    tx,
                },
            ),
        }
    }

    /// Returns the GLSL program ID.
    pub(crate) fn id(&self) -> u32 {
        self.id
    }
}

impl cmp::Eq for Program {}

impl cmp::PartialEq<Self> for Program {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Program(u32);

        Program(self.id).fmt(f)
    }
}

impl hash::Hash for Program {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_collects_uniforms_in_order() {
        let queue = queue::Queue::new();
        let program = Program::new(9, queue.tx());
        let invocation = Invocation::new(&program)
            .uniform("ourColor", Uniform::Vec4([0.0, 0.5, 0.0, 1.0]))
            .uniform("xOffset", Uniform::Float(0.25));
        assert_eq!(invocation.uniforms.len(), 2);
        assert_eq!(invocation.uniforms[1], ("xOffset", Uniform::Float(0.25)));
        assert!(invocation.samplers.is_empty());
    }

    #[test]
    fn inactive_uniforms_are_skipped() {
        assert_eq!(active_location(-1), None);
        assert_eq!(active_location(0), Some(0));
        assert_eq!(active_location(5), Some(5));
    }

    #[test]
    fn program_is_queued_once_all_clones_drop() {
        let queue = queue::Queue::new();
        let program = Program::new(9, queue.tx());
        let clone = program.clone();
        drop(program);
        assert!(queue.next().is_none());
        drop(clone);
        assert!(matches!(queue.next(), Some(Destroyed::Program(9))));
    }
}
