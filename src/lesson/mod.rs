//! Tutorial lessons.
//!
//! Each lesson is a module exposing a type that implements [`Lesson`]. Lessons
//! never touch the window: they allocate their GL resources in
//! [`Lesson::bootstrap`] and draw one frame per [`Lesson::render_frame`] call.
//! The runner in [`window`] clears the framebuffer beforehand, swaps buffers
//! afterwards and translates window events into [`InputAction`]s.
//!
//! [`Lesson`]: trait.Lesson.html
//! [`Lesson::bootstrap`]: trait.Lesson.html#tymethod.bootstrap
//! [`Lesson::render_frame`]: trait.Lesson.html#tymethod.render_frame
//! [`window`]: ../window/index.html
//! [`InputAction`]: ../input/enum.InputAction.html

use crate::config::Config;
use crate::error::{Error, Result};
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::pipeline::State;
use crate::window;
use std::{fmt, str};

pub mod hello_rectangle;
pub mod hello_triangle;
pub mod hello_window;
pub mod shader_class;
pub mod shader_interpolation;
pub mod shader_uniform;
pub mod textures;
pub mod two_triangles;

/// Passes `aPos` straight through.
pub(crate) const POSITION_VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

pub(crate) const ORANGE_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
";

pub(crate) const YELLOW_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 1.0f, 0.0f, 1.0f);
}
";

/// Per-frame values supplied by the runner.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Seconds elapsed since the window opened.
    pub time: f32,

    /// Fixed-function state, including the current wireframe setting.
    pub state: State,
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum LoopFeedback {
    Continue,
    Exit,
}

/// Lesson interface.
pub trait Lesson: Sized {
    /// Allocate the lesson's GL resources.
    fn bootstrap(factory: &Factory, config: &Config) -> Result<Self>;

    /// Render a frame of the lesson.
    fn render_frame(
        &mut self,
        factory: &Factory,
        framebuffer: &Framebuffer,
        frame: &Frame,
        actions: &[InputAction],
    ) -> LoopFeedback;
}

/// Maps time onto `[0, 1]` along a sine wave.
pub fn pulse_sin(time: f32) -> f32 {
    time.sin() / 2.0 + 0.5
}

/// Maps time onto `[0, 1]` along a cosine wave.
pub fn pulse_cos(time: f32) -> f32 {
    time.cos() / 2.0 + 0.5
}

/// Identifies a lesson by its command line name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LessonId {
    HelloWindow,
    HelloTriangle,
    HelloRectangle,
    TwoTriangles,
    ShaderUniform,
    ShaderInterpolation,
    ShaderClass,
    Textures,
}

impl LessonId {
    /// Every lesson in curriculum order.
    pub const ALL: [LessonId; 8] = [
        LessonId::HelloWindow,
        LessonId::HelloTriangle,
        LessonId::HelloRectangle,
        LessonId::TwoTriangles,
        LessonId::ShaderUniform,
        LessonId::ShaderInterpolation,
        LessonId::ShaderClass,
        LessonId::Textures,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LessonId::HelloWindow => "hello-window",
            LessonId::HelloTriangle => "hello-triangle",
            LessonId::HelloRectangle => "hello-rectangle",
            LessonId::TwoTriangles => "two-triangles",
            LessonId::ShaderUniform => "shader-uniform",
            LessonId::ShaderInterpolation => "shader-interpolation",
            LessonId::ShaderClass => "shader-class",
            LessonId::Textures => "textures",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LessonId::HelloWindow => "open a window and clear it",
            LessonId::HelloTriangle => "one triangle from a vertex buffer",
            LessonId::HelloRectangle => "two triangles sharing vertices through an element buffer",
            LessonId::TwoTriangles => "two vertex arrays drawn with two programs",
            LessonId::ShaderUniform => "color pulsing through a uniform",
            LessonId::ShaderInterpolation => "per-vertex colors interpolated across a triangle",
            LessonId::ShaderClass => "shaders loaded from files, moved with the arrow keys",
            LessonId::Textures => "two textures mixed on a quad, mix adjusted with up/down",
        }
    }

    /// Opens a window and runs the lesson until it is closed.
    pub fn run(self, config: &Config) -> Result<()> {
        info!("Running lesson {}", self);
        match self {
            LessonId::HelloWindow => window::run::<hello_window::HelloWindow>(config),
            LessonId::HelloTriangle => window::run::<hello_triangle::HelloTriangle>(config),
            LessonId::HelloRectangle => window::run::<hello_rectangle::HelloRectangle>(config),
            LessonId::TwoTriangles => window::run::<two_triangles::TwoTriangles>(config),
            LessonId::ShaderUniform => window::run::<shader_uniform::ShaderUniform>(config),
            LessonId::ShaderInterpolation => {
                window::run::<shader_interpolation::ShaderInterpolation>(config)
            }
            LessonId::ShaderClass => window::run::<shader_class::ShaderClass>(config),
            LessonId::Textures => window::run::<textures::Textures>(config),
        }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for LessonId {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        LessonId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == name)
            .ok_or_else(|| Error::UnknownLesson { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for id in LessonId::ALL.iter() {
            assert_eq!(id.name().parse::<LessonId>().unwrap(), *id);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        match "hello-cube".parse::<LessonId>() {
            Err(Error::UnknownLesson { name }) => assert_eq!(name, "hello-cube"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn pulses_stay_in_unit_range() {
        assert!((pulse_sin(0.0) - 0.5).abs() < 1e-6);
        assert!((pulse_cos(0.0) - 1.0).abs() < 1e-6);
        for step in 0 .. 100 {
            let t = step as f32 * 0.37;
            assert!((0.0 ..= 1.0).contains(&pulse_sin(t)));
            assert!((0.0 ..= 1.0).contains(&pulse_cos(t)));
        }
    }
}
