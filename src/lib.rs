//! LearnOpenGL tutorial lessons on a thin OpenGL 3.3 core layer.
//!
//! The [`Factory`] creates every GL object and deletes those whose handles
//! have been dropped. Lessons implement [`lesson::Lesson`] and are driven by
//! [`window::run`].
//!
//! [`Factory`]: struct.Factory.html
//! [`lesson::Lesson`]: lesson/trait.Lesson.html
//! [`window::run`]: window/fn.run.html

#[macro_use] extern crate log;

mod queue;
pub mod gl;

pub mod buffer;
pub mod config;
pub mod draw_call;
pub mod error;
pub mod factory;
pub mod framebuffer;
pub mod input;
pub mod lesson;
pub mod pipeline;
pub mod pixel;
pub mod program;
pub mod sampler;
pub mod shader;
pub mod texture;
pub mod vertex_array;
pub mod window;

#[doc(inline)]
pub use buffer::Accessor;

#[doc(inline)]
pub use buffer::Buffer;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use draw_call::DrawCall;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use factory::Factory;

#[doc(inline)]
pub use framebuffer::Framebuffer;

#[doc(inline)]
pub use lesson::LessonId;

#[doc(inline)]
pub use program::Invocation;

#[doc(inline)]
pub use program::Program;

#[doc(inline)]
pub use pipeline::State;

#[doc(inline)]
pub use sampler::Sampler;

#[doc(inline)]
pub use texture::Texture2;

#[doc(inline)]
pub use vertex_array::VertexArray;
