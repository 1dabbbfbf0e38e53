//! An empty window cleared to the configured color.

use crate::config::Config;
use crate::error::Result;
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::InputAction;
use crate::lesson::{Frame, Lesson, LoopFeedback};

pub struct HelloWindow;

impl Lesson for HelloWindow {
    fn bootstrap(_: &Factory, _: &Config) -> Result<Self> {
        Ok(HelloWindow)
    }

    fn render_frame(
        &mut self,
        _: &Factory,
        _: &Framebuffer,
        _: &Frame,
        _: &[InputAction],
    ) -> LoopFeedback {
        LoopFeedback::Continue
    }
}
