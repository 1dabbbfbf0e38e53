//! Window, context and render loop.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::factory::Factory;
use crate::framebuffer::{ClearColor, Framebuffer};
use crate::input::{InputAction, Wireframe};
use crate::lesson::{Frame, Lesson, LoopFeedback};
use crate::pipeline::State;
use std::time;

use glutin::dpi::{LogicalSize, PhysicalSize};
use glutin::event::{ElementState, Event, KeyboardInput, VirtualKeyCode as Key, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::platform::run_return::EventLoopExtRunReturn;
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest};

/// Translates a window event into a lesson input action.
pub fn translate(event: &WindowEvent) -> Option<InputAction> {
    match *event {
        WindowEvent::CloseRequested => Some(InputAction::Quit),
        WindowEvent::Focused(false) => Some(InputAction::FocusLost),
        WindowEvent::Resized(PhysicalSize { width, height }) => {
            Some(InputAction::Resized { width, height })
        }
        WindowEvent::KeyboardInput {
            input: KeyboardInput { virtual_keycode: Some(key), state, .. },
            ..
        } => translate_key(key, state),
        _ => None,
    }
}

fn translate_key(key: Key, state: ElementState) -> Option<InputAction> {
    match (key, state) {
        (Key::Escape, ElementState::Pressed) => Some(InputAction::Quit),
        (Key::L, ElementState::Pressed) => Some(InputAction::WireframePressed),
        (Key::L, ElementState::Released) => Some(InputAction::WireframeReleased),
        (Key::Up, ElementState::Pressed) => Some(InputAction::Up),
        (Key::Down, ElementState::Pressed) => Some(InputAction::Down),
        (Key::Left, ElementState::Pressed) => Some(InputAction::Left),
        (Key::Right, ElementState::Pressed) => Some(InputAction::Right),
        _ => None,
    }
}

/// Opens a window, bootstraps `L` and renders it until the window closes.
pub fn run<L: Lesson>(config: &Config) -> Result<()> {
    let mut event_loop = EventLoop::new();
    let window_builder = WindowBuilder::new()
        .with_title(config.window.title.clone())
        .with_inner_size(LogicalSize::new(config.window.width, config.window.height));
    let version = (config.context.major, config.context.minor);
    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, version))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(config.window.vsync)
        .build_windowed(window_builder, &event_loop)?;
    let context = unsafe { context.make_current() }.map_err(|(_, err)| Error::Context(err))?;
    info!("Created OpenGL {}.{} core context", version.0, version.1);

    let factory = Factory::new(|sym| context.get_proc_address(sym) as *const _);
    let size = context.window().inner_size();
    let mut framebuffer = Framebuffer::implicit(size.width, size.height);
    factory.resize_viewport(&framebuffer);

    let mut lesson = L::bootstrap(&factory, config)?;
    factory.cleanup();

    let clear = ClearColor::from(config.render.clear_color);
    let mut wireframe = Wireframe::new(config.render.wireframe);
    let mut actions = Vec::new();
    let mut result = Ok(());
    let start = time::Instant::now();

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => {
                if let Some(action) = translate(&event) {
                    actions.push(action);
                }
            }
            Event::MainEventsCleared => {
                for &action in actions.iter() {
                    match action {
                        InputAction::Quit => {
                            *control_flow = ControlFlow::Exit;
                            return;
                        }
                        InputAction::Resized { width, height } => {
                            debug!("Framebuffer resized to {}x{}", width, height);
                            context.resize(PhysicalSize::new(width, height));
                            framebuffer.resize(width, height);
                            factory.resize_viewport(&framebuffer);
                        }
                        _ => {
                            let was_enabled = wireframe.enabled();
                            wireframe.handle(action);
                            if wireframe.enabled() != was_enabled {
                                debug!("Wireframe {}", if was_enabled { "off" } else { "on" });
                            }
                        }
                    }
                }

                let frame = Frame {
                    time: start.elapsed().as_secs_f32(),
                    state: State::with_polygon_mode(wireframe.polygon_mode()),
                };
                factory.clear(clear);
                let feedback = lesson.render_frame(&factory, &framebuffer, &frame, &actions);
                actions.clear();
                if let Err(err) = context.swap_buffers() {
                    result = Err(Error::Context(err));
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                factory.cleanup();
                if feedback == LoopFeedback::Exit {
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    drop(lesson);
    factory.cleanup();
    info!("Window closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(translate_key(Key::Escape, ElementState::Pressed), Some(InputAction::Quit));
        assert_eq!(translate_key(Key::Escape, ElementState::Released), None);
        assert_eq!(translate_key(Key::L, ElementState::Pressed), Some(InputAction::WireframePressed));
        assert_eq!(translate_key(Key::L, ElementState::Released), Some(InputAction::WireframeReleased));
        assert_eq!(translate_key(Key::Up, ElementState::Released), None);
        assert_eq!(translate_key(Key::Right, ElementState::Pressed), Some(InputAction::Right));
        assert_eq!(translate_key(Key::Q, ElementState::Pressed), None);
    }

    #[test]
    fn window_events_map_to_actions() {
        assert_eq!(translate(&WindowEvent::CloseRequested), Some(InputAction::Quit));
        assert_eq!(
            translate(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            Some(InputAction::Resized { width: 640, height: 480 }),
        );
        assert_eq!(translate(&WindowEvent::Focused(false)), Some(InputAction::FocusLost));
        assert_eq!(translate(&WindowEvent::Focused(true)), None);
    }
}
