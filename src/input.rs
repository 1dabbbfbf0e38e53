//! Platform-independent input handling.

use crate::config::WireframeMode;
use crate::pipeline::PolygonMode;

/// An input event handed to lessons.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputAction {
    /// Quit the application.
    Quit,

    /// Wireframe key went down.
    WireframePressed,

    /// Wireframe key went up.
    WireframeReleased,

    /// Up direction.
    Up,

    /// Down direction.
    Down,

    /// Left direction.
    Left,

    /// Right direction.
    Right,

    /// Framebuffer size changed.
    Resized { width: u32, height: u32 },

    /// The window stopped receiving keyboard input.
    FocusLost,
}

/// Tracks whether polygons are drawn filled or as outlines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Wireframe {
    mode: WireframeMode,
    enabled: bool,
    held: bool,
}

impl Wireframe {
    /// Starts in fill mode.
    pub fn new(mode: WireframeMode) -> Self {
        Self {
            mode,
            enabled: false,
            held: false,
        }
    }

    /// Updates the state from an input action.
    pub fn handle(&mut self, action: InputAction) {
        match (self.mode, action) {
            (WireframeMode::Hold, InputAction::WireframePressed) => self.enabled = true,
            (WireframeMode::Hold, InputAction::WireframeReleased) => self.enabled = false,
            (WireframeMode::Click, InputAction::WireframePressed) => {
                // Key repeat delivers repeated presses while held.
                if !self.held {
                    self.enabled = !self.enabled;
                }
                self.held = true;
            }
            (WireframeMode::Click, InputAction::WireframeReleased) => self.held = false,
            // The key release will not arrive while unfocused.
            (WireframeMode::Hold, InputAction::FocusLost) => self.enabled = false,
            (WireframeMode::Click, InputAction::FocusLost) => self.held = false,
            _ => {}
        }
    }

    /// Returns `true` if polygons are drawn as outlines.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the polygon mode to draw with.
    pub fn polygon_mode(&self) -> PolygonMode {
        if self.enabled {
            PolygonMode::Line(1)
        } else {
            PolygonMode::Fill
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::InputAction::*;

    #[test]
    fn hold_mode_follows_the_key() {
        let mut wireframe = Wireframe::new(WireframeMode::Hold);
        assert_eq!(wireframe.polygon_mode(), PolygonMode::Fill);
        wireframe.handle(WireframePressed);
        assert_eq!(wireframe.polygon_mode(), PolygonMode::Line(1));
        wireframe.handle(WireframePressed);
        assert!(wireframe.enabled());
        wireframe.handle(WireframeReleased);
        assert_eq!(wireframe.polygon_mode(), PolygonMode::Fill);
    }

    #[test]
    fn click_mode_flips_once_per_press() {
        let mut wireframe = Wireframe::new(WireframeMode::Click);
        wireframe.handle(WireframePressed);
        wireframe.handle(WireframePressed);
        wireframe.handle(WireframeReleased);
        assert!(wireframe.enabled());
        wireframe.handle(WireframePressed);
        wireframe.handle(WireframeReleased);
        assert!(!wireframe.enabled());
    }

    #[test]
    fn focus_loss_releases_the_held_key() {
        let mut wireframe = Wireframe::new(WireframeMode::Hold);
        wireframe.handle(WireframePressed);
        wireframe.handle(FocusLost);
        assert_eq!(wireframe.polygon_mode(), PolygonMode::Fill);

        let mut wireframe = Wireframe::new(WireframeMode::Click);
        wireframe.handle(WireframePressed);
        wireframe.handle(FocusLost);
        assert!(wireframe.enabled());
        wireframe.handle(WireframePressed);
        assert!(!wireframe.enabled());
    }

    #[test]
    fn other_actions_are_ignored() {
        let mut wireframe = Wireframe::new(WireframeMode::Hold);
        for action in &[Up, Down, Left, Right, Quit, Resized { width: 1, height: 1 }] {
            wireframe.handle(*action);
        }
        assert!(!wireframe.enabled());
    }
}
