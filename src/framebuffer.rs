//! The window's framebuffer.

/// The color the framebuffer is cleared to at the start of each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<[f32; 4]> for ClearColor {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        ClearColor { r, g, b, a }
    }
}

/// The implicit framebuffer of the window.
///
/// Its dimensions track the window's framebuffer size so that every draw
/// covers the whole window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Returns the implicit framebuffer object.
    pub(crate) fn implicit(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Records a new framebuffer size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_dimensions() {
        let mut framebuffer = Framebuffer::implicit(800, 600);
        framebuffer.resize(1024, 768);
        assert_eq!(framebuffer.dimensions(), (1024, 768));
    }

    #[test]
    fn clear_color_from_array() {
        let color = ClearColor::from([0.2, 0.3, 0.3, 1.0]);
        assert_eq!(color, ClearColor { r: 0.2, g: 0.3, b: 0.3, a: 1.0 });
    }
}
