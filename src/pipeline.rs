use crate::gl;

/// Specifies the polygon rasterization method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PolygonMode {
    /// Boundary edges of the polygon are drawn as line segments of the
    /// given width.
    Line(i32),

    /// The interior of the polygon is filled.
    Fill,
}

impl Default for PolygonMode {
    fn default() -> Self {
        PolygonMode::Fill
    }
}

impl PolygonMode {
    pub(crate) fn as_gl_enum(&self) -> u32 {
        match *self {
            PolygonMode::Line(_) => gl::LINE,
            PolygonMode::Fill => gl::FILL,
        }
    }
}

/// Fixed-function state parameters.
///
/// Draws always cover the whole framebuffer with depth testing and face
/// culling left off.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct State {
    /// Specifies the polygon rasterization method.
    pub polygon_mode: PolygonMode,
}

impl State {
    /// Default state drawn with the given polygon mode.
    pub fn with_polygon_mode(polygon_mode: PolygonMode) -> Self {
        Self { polygon_mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_draws_filled() {
        let state = State::default();
        assert_eq!(state.polygon_mode, PolygonMode::Fill);
        assert_eq!(state.polygon_mode.as_gl_enum(), gl::FILL);
    }

    #[test]
    fn wireframe_state_draws_lines() {
        let state = State::with_polygon_mode(PolygonMode::Line(1));
        assert_eq!(state.polygon_mode.as_gl_enum(), gl::LINE);
    }
}
