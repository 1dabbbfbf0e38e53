//! CPU-visible pixel layouts.

use crate::gl;

/// Pixel format where every channel is an unsigned 8-bit integer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum U8 {
    /// `[R, G, B; R, G, ...]`
    Rgb,

    /// `[R, G, B, A; R, ...]`
    Rgba,
}

impl U8 {
    /// Returns `(type, format)` as passed to `glTexImage2D`.
    pub(crate) fn as_gl_enums(self) -> (u32, u32) {
        match self {
            U8::Rgb => (gl::UNSIGNED_BYTE, gl::RGB),
            U8::Rgba => (gl::UNSIGNED_BYTE, gl::RGBA),
        }
    }

    /// Returns the number of channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            U8::Rgb => 3,
            U8::Rgba => 4,
        }
    }

    /// Returns the number of bytes in a tightly packed `width` by `height`
    /// image.
    pub fn byte_len(self, width: u32, height: u32) -> usize {
        self.channels() * width as usize * height as usize
    }

    /// Returns the `GL_UNPACK_ALIGNMENT` that rows of `width` pixels satisfy.
    pub fn unpack_alignment(self, width: u32) -> i32 {
        let row = self.channels() * width as usize;
        match row {
            _ if row % 4 == 0 => 4,
            _ if row % 2 == 0 => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_rows_need_relaxed_alignment() {
        assert_eq!(U8::Rgba.unpack_alignment(3), 4);
        assert_eq!(U8::Rgb.unpack_alignment(4), 4);
        assert_eq!(U8::Rgb.unpack_alignment(2), 2);
        assert_eq!(U8::Rgb.unpack_alignment(3), 1);
    }

    #[test]
    fn channel_orders() {
        assert_eq!(U8::Rgb.as_gl_enums(), (gl::UNSIGNED_BYTE, gl::RGB));
        assert_eq!(U8::Rgba.channels(), 4);
    }

    #[test]
    fn packed_image_length() {
        assert_eq!(U8::Rgb.byte_len(3, 2), 18);
        assert_eq!(U8::Rgba.byte_len(128, 128), 65536);
        assert_eq!(U8::Rgba.byte_len(0, 4), 0);
    }
}
