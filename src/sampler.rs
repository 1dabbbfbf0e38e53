//! Texture plus sampling properties.

use crate::gl;
use crate::texture::Texture2;

/// Texture filtering mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Filter {
    /// Nearest texel.
    Nearest,

    /// Linear filter.
    Linear,

    /// Nearest texel of the nearest mipmap level.
    NearestMipmapNearest,

    /// Linear filter across the two nearest mipmap levels.
    LinearMipmapLinear,
}

impl Filter {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Filter::Nearest => gl::NEAREST,
            Filter::Linear => gl::LINEAR,
            Filter::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
            Filter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
        }
    }
}

/// Texture co-ordinate wrapping mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Wrap {
    /// Repeat.
    Repeat,

    /// Repeat, mirroring every other tile.
    MirroredRepeat,

    /// Clamp co-ordinates to the edge texels.
    ClampToEdge,

    /// Co-ordinates outside the texture read the border color.
    ClampToBorder,
}

impl Wrap {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Wrap::Repeat => gl::REPEAT,
            Wrap::MirroredRepeat => gl::MIRRORED_REPEAT,
            Wrap::ClampToEdge => gl::CLAMP_TO_EDGE,
            Wrap::ClampToBorder => gl::CLAMP_TO_BORDER,
        }
    }
}

/// A 2D texture with its sampling properties.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sampler {
    texture: Texture2,

    /// Specifies the magnification filter.
    ///
    /// Default: `Linear`.
    pub mag_filter: Filter,

    /// Specifies the minification filter.
    ///
    /// Default: `LinearMipmapLinear` if the texture has mipmaps, `Linear`
    /// otherwise.
    pub min_filter: Filter,

    /// Specifies the wrapping mode for the S axis.
    ///
    /// Default: `Repeat`.
    pub wrap_s: Wrap,

    /// Specifies the wrapping mode for the T axis.
    ///
    /// Default: `Repeat`.
    pub wrap_t: Wrap,
}

impl Sampler {
    /// Samples a texture with the default properties.
    pub fn from_texture2(texture: Texture2) -> Self {
        let min_filter = if texture.mipmap() {
            Filter::LinearMipmapLinear
        } else {
            Filter::Linear
        };
        Self {
            texture,
            mag_filter: Filter::Linear,
            min_filter,
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.texture.id()
    }

    pub(crate) fn ty(&self) -> u32 {
        gl::TEXTURE_2D
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue;
    use crate::texture::Format;

    #[test]
    fn default_min_filter_follows_mipmaps() {
        let queue = queue::Queue::new();
        let plain = Texture2::new(1, 4, 4, false, Format::Rgb8, queue.tx());
        let mipmapped = Texture2::new(2, 4, 4, true, Format::Rgb8, queue.tx());
        assert_eq!(Sampler::from_texture2(plain).min_filter, Filter::Linear);
        assert_eq!(
            Sampler::from_texture2(mipmapped).min_filter,
            Filter::LinearMipmapLinear,
        );
    }

    #[test]
    fn parameters_map_to_gl() {
        assert_eq!(Filter::LinearMipmapLinear.as_gl_enum(), gl::LINEAR_MIPMAP_LINEAR);
        assert_eq!(Filter::Nearest.as_gl_enum(), gl::NEAREST);
        assert_eq!(Wrap::MirroredRepeat.as_gl_enum(), gl::MIRRORED_REPEAT);
    }
}
