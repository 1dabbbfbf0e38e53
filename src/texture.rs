//! GPU-visible pixel container.

use crate::error::{Error, Result};
use crate::gl;
use crate::pixel;
use crate::queue;
use std::{cmp, fmt, hash, ops, path, sync};

/// OpenGL texture ID type.
pub(crate) type Id = u32;

/// Internal format of texture data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// Corresponds to `GL_RGB8`.
    Rgb8,

    /// Correponds to `GL_RGBA8`.
    Rgba8,
}

impl Format {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Format::Rgb8 => gl::RGB8,
            Format::Rgba8 => gl::RGBA8,
        }
    }
}

impl From<pixel::U8> for Format {
    fn from(layout: pixel::U8) -> Self {
        match layout {
            pixel::U8::Rgb => Format::Rgb8,
            pixel::U8::Rgba => Format::Rgba8,
        }
    }
}

/// Checks that `bytes` of pixel data cover a `width` by `height` image.
pub(crate) fn check_data_len(
    width: u32,
    height: u32,
    layout: pixel::U8,
    bytes: usize,
) -> Result<()> {
    let expected = layout.byte_len(width, height);
    if bytes < expected {
        Err(Error::TextureData { expected, actual: bytes })
    } else {
        Ok(())
    }
}

/// Decoded pixels ready for upload.
///
/// Rows are stored bottom-up, which is where OpenGL expects texture
/// coordinate `(0, 0)` to be. The pixel data always covers the whole
/// image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    layout: pixel::U8,
    data: Vec<u8>,
}

impl Image {
    /// Decodes an image file from disk.
    pub fn open<P: AsRef<path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let image = Self::from_dynamic(decoded);
        debug!(
            "Loaded {} ({}x{}, {:?})",
            path.display(),
            image.width,
            image.height,
            image.layout,
        );
        Ok(image)
    }

    /// Flips a decoded image and picks RGB or RGBA by its alpha channel.
    pub fn from_dynamic(decoded: image::DynamicImage) -> Self {
        use image::GenericImageView;

        let flipped = decoded.flipv();
        let (width, height) = (flipped.width(), flipped.height());
        if flipped.color().has_alpha() {
            Self {
                width,
                height,
                layout: pixel::U8::Rgba,
                data: flipped.to_rgba8().into_raw(),
            }
        } else {
            Self {
                width,
                height,
                layout: pixel::U8::Rgb,
                data: flipped.to_rgb8().into_raw(),
            }
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout of the pixel data.
    pub fn layout(&self) -> pixel::U8 {
        self.layout
    }

    /// Tightly packed pixel rows.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Returns the texture back to the factory upon destruction.
pub(crate) struct Destructor {
    id: Id,
    tx: queue::Sender<Id>,
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        queue::release(&self.tx, self.id);
    }
}

/// GPU-visible 2D texture.
#[derive(Clone)]
pub struct Texture2 {
    /// The OpenGL texture ID.
    id: Id,

    width: u32,
    height: u32,
    format: Format,
    mipmap: bool,

    /// Returns the texture back to the factory upon destruction.
    ///
    /// Note: This is cloned by `Sampler`.
    _destructor: sync::Arc<Destructor>,
}

impl Texture2 {
    pub(crate) fn new<F: Into<Format>>(
        id: Id,
        width: u32,
        height: u32,
        mipmap: bool,
        format: F,
        tx: queue::Sender<Id>,
    ) -> Self {
        Texture2 {
            id,
            width,
            height,
            mipmap,
            format: format.into(),
            _destructor: sync::Arc::new(Destructor { id, tx }),
        }
    }

    /// Returns the OpenGL texture ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the internal pixel format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the width of the texture in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if this texture has mipmaps.
    pub fn mipmap(&self) -> bool {
        self.mipmap
    }
}

impl cmp::Eq for Texture2 {}

impl cmp::PartialEq<Self> for Texture2 {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Texture2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Texture2(u32);

        Texture2(self.id).fmt(f)
    }
}

impl hash::Hash for Texture2 {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn rows_are_flipped_bottom_up() {
        let mut img = RgbImage::new(1, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        let image = Image::from_dynamic(DynamicImage::ImageRgb8(img));
        assert_eq!(image.layout, pixel::U8::Rgb);
        assert_eq!(image.data, vec![0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn alpha_selects_rgba() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 128]));
        let image = Image::from_dynamic(DynamicImage::ImageRgba8(img));
        assert_eq!(image.layout, pixel::U8::Rgba);
        assert_eq!((image.width, image.height), (2, 2));
        assert_eq!(image.data.len(), 16);
        assert_eq!(Format::from(image.layout), Format::Rgba8);
    }

    #[test]
    fn grayscale_is_expanded_to_rgb() {
        let img = image::GrayImage::from_pixel(3, 1, image::Luma([7]));
        let image = Image::from_dynamic(DynamicImage::ImageLuma8(img));
        assert_eq!(image.layout, pixel::U8::Rgb);
        assert_eq!(image.data, vec![7; 9]);
    }

    #[test]
    fn short_pixel_data_is_rejected() {
        assert!(check_data_len(2, 2, pixel::U8::Rgb, 12).is_ok());
        assert!(check_data_len(2, 2, pixel::U8::Rgb, 16).is_ok());
        match check_data_len(128, 128, pixel::U8::Rgba, 0) {
            Err(Error::TextureData { expected, actual }) => {
                assert_eq!((expected, actual), (65536, 0));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn decoded_images_cover_their_dimensions() {
        let img = RgbImage::new(3, 5);
        let image = Image::from_dynamic(DynamicImage::ImageRgb8(img));
        let bytes = image.data().len();
        assert!(check_data_len(image.width(), image.height(), image.layout(), bytes).is_ok());
    }

    #[test]
    fn missing_file_is_an_image_error() {
        assert!(matches!(
            Image::open("assets/textures/does-not-exist.png"),
            Err(Error::Image { .. })
        ));
    }
}
