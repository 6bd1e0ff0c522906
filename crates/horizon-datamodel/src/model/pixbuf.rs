//! Shared image buffers stored in pixbuf columns.
//!
//! Decoding is delegated to the `image` crate; the store only keeps the
//! shared handle it was given.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, GenericImageView, ImageResult, RgbaImage};

/// A shared, immutable image buffer.
///
/// Cloning is cheap and keeps identity: two `Pixbuf`s compare equal only if
/// they share one allocation, which is what a pixbuf column hands back.
///
/// # Example
///
/// ```ignore
/// use horizon_datamodel::model::Pixbuf;
///
/// let logo = Pixbuf::from_file("assets/logo.png")?;
/// println!("{}x{}", logo.width(), logo.height());
/// ```
#[derive(Clone)]
pub struct Pixbuf {
    image: Arc<DynamicImage>,
}

impl Pixbuf {
    /// Creates a fully transparent RGBA buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(DynamicImage::ImageRgba8(RgbaImage::new(width, height)))
    }

    /// Takes ownership of an already decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// Loads and decodes an image file; the format is taken from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> ImageResult<Self> {
        let path = path.as_ref();
        let image = image::open(path)?;
        tracing::debug!(
            target: horizon_datamodel_core::logging::targets::STORE,
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "decoded pixbuf"
        );
        Ok(Self::from_image(image))
    }

    /// Decodes an in-memory encoded image.
    pub fn from_bytes(bytes: &[u8]) -> ImageResult<Self> {
        image::load_from_memory(bytes).map(Self::from_image)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The decoded image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Returns `true` if both handles share one buffer.
    pub fn ptr_eq(&self, other: &Pixbuf) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl PartialEq for Pixbuf {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Pixbuf {}

impl fmt::Debug for Pixbuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pixbuf")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("ptr", &Arc::as_ptr(&self.image))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dimensions() {
        let pixbuf = Pixbuf::new(4, 3);
        assert_eq!(pixbuf.width(), 4);
        assert_eq!(pixbuf.height(), 3);
    }

    #[test]
    fn test_identity_equality() {
        let a = Pixbuf::new(1, 1);
        let b = Pixbuf::new(1, 1);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(Pixbuf::from_bytes(b"definitely not an image").is_err());
    }
}
