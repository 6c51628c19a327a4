//! Conversion partner for conventional images
//!
//! [`ColumnImage`] is the small interface a byte-per-pixel, row-major image
//! type must offer to be converted to and from an [`crate::FxImage`].
//! Transfers happen one column at a time, so neither side needs to
//! materialize the other's full pixel array.
//!
//! With the `image` feature (enabled by default) the trait is implemented for
//! [`image::GrayImage`], treating each luma value as a palette index.

/// Byte-per-pixel image that can be read and written column by column.
pub trait ColumnImage: Sized {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Create a zero-filled image.
    fn blank(width: u32, height: u32) -> Self;

    /// Copy up to `min(buf.len(), height)` pixels of column `x` into `buf`.
    fn column(&self, x: u32, buf: &mut [u8]);

    /// Write up to `min(buf.len(), height)` pixels of `buf` into column `x`.
    fn set_column(&mut self, x: u32, buf: &[u8]);

    /// Whether every pixel is 0.
    fn is_blank(&self) -> bool {
        let mut buf = vec![0u8; self.height() as usize];
        (0..self.width()).all(|x| {
            self.column(x, &mut buf);
            buf.iter().all(|&p| p == 0)
        })
    }
}

#[cfg(feature = "image")]
mod gray {
    use super::ColumnImage;
    use image::{GrayImage, Luma};

    impl ColumnImage for GrayImage {
        fn width(&self) -> u32 {
            image::ImageBuffer::width(self)
        }

        fn height(&self) -> u32 {
            image::ImageBuffer::height(self)
        }

        fn blank(width: u32, height: u32) -> Self {
            GrayImage::new(width, height)
        }

        fn column(&self, x: u32, buf: &mut [u8]) {
            let height = image::ImageBuffer::height(self);
            if x >= image::ImageBuffer::width(self) {
                return;
            }
            for (y, out) in (0..height).zip(buf.iter_mut()) {
                *out = self.get_pixel(x, y).0[0];
            }
        }

        fn set_column(&mut self, x: u32, buf: &[u8]) {
            let height = image::ImageBuffer::height(self);
            if x >= image::ImageBuffer::width(self) {
                return;
            }
            for (y, &value) in (0..height).zip(buf.iter()) {
                self.put_pixel(x, y, Luma([value]));
            }
        }

        fn is_blank(&self) -> bool {
            self.as_raw().iter().all(|&p| p == 0)
        }
    }
}
