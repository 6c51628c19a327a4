//! FxImage - packed 16-color image container
//!
//! An `FxImage` is one contiguous byte buffer holding a small hashed header
//! followed by 4-bit pixels. A buffer holds one image or a horizontal strip
//! of equal-sized frames.
//!
//! # Pixel layout
//!
//! - Pixels are stored column-major: global column `gx`, row `y` lives at
//!   nibble `gx * height + y` of the pixel data
//! - Frames are concatenated along the width axis, so frame `f` owns global
//!   columns `f * width .. (f + 1) * width`
//! - Two pixels per byte, high nibble first
//!
//! # Integrity
//!
//! Every public accessor validates both header hashes before touching the
//! buffer and fails with [`Error::Corruption`] on mismatch. Dimensions are
//! frozen at construction; only the read-only flag may change afterwards.

mod access;
mod blit;
mod canvas;
mod clip;
mod compare;
mod convert;
mod fill;
mod frame;
pub mod graphics;

pub use blit::BlitMode;
pub use canvas::{FrameCanvas, FrameView};
pub use graphics::Point;

use crate::error::{Error, Result};
use crate::header::{self, FLAG_FROZEN, Field, Geometry};

/// Packed 4-bit image buffer.
///
/// Cloning copies the bytes; the clone is independent of the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FxImage {
    data: Vec<u8>,
}

impl FxImage {
    /// Create a blank single-frame image.
    ///
    /// # Examples
    ///
    /// ```
    /// use fximg_core::FxImage;
    ///
    /// let img = FxImage::new(3, 2);
    /// assert_eq!(img.width().unwrap(), 3);
    /// assert_eq!(img.get_pixel(0, 0).unwrap(), 0);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::new_frames(width, height, 1)
    }

    /// Create a blank strip of `frame_count` frames of `width` x `height`.
    ///
    /// A frame count of 0 is treated as 1. The metadata is frozen before the
    /// image is returned.
    pub fn new_frames(width: u32, height: u32, frame_count: u32) -> Self {
        log::debug!("creating fixed image {width}x{height} with {frame_count} frame(s)");
        Self {
            data: header::encode(width, height, frame_count, false),
        }
    }

    /// Create a blank strip of frames that refuses pixel writes until
    /// [`set_read_only(false)`](Self::set_read_only) is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use fximg_core::{Error, FxImage};
    ///
    /// let mut img = FxImage::new_read_only(2, 2, 1);
    /// assert_eq!(img.set_pixel(0, 0, 3), Err(Error::ReadOnly));
    /// img.set_read_only(false).unwrap();
    /// img.set_pixel(0, 0, 3).unwrap();
    /// ```
    pub fn new_read_only(width: u32, height: u32, frame_count: u32) -> Self {
        log::debug!("creating read-only fixed image {width}x{height} with {frame_count} frame(s)");
        Self {
            data: header::encode(width, height, frame_count, true),
        }
    }

    /// Wrap an existing byte buffer after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Corruption`] if either hash fails,
    /// [`Error::InvalidHeader`] for a reserved size class, or
    /// [`Error::Truncated`] if the buffer is shorter than its header requires.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        header::inspect(&data)?;
        Ok(Self { data })
    }

    /// The raw buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Unchecked mutable access to the raw buffer.
    ///
    /// Nothing is validated here; any later accessor revalidates the header
    /// and reports tampering as [`Error::Corruption`].
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Validate the header and return a snapshot of its contents.
    pub fn geometry(&self) -> Result<Geometry> {
        header::inspect(&self.data)
    }

    /// Frame width in pixels.
    pub fn width(&self) -> Result<u32> {
        header::read_field(&self.data, Field::Width)
    }

    /// Frame height in pixels.
    pub fn height(&self) -> Result<u32> {
        header::read_field(&self.data, Field::Height)
    }

    /// Number of frames.
    pub fn frame_count(&self) -> Result<u32> {
        header::read_field(&self.data, Field::FrameCount)
    }

    /// Byte offset of the pixel data.
    pub fn data_start(&self) -> Result<usize> {
        header::read_field(&self.data, Field::Start).map(|start| start as usize)
    }

    /// Attempt to change the width. Always fails once constructed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImmutableField`]; the buffer is not modified.
    pub fn set_width(&mut self, width: u32) -> Result<()> {
        header::write_field(&mut self.data, Field::Width, width)
    }

    /// Attempt to change the height. Always fails once constructed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImmutableField`]; the buffer is not modified.
    pub fn set_height(&mut self, height: u32) -> Result<()> {
        header::write_field(&mut self.data, Field::Height, height)
    }

    /// Attempt to change the frame count. Always fails once constructed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImmutableField`]; the buffer is not modified.
    pub fn set_frame_count(&mut self, frame_count: u32) -> Result<()> {
        header::write_field(&mut self.data, Field::FrameCount, frame_count)
    }

    /// Whether pixel writes are refused.
    pub fn is_read_only(&self) -> Result<bool> {
        Ok(self.geometry()?.read_only())
    }

    /// Whether the dimension fields are frozen.
    pub fn is_metadata_frozen(&self) -> Result<bool> {
        Ok(self.geometry()?.frozen())
    }

    /// Set or clear the read-only flag.
    ///
    /// The header hash is recomputed when the flag changes.
    pub fn set_read_only(&mut self, read_only: bool) -> Result<()> {
        header::set_read_only(&mut self.data, read_only)
    }

    /// Fresh blank image together with the geometry it was encoded with.
    pub(crate) fn blank(width: u32, height: u32, frame_count: u32) -> (Self, Geometry) {
        let frame_count = frame_count.max(1);
        let img = Self::new_frames(width, height, frame_count);
        let layout = header::compute_layout(width, height, frame_count);
        let geometry = Geometry {
            width,
            height,
            frame_count,
            data_start: layout.data_start,
            header: layout.header | FLAG_FROZEN,
        };
        (img, geometry)
    }

    /// Geometry of an image that is about to be written.
    pub(crate) fn writable_geometry(&self) -> Result<Geometry> {
        let geometry = self.geometry()?;
        if geometry.read_only() {
            return Err(Error::ReadOnly);
        }
        Ok(geometry)
    }
}

impl Default for FxImage {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl TryFrom<Vec<u8>> for FxImage {
    type Error = Error;

    fn try_from(data: Vec<u8>) -> Result<Self> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for FxImage {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
