//! Validated per-frame views
//!
//! [`FrameView`] and [`FrameCanvas`] are obtained from an [`FxImage`] after
//! one header validation and address a single frame through the packed
//! column algebra. They borrow the image, so the geometry they cache can
//! never outlive the validation that produced it.

use super::FxImage;
use super::access::{read_column, read_nibble, write_column, write_nibble};
use crate::error::Result;
use crate::header::Geometry;

/// Read access to one frame of an image.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    data: &'a [u8],
    geometry: Geometry,
    base: usize,
}

/// Write access to one frame of an image.
#[derive(Debug)]
pub struct FrameCanvas<'a> {
    data: &'a mut [u8],
    geometry: Geometry,
    base: usize,
}

impl FxImage {
    /// Borrow frame `frame` for reading.
    ///
    /// Returns `Ok(None)` when the frame index is out of range.
    pub fn frame_view(&self, frame: u32) -> Result<Option<FrameView<'_>>> {
        let geometry = self.geometry()?;
        if frame >= geometry.frame_count {
            return Ok(None);
        }
        Ok(Some(FrameView {
            data: &self.data,
            geometry,
            base: frame as usize * geometry.width as usize,
        }))
    }

    /// Borrow frame `frame` for writing.
    ///
    /// Returns `Ok(None)` when the frame index is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if the image is read-only, even when
    /// the frame index is out of range.
    pub fn frame_canvas(&mut self, frame: u32) -> Result<Option<FrameCanvas<'_>>> {
        let geometry = self.writable_geometry()?;
        if frame >= geometry.frame_count {
            return Ok(None);
        }
        Ok(Some(FrameCanvas {
            data: &mut self.data,
            geometry,
            base: frame as usize * geometry.width as usize,
        }))
    }
}

macro_rules! frame_reads {
    () => {
        /// Frame width in pixels.
        pub fn width(&self) -> u32 {
            self.geometry.width
        }

        /// Frame height in pixels.
        pub fn height(&self) -> u32 {
            self.geometry.height
        }

        /// Whether `(x, y)` lies inside the frame.
        pub fn contains(&self, x: i64, y: i64) -> bool {
            x >= 0 && y >= 0 && x < self.geometry.width as i64 && y < self.geometry.height as i64
        }

        /// Pixel at `(x, y)`, or 0 outside the frame.
        pub fn get(&self, x: i64, y: i64) -> u8 {
            if !self.contains(x, y) {
                return 0;
            }
            let column = self.base + x as usize;
            read_nibble(
                &*self.data,
                &self.geometry,
                column * self.geometry.height as usize + y as usize,
            )
        }

        /// Copy up to `height` pixels of column `x` into `buf`.
        ///
        /// Columns outside the frame leave `buf` untouched.
        pub fn column(&self, x: u32, buf: &mut [u8]) {
            if x >= self.geometry.width {
                return;
            }
            read_column(&*self.data, &self.geometry, self.base + x as usize, buf);
        }
    };
}

impl FrameView<'_> {
    frame_reads!();
}

impl FrameCanvas<'_> {
    frame_reads!();

    /// Set the pixel at `(x, y)`. Off-frame coordinates are ignored, and the
    /// byte is only written when the stored nibble differs.
    pub fn plot(&mut self, x: i64, y: i64, color: u8) {
        if !self.contains(x, y) {
            return;
        }
        let column = self.base + x as usize;
        write_nibble(
            self.data,
            &self.geometry,
            column * self.geometry.height as usize + y as usize,
            color,
        );
    }

    /// Write up to `height` pixels of `buf` into column `x`.
    ///
    /// Columns outside the frame are ignored.
    pub fn set_column(&mut self, x: u32, buf: &[u8]) {
        if x >= self.geometry.width {
            return;
        }
        write_column(self.data, &self.geometry, self.base + x as usize, buf);
    }

    /// Read-only view of the same frame.
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            data: &*self.data,
            geometry: self.geometry,
            base: self.base,
        }
    }
}
