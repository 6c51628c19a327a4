//! Pixel and column access on the packed nibble array
//!
//! Pixel `i` of the data area lives in byte `data_start + i / 2`; even
//! indices use the high nibble, odd indices the low nibble. A column of
//! global index `gx` starts at nibble `gx * height`. When that index is even
//! the column is byte-aligned and transfers two pixels per byte; otherwise
//! the first pixel shares its byte with the previous column. Nibbles that
//! belong to neighbouring columns are always preserved.

use super::FxImage;
use crate::error::Result;
use crate::header::Geometry;

pub(crate) fn read_nibble(data: &[u8], geometry: &Geometry, index: usize) -> u8 {
    let byte = data[geometry.data_start + index / 2];
    if index & 1 == 0 { byte >> 4 } else { byte & 0x0F }
}

pub(crate) fn write_nibble(data: &mut [u8], geometry: &Geometry, index: usize, color: u8) {
    let color = color & 0x0F;
    let pos = geometry.data_start + index / 2;
    let byte = data[pos];
    let updated = if index & 1 == 0 {
        (color << 4) | (byte & 0x0F)
    } else {
        (byte & 0xF0) | color
    };
    if updated != byte {
        data[pos] = updated;
    }
}

/// Copy `min(buf.len(), height)` pixels of global column `column` into `buf`.
pub(crate) fn read_column(data: &[u8], geometry: &Geometry, column: usize, buf: &mut [u8]) {
    let height = geometry.height as usize;
    let len = buf.len().min(height);
    if len == 0 || column >= geometry.total_columns() {
        return;
    }

    let start = column * height;
    let mut pos = geometry.data_start + start / 2;
    let mut i = 0;

    if start & 1 == 1 {
        buf[0] = data[pos] & 0x0F;
        i = 1;
        pos += 1;
    }
    while i + 1 < len {
        let byte = data[pos];
        buf[i] = byte >> 4;
        buf[i + 1] = byte & 0x0F;
        i += 2;
        pos += 1;
    }
    if i < len {
        buf[i] = data[pos] >> 4;
    }
}

/// Write `min(buf.len(), height)` pixels of `buf` into global column `column`.
pub(crate) fn write_column(data: &mut [u8], geometry: &Geometry, column: usize, buf: &[u8]) {
    let height = geometry.height as usize;
    let len = buf.len().min(height);
    if len == 0 || column >= geometry.total_columns() {
        return;
    }

    let start = column * height;
    let mut pos = geometry.data_start + start / 2;
    let mut i = 0;

    if start & 1 == 1 {
        data[pos] = (data[pos] & 0xF0) | (buf[0] & 0x0F);
        i = 1;
        pos += 1;
    }
    while i + 1 < len {
        data[pos] = (buf[i] << 4) | (buf[i + 1] & 0x0F);
        i += 2;
        pos += 1;
    }
    if i < len {
        data[pos] = (buf[i] << 4) | (data[pos] & 0x0F);
    }
}

impl FxImage {
    /// Get the pixel at `(x, y)` of the first frame.
    ///
    /// Coordinates outside the image read as 0.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<u8> {
        self.get_frame_pixel(0, x, y)
    }

    /// Set the pixel at `(x, y)` of the first frame to `color & 0xF`.
    ///
    /// Coordinates outside the image are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if the image is read-only.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) -> Result<()> {
        self.set_frame_pixel(0, x, y, color)
    }

    /// Get the pixel at `(x, y)` of frame `frame`.
    ///
    /// Out-of-range frames and coordinates read as 0.
    pub fn get_frame_pixel(&self, frame: u32, x: i32, y: i32) -> Result<u8> {
        Ok(self
            .frame_view(frame)?
            .map_or(0, |view| view.get(x as i64, y as i64)))
    }

    /// Set the pixel at `(x, y)` of frame `frame` to `color & 0xF`.
    ///
    /// Out-of-range frames and coordinates are ignored. The byte is left
    /// untouched when it already holds the color.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if the image is read-only.
    pub fn set_frame_pixel(&mut self, frame: u32, x: i32, y: i32, color: u8) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.plot(x as i64, y as i64, color);
        }
        Ok(())
    }

    /// Copy global column `column` into `buf`.
    ///
    /// Transfers `min(buf.len(), height)` pixels. Columns are numbered across
    /// all frames, so frame `f` starts at column `f * width`. An out-of-range
    /// column or an empty buffer leaves `buf` untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use fximg_core::FxImage;
    ///
    /// let mut img = FxImage::new(2, 3);
    /// img.set_column(1, &[4, 5, 6]).unwrap();
    /// let mut buf = [0u8; 3];
    /// img.get_column(1, &mut buf).unwrap();
    /// assert_eq!(buf, [4, 5, 6]);
    /// ```
    pub fn get_column(&self, column: u32, buf: &mut [u8]) -> Result<()> {
        let geometry = self.geometry()?;
        read_column(&self.data, &geometry, column as usize, buf);
        Ok(())
    }

    /// Write `buf` into global column `column`.
    ///
    /// Transfers `min(buf.len(), height)` pixels, each masked to 4 bits.
    /// Pixels of neighbouring columns that share a byte are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if the image is read-only.
    pub fn set_column(&mut self, column: u32, buf: &[u8]) -> Result<()> {
        let geometry = self.writable_geometry()?;
        write_column(&mut self.data, &geometry, column as usize, buf);
        Ok(())
    }
}
