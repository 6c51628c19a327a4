//! Image comparison and copying

use super::FxImage;
use super::access::{read_column, write_column};
use crate::error::Result;

impl FxImage {
    /// Whether two images hold the same bytes.
    ///
    /// Buffers of different length, with different dimensions, or that fail
    /// validation never compare equal.
    pub fn equals(&self, other: &FxImage) -> bool {
        if self.data.len() != other.data.len() {
            return false;
        }
        match (self.geometry(), other.geometry()) {
            (Ok(a), Ok(b)) if a.width == b.width && a.height == b.height => {
                self.data == other.data
            }
            _ => false,
        }
    }

    /// Copy `src` into this image.
    ///
    /// When both buffers have the same byte length the whole buffer,
    /// header included, is copied. Otherwise the overlapping
    /// `min(width) x min(height)` region of the first frames is transferred
    /// column by column.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if this image is read-only.
    pub fn copy_from(&mut self, src: &FxImage) -> Result<()> {
        let geometry = self.writable_geometry()?;
        let src_geometry = src.geometry()?;
        let w = geometry.width.min(src_geometry.width) as usize;
        let h = geometry.height.min(src_geometry.height) as usize;
        if w == 0 || h == 0 {
            return Ok(());
        }
        if self.data.len() == src.data.len() {
            self.data.copy_from_slice(&src.data);
            return Ok(());
        }

        let mut buf = vec![0u8; h];
        for x in 0..w {
            read_column(&src.data, &src_geometry, x, &mut buf);
            write_column(&mut self.data, &geometry, x, &buf);
        }
        Ok(())
    }
}
