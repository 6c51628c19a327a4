//! Conversion to and from conventional images
//!
//! See [`crate::ColumnImage`] for the interface the other side provides.

use super::FxImage;
use super::access::{read_column, write_column};
use crate::error::Result;
use crate::external::ColumnImage;

impl FxImage {
    /// Build a single-frame image from an external image.
    ///
    /// Pixel values are masked to 4 bits.
    pub fn from_external<I: ColumnImage>(src: &I) -> FxImage {
        let (mut img, geometry) = FxImage::blank(src.width(), src.height(), 1);
        if src.is_blank() {
            return img;
        }
        let mut buf = vec![0u8; src.height() as usize];
        for x in 0..src.width() {
            src.column(x, &mut buf);
            write_column(&mut img.data, &geometry, x as usize, &buf);
        }
        img
    }

    /// Build a multi-frame strip from a list of external images.
    ///
    /// Every frame takes the largest width and height in the list, and each
    /// image is centered in its frame. An empty list yields a blank 0x0
    /// single-frame image.
    pub fn from_external_frames<I: ColumnImage>(frames: &[I]) -> FxImage {
        if frames.is_empty() {
            return FxImage::new(0, 0);
        }
        let width = frames.iter().map(ColumnImage::width).max().unwrap_or(0);
        let height = frames.iter().map(ColumnImage::height).max().unwrap_or(0);
        log::debug!(
            "packing {} external frame(s) into {width}x{height} cells",
            frames.len()
        );

        let count = u32::try_from(frames.len()).unwrap_or(u32::MAX);
        let (mut img, geometry) = FxImage::blank(width, height, count);
        if frames.iter().all(ColumnImage::is_blank) {
            return img;
        }

        let mut column = vec![0u8; height as usize];
        for (idx, frame) in frames.iter().enumerate().take(count as usize) {
            let sx = ((width - frame.width()) >> 1) as usize;
            let sy = ((height - frame.height()) >> 1) as usize;
            let fh = frame.height() as usize;
            let base = idx * width as usize + sx;
            for x in 0..frame.width() {
                column.fill(0);
                frame.column(x, &mut column[sy..sy + fh]);
                write_column(&mut img.data, &geometry, base + x as usize, &column);
            }
        }
        img
    }

    /// Convert the first frame to an external image.
    pub fn to_external<I: ColumnImage>(&self) -> Result<I> {
        self.frame_to_external(0)
    }

    /// Convert every frame to its own external image.
    pub fn to_external_frames<I: ColumnImage>(&self) -> Result<Vec<I>> {
        let count = self.frame_count()?;
        (0..count).map(|idx| self.frame_to_external(idx)).collect()
    }

    fn frame_to_external<I: ColumnImage>(&self, idx: u32) -> Result<I> {
        let geometry = self.geometry()?;
        let mut out = I::blank(geometry.width, geometry.height);
        let base = idx as usize * geometry.width as usize;
        let mut buf = vec![0u8; geometry.height as usize];
        for x in 0..geometry.width {
            read_column(&self.data, &geometry, base + x as usize, &mut buf);
            out.set_column(x, &buf);
        }
        Ok(out)
    }
}
