//! Whole-frame color operations

use super::{FrameCanvas, FxImage};
use crate::error::Result;

impl FrameCanvas<'_> {
    /// Paint every pixel of the frame.
    pub fn fill(&mut self, color: u8) {
        let column = vec![color & 0x0F; self.height() as usize];
        for x in 0..self.width() {
            self.set_column(x, &column);
        }
    }

    /// Substitute color `from` with `to` across the frame.
    pub fn replace(&mut self, from: u8, to: u8) {
        let (from, to) = (from & 0x0F, to & 0x0F);
        let mut column = vec![0u8; self.height() as usize];
        for x in 0..self.width() {
            self.column(x, &mut column);
            let mut changed = false;
            for p in column.iter_mut().filter(|p| **p == from) {
                *p = to;
                changed = true;
            }
            if changed {
                self.set_column(x, &column);
            }
        }
    }
}

impl FxImage {
    /// Paint every pixel of frame `frame` with `color`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if the image is read-only.
    pub fn fill(&mut self, color: u8, frame: u32) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.fill(color);
        }
        Ok(())
    }

    /// Replace every pixel of color `from` with `to` in frame `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if the image is read-only.
    pub fn replace(&mut self, from: u8, to: u8, frame: u32) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.replace(from, to);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_one_frame() {
        let mut img = FxImage::new_frames(3, 3, 2);
        img.fill(0x1A, 1).unwrap();
        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(img.get_frame_pixel(1, x, y).unwrap(), 0x0A);
                assert_eq!(img.get_frame_pixel(0, x, y).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_fill_out_of_range_frame() {
        let mut img = FxImage::new(2, 2);
        img.fill(3, 1).unwrap();
        assert_eq!(img, FxImage::new(2, 2));
    }

    #[test]
    fn test_replace() {
        let mut img = FxImage::new(3, 1);
        img.set_pixel(0, 0, 2).unwrap();
        img.set_pixel(2, 0, 2).unwrap();
        img.set_pixel(1, 0, 4).unwrap();
        img.replace(2, 7, 0).unwrap();
        assert_eq!(img.get_pixel(0, 0).unwrap(), 7);
        assert_eq!(img.get_pixel(1, 0).unwrap(), 4);
        assert_eq!(img.get_pixel(2, 0).unwrap(), 7);
    }

    #[test]
    fn test_replace_background() {
        let mut img = FxImage::new(2, 2);
        img.set_pixel(1, 1, 5).unwrap();
        img.replace(0, 9, 0).unwrap();
        assert_eq!(img.get_pixel(0, 0).unwrap(), 9);
        assert_eq!(img.get_pixel(1, 1).unwrap(), 5);
    }
}
