//! Frame extraction and replacement
//!
//! A multi-frame image stores its frames side by side. These helpers move
//! whole frames in and out of such a strip, one packed column at a time.

use super::FxImage;
use super::access::{read_column, write_column};
use crate::error::Result;

/// Offset that centers a run of `inner` cells inside `outer` cells.
///
/// Negative when `inner` is larger, in which case the run is cropped
/// around its center.
pub(crate) fn center_offset(outer: u32, inner: u32) -> i64 {
    (outer as i64 - inner as i64) >> 1
}

impl FxImage {
    /// Copy frame `idx` into a new single-frame image.
    ///
    /// An out-of-range `idx` yields a blank image of the frame size.
    pub fn get_frame(&self, idx: u32) -> Result<FxImage> {
        let geometry = self.geometry()?;
        let (mut out, out_geometry) = FxImage::blank(geometry.width, geometry.height, 1);
        if idx >= geometry.frame_count {
            return Ok(out);
        }

        let base = idx as usize * geometry.width as usize;
        let mut buf = vec![0u8; geometry.height as usize];
        for x in 0..geometry.width as usize {
            read_column(&self.data, &geometry, base + x, &mut buf);
            write_column(&mut out.data, &out_geometry, x, &buf);
        }
        Ok(out)
    }

    /// Replace frame `idx` with the first frame of `src`.
    ///
    /// `src` is centered in the frame: padded with 0 when smaller, cropped
    /// around its center when larger. Every pixel of the frame is rewritten,
    /// so pixels not covered by `src` become 0. An out-of-range `idx` is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if this image is read-only.
    pub fn set_frame(&mut self, idx: u32, src: &FxImage) -> Result<()> {
        let geometry = self.writable_geometry()?;
        let src_geometry = src.geometry()?;
        if idx >= geometry.frame_count {
            return Ok(());
        }
        log::debug!(
            "setting frame {idx} from a {}x{} image",
            src_geometry.width,
            src_geometry.height
        );

        let fh = geometry.height as usize;
        let sh = src_geometry.height as usize;
        let ox = center_offset(geometry.width, src_geometry.width);
        let oy = center_offset(geometry.height, src_geometry.height);
        let base = idx as usize * geometry.width as usize;

        let mut column = vec![0u8; fh];
        let mut src_column = vec![0u8; sh];
        for x in 0..geometry.width as i64 {
            column.fill(0);
            let sx = x - ox;
            if (0..src_geometry.width as i64).contains(&sx) {
                read_column(&src.data, &src_geometry, sx as usize, &mut src_column);
                for (sy, &p) in src_column.iter().enumerate() {
                    let dy = sy as i64 + oy;
                    if (0..fh as i64).contains(&dy) {
                        column[dy as usize] = p;
                    }
                }
            }
            write_column(&mut self.data, &geometry, base + x as usize, &column);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn filled(w: u32, h: u32, color: u8) -> FxImage {
        let mut img = FxImage::new(w, h);
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                img.set_pixel(x, y, color).unwrap();
            }
        }
        img
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(5, 3), 1);
        assert_eq!(center_offset(4, 1), 1);
        assert_eq!(center_offset(3, 3), 0);
        assert_eq!(center_offset(2, 5), -2);
    }

    #[test]
    fn test_get_frame() {
        let mut img = FxImage::new_frames(2, 3, 3);
        img.set_frame_pixel(1, 1, 2, 6).unwrap();
        let frame = img.get_frame(1).unwrap();
        assert_eq!(frame.frame_count().unwrap(), 1);
        assert_eq!(frame.width().unwrap(), 2);
        assert_eq!(frame.get_pixel(1, 2).unwrap(), 6);
        assert_eq!(img.get_frame(0).unwrap(), FxImage::new(2, 3));
    }

    #[test]
    fn test_get_frame_out_of_range() {
        let mut img = FxImage::new_frames(2, 2, 2);
        img.set_frame_pixel(1, 0, 0, 3).unwrap();
        assert_eq!(img.get_frame(2).unwrap(), FxImage::new(2, 2));
    }

    #[test]
    fn test_set_frame_same_size() {
        let mut strip = FxImage::new_frames(3, 3, 2);
        let src = filled(3, 3, 4);
        strip.set_frame(1, &src).unwrap();
        assert_eq!(strip.get_frame(1).unwrap(), src);
        assert_eq!(strip.get_frame(0).unwrap(), FxImage::new(3, 3));
    }

    #[test]
    fn test_set_frame_pads_and_clears() {
        let mut strip = FxImage::new_frames(4, 4, 1);
        strip.set_frame(0, &filled(4, 4, 9)).unwrap();
        strip.set_frame(0, &filled(2, 2, 5)).unwrap();
        for x in 0..4 {
            for y in 0..4 {
                let inside = (1..3).contains(&x) && (1..3).contains(&y);
                let expected = if inside { 5 } else { 0 };
                assert_eq!(strip.get_pixel(x, y).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_set_frame_crops_larger_source() {
        let mut src = FxImage::new(4, 4);
        src.set_pixel(1, 1, 7).unwrap();
        src.set_pixel(0, 0, 2).unwrap();
        let mut strip = FxImage::new_frames(2, 2, 1);
        strip.set_frame(0, &src).unwrap();
        assert_eq!(strip.get_pixel(0, 0).unwrap(), 7);
        assert_eq!(strip.get_pixel(1, 1).unwrap(), 0);
    }

    #[test]
    fn test_set_frame_out_of_range_and_read_only() {
        let mut strip = FxImage::new_frames(2, 2, 1);
        let before = strip.clone();
        strip.set_frame(1, &filled(2, 2, 1)).unwrap();
        assert_eq!(strip, before);
        strip.set_read_only(true).unwrap();
        assert_eq!(strip.set_frame(0, &filled(2, 2, 1)), Err(Error::ReadOnly));
    }
}
