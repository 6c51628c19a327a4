//! Image stamping

use super::{FrameCanvas, FrameView, FxImage};
use crate::error::Result;

/// How source pixels are combined with the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlitMode {
    /// Every source pixel replaces the destination pixel
    #[default]
    Opaque,
    /// Source pixels of color 0 leave the destination untouched
    Transparent,
}

impl BlitMode {
    /// Whether a source pixel of `color` is written in this mode.
    pub fn paints(self, color: u8) -> bool {
        self == BlitMode::Opaque || color != 0
    }
}

impl FrameCanvas<'_> {
    /// Stamp `src` with its top-left corner at `(x, y)`.
    ///
    /// Columns and rows falling outside this frame are skipped. A destination
    /// column is only written back when one of its pixels changed.
    pub fn blit(&mut self, src: &FrameView<'_>, x: i32, y: i32, mode: BlitMode) {
        let dw = self.width() as i64;
        let dh = self.height() as i64;
        let mut src_column = vec![0u8; src.height() as usize];
        let mut dst_column = vec![0u8; dh as usize];

        for sx in 0..src.width() {
            let tx = x as i64 + sx as i64;
            if tx < 0 {
                continue;
            }
            if tx >= dw {
                break;
            }
            src.column(sx, &mut src_column);
            self.column(tx as u32, &mut dst_column);

            let mut changed = false;
            for (sy, &color) in src_column.iter().enumerate() {
                let ty = y as i64 + sy as i64;
                if ty < 0 {
                    continue;
                }
                if ty >= dh {
                    break;
                }
                if !mode.paints(color) || dst_column[ty as usize] == color {
                    continue;
                }
                dst_column[ty as usize] = color;
                changed = true;
            }
            if changed {
                self.set_column(tx as u32, &dst_column);
            }
        }
    }
}

impl FxImage {
    /// Stamp the first frame of `src` onto frame `frame` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if this image is read-only, or an
    /// integrity error if either image fails validation.
    pub fn blit(
        &mut self,
        src: &FxImage,
        x: i32,
        y: i32,
        mode: BlitMode,
        frame: u32,
    ) -> Result<()> {
        let Some(view) = src.frame_view(0)? else {
            return Ok(());
        };
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.blit(&view, x, y, mode);
        }
        Ok(())
    }

    /// Stamp `src` opaquely onto frame `frame` at `(x, y)`.
    pub fn draw_image(&mut self, src: &FxImage, x: i32, y: i32, frame: u32) -> Result<()> {
        self.blit(src, x, y, BlitMode::Opaque, frame)
    }

    /// Stamp `src` onto frame `frame` at `(x, y)`, skipping color 0.
    pub fn draw_transparent_image(
        &mut self,
        src: &FxImage,
        x: i32,
        y: i32,
        frame: u32,
    ) -> Result<()> {
        self.blit(src, x, y, BlitMode::Transparent, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn stamp() -> FxImage {
        let mut img = FxImage::new(2, 2);
        img.set_pixel(0, 0, 3).unwrap();
        img.set_pixel(1, 1, 4).unwrap();
        img
    }

    #[test]
    fn test_blit_opaque() {
        let mut dst = FxImage::new(4, 4);
        dst.fill(9, 0).unwrap();
        dst.draw_image(&stamp(), 1, 1, 0).unwrap();
        assert_eq!(dst.get_pixel(1, 1).unwrap(), 3);
        assert_eq!(dst.get_pixel(2, 1).unwrap(), 0);
        assert_eq!(dst.get_pixel(2, 2).unwrap(), 4);
        assert_eq!(dst.get_pixel(0, 0).unwrap(), 9);
    }

    #[test]
    fn test_blit_transparent() {
        let mut dst = FxImage::new(4, 4);
        dst.fill(9, 0).unwrap();
        dst.draw_transparent_image(&stamp(), 1, 1, 0).unwrap();
        assert_eq!(dst.get_pixel(1, 1).unwrap(), 3);
        assert_eq!(dst.get_pixel(2, 1).unwrap(), 9);
        assert_eq!(dst.get_pixel(1, 2).unwrap(), 9);
        assert_eq!(dst.get_pixel(2, 2).unwrap(), 4);
    }

    #[test]
    fn test_blit_clipped() {
        let mut dst = FxImage::new(2, 2);
        dst.draw_image(&stamp(), -1, -1, 0).unwrap();
        assert_eq!(dst.get_pixel(0, 0).unwrap(), 4);
        assert_eq!(dst.get_pixel(1, 1).unwrap(), 0);
        let mut far = FxImage::new(2, 2);
        far.draw_image(&stamp(), 5, 0, 0).unwrap();
        assert_eq!(far, FxImage::new(2, 2));
    }

    #[test]
    fn test_blit_into_frame() {
        let mut dst = FxImage::new_frames(2, 2, 2);
        dst.blit(&stamp(), 0, 0, BlitMode::Opaque, 1).unwrap();
        assert_eq!(dst.get_frame(1).unwrap(), stamp());
        assert_eq!(dst.get_frame(0).unwrap(), FxImage::new(2, 2));
    }

    #[test]
    fn test_blit_read_only() {
        let mut dst = FxImage::new(2, 2);
        dst.set_read_only(true).unwrap();
        assert_eq!(dst.draw_image(&stamp(), 0, 0, 0), Err(Error::ReadOnly));
    }

    #[test]
    fn test_mode_paints() {
        assert!(BlitMode::Opaque.paints(0));
        assert!(!BlitMode::Transparent.paints(0));
        assert!(BlitMode::Transparent.paints(1));
        assert_eq!(BlitMode::default(), BlitMode::Opaque);
    }
}
