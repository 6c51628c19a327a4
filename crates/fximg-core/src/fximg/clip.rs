//! Cropping to content

use super::FxImage;
use super::access::{read_column, write_column};
use crate::error::Result;

impl FxImage {
    /// Crop the first frame to the tightest box containing every non-zero
    /// pixel.
    ///
    /// Columns are scanned from the left and right edges first, then rows are
    /// scanned from the top and bottom within that column range. An image
    /// with no non-zero pixel (or no pixels at all) yields a 1x1 blank image.
    pub fn trim(&self) -> Result<FxImage> {
        let geometry = self.geometry()?;
        let height = geometry.height as usize;
        if geometry.width == 0 || height == 0 {
            return Ok(FxImage::new(1, 1));
        }

        let mut buf = vec![0u8; height];
        let column_has_ink = |x: usize, buf: &mut [u8]| {
            read_column(&self.data, &geometry, x, buf);
            buf.iter().any(|&p| p != 0)
        };

        let width = geometry.width as usize;
        let Some(left) = (0..width).find(|&x| column_has_ink(x, &mut buf[..])) else {
            return Ok(FxImage::new(1, 1));
        };
        let right = (left..width)
            .rev()
            .find(|&x| column_has_ink(x, &mut buf[..]))
            .unwrap_or(left);

        let mut top = height;
        let mut bottom = 0;
        for x in left..=right {
            read_column(&self.data, &geometry, x, &mut buf);
            if let Some(y) = buf.iter().position(|&p| p != 0) {
                top = top.min(y);
            }
            if let Some(y) = buf.iter().rposition(|&p| p != 0) {
                bottom = bottom.max(y);
            }
        }

        let out_w = (right - left + 1) as u32;
        let out_h = (bottom - top + 1) as u32;
        let (mut out, out_geometry) = FxImage::blank(out_w, out_h, 1);
        for x in left..=right {
            read_column(&self.data, &geometry, x, &mut buf);
            write_column(&mut out.data, &out_geometry, x - left, &buf[top..=bottom]);
        }
        Ok(out)
    }
}
