//! Image scaling
//!
//! Nearest-neighbor resampling of the first frame. Each destination column
//! is assembled from one source column, so the packed buffer is touched one
//! column at a time on both sides.

use crate::TransformResult;
use fximg_core::FxImage;
use log::debug;

/// Scale the first frame of `img` to `width` x `height`.
///
/// Destination pixel `(x, y)` takes source pixel
/// `(x * src_w / width, y * src_h / height)`. Scaling to the current size
/// returns a clone; an empty source or target yields a blank image.
///
/// # Errors
///
/// Returns an error if `img` fails validation.
///
/// # Examples
///
/// ```
/// use fximg_core::FxImage;
/// use fximg_transform::scale;
///
/// let mut img = FxImage::new(2, 1);
/// img.set_pixel(1, 0, 6).unwrap();
/// let big = scale(&img, 4, 2).unwrap();
/// assert_eq!(big.get_pixel(3, 1).unwrap(), 6);
/// assert_eq!(big.get_pixel(1, 1).unwrap(), 0);
/// ```
pub fn scale(img: &FxImage, width: u32, height: u32) -> TransformResult<FxImage> {
    let geometry = img.geometry()?;
    let (ow, oh) = (geometry.width, geometry.height);
    if ow == width && oh == height {
        return Ok(img.clone());
    }
    debug!("scale {}x{} -> {}x{}", ow, oh, width, height);

    let mut dst = FxImage::new(width, height);
    let Some(view) = img.frame_view(0)? else {
        return Ok(dst);
    };
    if ow == 0 || oh == 0 {
        return Ok(dst);
    }
    if let Some(mut canvas) = dst.frame_canvas(0)? {
        let mut from = vec![0u8; oh as usize];
        let mut to = vec![0u8; height as usize];
        for x in 0..width {
            let sx = (x as u64 * ow as u64 / width as u64) as u32;
            view.column(sx, &mut from);
            for (y, pixel) in to.iter_mut().enumerate() {
                let sy = y as u64 * oh as u64 / height as u64;
                *pixel = from[sy as usize];
            }
            canvas.set_column(x, &to);
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> FxImage {
        let mut img = FxImage::new(2, 2);
        img.set_pixel(0, 0, 1).unwrap();
        img.set_pixel(1, 0, 2).unwrap();
        img.set_pixel(0, 1, 3).unwrap();
        img.set_pixel(1, 1, 4).unwrap();
        img
    }

    #[test]
    fn test_scale_same_size_is_clone() {
        let img = checker();
        assert_eq!(scale(&img, 2, 2).unwrap(), img);
    }

    #[test]
    fn test_scale_up() {
        let big = scale(&checker(), 4, 4).unwrap();
        assert_eq!(big.width().unwrap(), 4);
        assert_eq!(big.height().unwrap(), 4);
        for y in 0..4 {
            for x in 0..4 {
                let expected = checker().get_pixel(x / 2, y / 2).unwrap();
                assert_eq!(big.get_pixel(x, y).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_scale_down() {
        let small = scale(&checker(), 1, 1).unwrap();
        assert_eq!(small.get_pixel(0, 0).unwrap(), 1);
        let row = scale(&checker(), 2, 1).unwrap();
        assert_eq!(row.get_pixel(0, 0).unwrap(), 1);
        assert_eq!(row.get_pixel(1, 0).unwrap(), 2);
    }

    #[test]
    fn test_scale_uses_first_frame() {
        let mut img = FxImage::new_frames(1, 1, 2);
        img.set_frame_pixel(0, 0, 0, 5).unwrap();
        img.set_frame_pixel(1, 0, 0, 9).unwrap();
        let out = scale(&img, 2, 2).unwrap();
        assert_eq!(out.frame_count().unwrap(), 1);
        assert_eq!(out.get_pixel(1, 1).unwrap(), 5);
    }

    #[test]
    fn test_scale_empty() {
        let out = scale(&FxImage::new(0, 0), 3, 2).unwrap();
        assert_eq!(out, FxImage::new(3, 2));
        let none = scale(&checker(), 0, 5).unwrap();
        assert_eq!(none.width().unwrap(), 0);
    }

    #[test]
    fn test_scale_corrupt() {
        let mut img = checker();
        img.as_mut_bytes()[0] ^= 1;
        assert!(scale(&img, 4, 4).is_err());
    }
}
