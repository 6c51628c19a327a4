//! Rotation operations
//!
//! This module provides:
//! - Orthogonal rotations by quarter turns
//! - Arbitrary rotations by integer angles (256 steps per turn)
//! - Rotation sheets: one rotated copy per frame, for sprite animation
//!
//! # Conventions
//!
//! Arbitrary rotations grow the canvas to [`rotated_bounds`] and keep the
//! image centered. Destination pixels are reverse-mapped into the source, so
//! the result has no holes. Color 0 is treated as background and never copied.

use crate::TransformResult;
use crate::sine::{UNIT, icos, isin};
use fximg_core::{BlitMode, FxImage};
use log::debug;

/// Angle (in 256ths of a turn) whose bounds every rotation sheet frame covers.
const DIAGONAL: i32 = 32;

/// Rotate the first frame of `img` by `quads` quarter turns.
///
/// Only `quads & 3` matters. A quarter turn maps `(x, y)` to
/// `(y, w - 1 - x)`, a half turn to `(w - 1 - x, h - 1 - y)` and three
/// quarters to `(h - 1 - y, x)`. Odd multiples swap width and height. Zero
/// quarter turns return a clone of the whole image.
///
/// # Errors
///
/// Returns an error if `img` fails validation.
pub fn rotate_orth(img: &FxImage, quads: i32) -> TransformResult<FxImage> {
    let geometry = img.geometry()?;
    let quads = quads & 3;
    if quads == 0 {
        return Ok(img.clone());
    }
    let (w, h) = (geometry.width, geometry.height);
    let (nw, nh) = if quads & 1 == 1 { (h, w) } else { (w, h) };
    debug!("rotate_orth {}x{} by {} quarter turn(s)", w, h, quads);

    let mut dst = FxImage::new(nw, nh);
    let Some(view) = img.frame_view(0)? else {
        return Ok(dst);
    };
    if let Some(mut canvas) = dst.frame_canvas(0)? {
        let (w, h) = (w as i64, h as i64);
        let mut column = vec![0u8; nh as usize];
        for nx in 0..nw {
            let nx64 = nx as i64;
            for (ny, pixel) in column.iter_mut().enumerate() {
                let ny = ny as i64;
                *pixel = match quads {
                    1 => view.get(w - 1 - ny, nx64),
                    2 => view.get(w - 1 - nx64, h - 1 - ny),
                    _ => view.get(ny, h - 1 - nx64),
                };
            }
            canvas.set_column(nx, &column);
        }
    }
    Ok(dst)
}

/// Size of the canvas that holds a `width` x `height` image rotated by
/// `theta` (in 256ths of a turn).
///
/// The size is `(|cos| * w + |sin| * h) / 120 + 3` by
/// `(|sin| * w + |cos| * h) / 120 + 3`, leaving a margin for rounding.
pub fn rotated_bounds(width: u32, height: u32, theta: i32) -> (u32, u32) {
    let s = isin(theta).unsigned_abs() as u64;
    let c = icos(theta).unsigned_abs() as u64;
    let (w, h) = (width as u64, height as u64);
    let unit = UNIT as u64;
    let nw = (c * w + s * h) / unit + 3;
    let nh = (s * w + c * h) / unit + 3;
    (
        nw.min(u32::MAX as u64) as u32,
        nh.min(u32::MAX as u64) as u32,
    )
}

/// Rotate the first frame of `img` by `theta` (in 256ths of a turn, any
/// integer accepted) about its center.
///
/// The result has the size given by [`rotated_bounds`]. Each destination
/// pixel at offset `(dx, dy)` from the destination center samples the source
/// at `((dx*cos - dy*sin) / 120, (dx*sin + dy*cos) / 120)` from the source
/// center, with truncating division. Out-of-range samples and color 0 leave
/// the destination at 0.
///
/// # Errors
///
/// Returns an error if `img` fails validation.
///
/// # Examples
///
/// ```
/// use fximg_core::FxImage;
/// use fximg_transform::{rotate, rotated_bounds};
///
/// let mut img = FxImage::new(3, 3);
/// img.fill(4, 0).unwrap();
/// let out = rotate(&img, 0).unwrap();
/// assert_eq!((out.width().unwrap(), out.height().unwrap()), rotated_bounds(3, 3, 0));
/// assert_eq!(out.get_pixel(3, 3).unwrap(), 4);
/// ```
pub fn rotate(img: &FxImage, theta: i32) -> TransformResult<FxImage> {
    let geometry = img.geometry()?;
    let (ow, oh) = (geometry.width, geometry.height);
    let (nw, nh) = rotated_bounds(ow, oh, theta);
    debug!("rotate {}x{} by {} -> {}x{}", ow, oh, theta & 0xFF, nw, nh);

    let mut dst = FxImage::new(nw, nh);
    let Some(view) = img.frame_view(0)? else {
        return Ok(dst);
    };
    let s = isin(theta) as i64;
    let c = icos(theta) as i64;
    let unit = UNIT as i64;
    let (src_cx, src_cy) = ((ow >> 1) as i64, (oh >> 1) as i64);
    let (dst_cx, dst_cy) = ((nw >> 1) as i64, (nh >> 1) as i64);

    if let Some(mut canvas) = dst.frame_canvas(0)? {
        let mut column = vec![0u8; nh as usize];
        for tx in 0..nw {
            let dx = tx as i64 - dst_cx;
            let mut any = false;
            for (ty, pixel) in column.iter_mut().enumerate() {
                let dy = ty as i64 - dst_cy;
                let sx = (dx * c - dy * s) / unit + src_cx;
                let sy = (dx * s + dy * c) / unit + src_cy;
                *pixel = view.get(sx, sy);
                any |= *pixel != 0;
            }
            if any {
                canvas.set_column(tx, &column);
            }
        }
    }
    Ok(dst)
}

/// Build a multi-frame image holding `count` evenly spaced rotations of the
/// first frame of `img`.
///
/// Frame `i` holds the rotation by `i * (256 / count)`, stamped transparently
/// and centered. Every frame has the same size: the component-wise maximum
/// of the bounds at 45 degrees and the bounds of every generated rotation.
/// A `count` below 1 is treated as 1.
///
/// # Errors
///
/// Returns an error if `img` fails validation.
pub fn rotation_sheet(img: &FxImage, count: i32) -> TransformResult<FxImage> {
    let geometry = img.geometry()?;
    let count = count.max(1);
    let step = 256 / count;
    let (w, h) = (geometry.width, geometry.height);

    let (mut fw, mut fh) = rotated_bounds(w, h, DIAGONAL);
    for i in 0..count {
        let (bw, bh) = rotated_bounds(w, h, i.wrapping_mul(step));
        fw = fw.max(bw);
        fh = fh.max(bh);
    }
    debug!("rotation_sheet {}x{} x{} -> frames of {}x{}", w, h, count, fw, fh);

    let mut sheet = FxImage::new_frames(fw, fh, count as u32);
    for i in 0..count {
        let rotated = rotate(img, i.wrapping_mul(step))?;
        let Some(view) = rotated.frame_view(0)? else {
            continue;
        };
        let x = ((fw - view.width()) >> 1) as i32;
        let y = ((fh - view.height()) >> 1) as i32;
        if let Some(mut canvas) = sheet.frame_canvas(i as u32)? {
            canvas.blit(&view, x, y, BlitMode::Transparent);
        }
    }
    Ok(sheet)
}
