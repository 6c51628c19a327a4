//! Quad-distortion blit
//!
//! Maps a source image onto an arbitrary destination quadrilateral. Every
//! source texel becomes a small destination quad, obtained by bilinear
//! interpolation of the target corners, and is filled as two triangles.
//!
//! All interpolation is exact integer arithmetic with half-up rounding, so
//! results do not depend on floating point behavior.

use crate::TransformResult;
use fximg_core::{BlitMode, FrameCanvas, FrameView, FxImage, Point};
use log::debug;

/// `n / d` rounded half-up, for `d > 0`.
fn round_half_up(n: i128, d: i128) -> i128 {
    (2 * n + d).div_euclid(2 * d)
}

/// Visit order for `len` indices: center first, then alternating outward.
///
/// For `len == 5` this yields `2, 1, 3, 0, 4`.
fn zigzag(len: u32) -> impl Iterator<Item = u32> {
    (0..len).rev().map(move |n| {
        let half = n >> 1;
        if n & 1 == 1 { half } else { len - 1 - half }
    })
}

/// Target quad corners with the source size they are interpolated over.
struct QuadMap {
    corners: [Point; 4],
    width: i128,
    height: i128,
}

impl QuadMap {
    /// Destination of source lattice point `(a, b)`, with `0 <= a <= width`
    /// and `0 <= b <= height`.
    fn lattice(&self, a: u32, b: u32) -> Point {
        let [tl, tr, br, bl] = self.corners;
        let (a, b) = (a as i128, b as i128);
        let (w, h) = (self.width, self.height);
        let axis = |tl: i32, tr: i32, br: i32, bl: i32| {
            let top = tl as i128 * (w - a) + tr as i128 * a;
            let bottom = bl as i128 * (w - a) + br as i128 * a;
            let n = top * (h - b) + bottom * b;
            round_half_up(n, w * h).clamp(i32::MIN as i128, i32::MAX as i128) as i32
        };
        Point::new(axis(tl.x, tr.x, br.x, bl.x), axis(tl.y, tr.y, br.y, bl.y))
    }

    /// Fill one destination quad per source texel, visiting texels from the
    /// center outward.
    fn draw(&self, canvas: &mut FrameCanvas<'_>, src: &FrameView<'_>, mode: BlitMode) {
        let mut column = vec![0u8; src.height() as usize];
        let (fw, fh) = (canvas.width(), canvas.height());
        for sx in zigzag(src.width()) {
            src.column(sx, &mut column);
            for sy in zigzag(src.height()) {
                let color = column[sy as usize];
                if !mode.paints(color) {
                    continue;
                }
                let q0 = self.lattice(sx, sy);
                let q1 = self.lattice(sx + 1, sy);
                let q2 = self.lattice(sx, sy + 1);
                let q3 = self.lattice(sx + 1, sy + 1);
                if misses(&[q0, q1, q2, q3], fw, fh) {
                    continue;
                }
                canvas.fill_triangle(q1, q0, q3, color);
                canvas.fill_triangle(q2, q0, q3, color);
            }
        }
    }
}

/// Whether the bounding box of `points` misses a `width` x `height` frame.
fn misses(points: &[Point], width: u32, height: u32) -> bool {
    let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.x).max().unwrap_or(-1);
    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(-1);
    max_x < 0 || max_y < 0 || min_x as i64 >= width as i64 || min_y as i64 >= height as i64
}

/// Draw the first frame of `src` into frame `frame` of `dst`, distorted onto
/// the quadrilateral `quad`.
///
/// `quad` lists the target corners as top-left, top-right, bottom-right,
/// bottom-left. In [`BlitMode::Transparent`] source pixels of color 0 are
/// skipped. Texels landing entirely outside the frame are discarded; an
/// empty source or an out-of-range frame leaves `dst` untouched.
///
/// # Errors
///
/// Returns an error if `dst` is read-only or either image fails validation.
///
/// # Examples
///
/// ```
/// use fximg_core::{BlitMode, FxImage, Point};
/// use fximg_transform::draw_distorted;
///
/// let mut src = FxImage::new(2, 2);
/// src.fill(5, 0).unwrap();
/// let mut dst = FxImage::new(8, 8);
/// let quad = [
///     Point::new(0, 0),
///     Point::new(6, 0),
///     Point::new(6, 6),
///     Point::new(0, 6),
/// ];
/// draw_distorted(&mut dst, &src, quad, BlitMode::Opaque, 0).unwrap();
/// assert_eq!(dst.get_pixel(3, 3).unwrap(), 5);
/// assert_eq!(dst.get_pixel(7, 7).unwrap(), 0);
/// ```
pub fn draw_distorted(
    dst: &mut FxImage,
    src: &FxImage,
    quad: [Point; 4],
    mode: BlitMode,
    frame: u32,
) -> TransformResult<()> {
    let Some(mut canvas) = dst.frame_canvas(frame)? else {
        return Ok(());
    };
    let Some(view) = src.frame_view(0)? else {
        return Ok(());
    };
    if view.width() == 0 || view.height() == 0 {
        return Ok(());
    }
    debug!(
        "draw_distorted {}x{} onto {:?} ({:?}, frame {})",
        view.width(),
        view.height(),
        quad,
        mode,
        frame
    );

    let map = QuadMap {
        corners: quad,
        width: view.width() as i128,
        height: view.height() as i128,
    };
    map.draw(&mut canvas, &view, mode);
    Ok(())
}
