//! Graphics rendering on packed frames
//!
//! This module provides integer-only drawing primitives:
//! - Lines (Bresenham)
//! - Rectangles (outline and filled)
//! - Circles and ellipses (midpoint, outline and filled)
//! - Triangles and quadrilaterals (outline and filled)
//!
//! Primitives are implemented on [`FrameCanvas`] so that callers drawing
//! many shapes validate the header once. The [`FxImage`] wrappers take a
//! trailing frame index; an out-of-range frame turns the call into a no-op.
//! Every color is masked to 4 bits and off-frame pixels are clipped.

use super::{FrameCanvas, FxImage};
use crate::error::Result;

/// Integer point in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Order three points by x, keeping the input order among equal x values
/// the way a three-way comparison tree does.
fn sort_by_x(p0: Point, p1: Point, p2: Point) -> [Point; 3] {
    if p0.x <= p1.x && p0.x <= p2.x {
        if p1.x <= p2.x { [p0, p1, p2] } else { [p0, p2, p1] }
    } else if p1.x <= p0.x && p1.x <= p2.x {
        if p0.x <= p2.x { [p1, p0, p2] } else { [p1, p2, p0] }
    } else if p0.x <= p1.x {
        [p2, p0, p1]
    } else {
        [p2, p1, p0]
    }
}

/// `ceil` and `floor` of the y coordinate where column `x` crosses the edge
/// `p -> q`, or `None` when `x` lies outside the edge's x range or the edge
/// is vertical. Requires `p.x <= q.x`.
fn edge_crossing(p: Point, q: Point, x: i64) -> Option<(i64, i64)> {
    let (px, qx) = (p.x as i64, q.x as i64);
    if px == qx || x < px || x > qx {
        return None;
    }
    let num = (x - px) as i128 * (q.y as i128 - p.y as i128);
    let den = (qx - px) as i128;
    let y0 = p.y as i128;
    let floor = y0 + num.div_euclid(den);
    let ceil = y0 - (-num).div_euclid(den);
    Some((ceil as i64, floor as i64))
}

impl FrameCanvas<'_> {
    /// Draw a line from `(x0, y0)` to `(x1, y1)` inclusive.
    ///
    /// Lines whose endpoints both lie beyond the same edge are skipped, and
    /// the walk stops as soon as it leaves the frame moving away from it.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) {
        self.line_i64(x0 as i64, y0 as i64, x1 as i64, y1 as i64, color);
    }

    fn line_i64(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: u8) {
        if x0 == x1 && y0 == y1 {
            self.plot(x0, y0, color);
            return;
        }

        let w = self.width() as i64;
        let h = self.height() as i64;
        if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h)
        {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = (x1 - x0).signum();
        let sy = (y1 - y0).signum();
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
            if (sx < 0 && x < 0) || (sx > 0 && x >= w) || (sy < 0 && y < 0) || (sy > 0 && y >= h) {
                break;
            }
        }
    }

    /// Paint the horizontal run `x0..=x1` on row `y`, clipped to the frame.
    fn hspan(&mut self, x0: i64, x1: i64, y: i64, color: u8) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width() as i64 - 1);
        for x in start..=end {
            self.plot(x, y, color);
        }
    }

    /// Offsets `dy` in `-r..=r` for which row `cy + dy` lies on the frame.
    ///
    /// The range is empty (`top > bottom`) when no row is covered.
    fn row_range(&self, cy: i64, r: i64) -> (i64, i64) {
        let top = (-r).max(-cy);
        let bottom = r.min(self.height() as i64 - 1 - cy);
        (top, bottom)
    }

    /// Paint rows `y0..=y1` of column `x` with one packed read-modify-write.
    fn vspan(&mut self, x: u32, y0: usize, y1: usize, column: &mut [u8], color: u8) {
        self.column(x, column);
        column[y0..=y1].fill(color);
        self.set_column(x, column);
    }

    /// Draw the outline of a `width` x `height` rectangle at `(x, y)`.
    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u8) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (x0, y0) = (x as i64, y as i64);
        let x1 = x0 + width as i64 - 1;
        let y1 = y0 + height as i64 - 1;
        self.line_i64(x0, y0, x1, y0, color);
        self.line_i64(x0, y1, x1, y1, color);
        self.line_i64(x0, y0, x0, y1, color);
        self.line_i64(x1, y0, x1, y1, color);
    }

    /// Fill a `width` x `height` rectangle at `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u8) {
        if width <= 0 || height <= 0 {
            return;
        }
        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + width as i64).min(self.width() as i64);
        let y1 = (y as i64 + height as i64).min(self.height() as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let color = color & 0x0F;
        let mut column = vec![0u8; self.height() as usize];
        for cx in x0..x1 {
            self.vspan(cx as u32, y0 as usize, y1 as usize - 1, &mut column, color);
        }
    }

    /// Draw a circle outline of radius `r` centered at `(cx, cy)`.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: u8) {
        if r < 1 {
            return;
        }
        let (cx, cy) = (cx as i64, cy as i64);
        let mut x = r as i64;
        let mut y = 0i64;
        let mut err = 1 - 2 * x;

        while x >= y {
            for (px, py) in [
                (x, y),
                (-x, y),
                (x, -y),
                (-x, -y),
                (y, x),
                (-y, x),
                (y, -x),
                (-y, -x),
            ] {
                self.plot(cx + px, cy + py, color);
            }
            y += 1;
            if err <= 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Fill a circle of radius `r` centered at `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: u8) {
        if r < 1 {
            return;
        }
        let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
        let (top, bottom) = self.row_range(cy, r);
        for dy in top..=bottom {
            let half = ((r * r - dy * dy) as u64).isqrt() as i64;
            self.hspan(cx - half, cx + half, cy + dy, color);
        }
    }

    /// Draw an ellipse outline with radii `rx`, `ry` centered at `(cx, cy)`.
    ///
    /// The curve is traced over the bounding box
    /// `(cx - rx, cy - ry)..=(cx + rx, cy + ry)`. Negative radii are taken
    /// as their absolute value; equal radii draw a circle.
    pub fn oval(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: u8) {
        let rx = (rx as i64).abs();
        let ry = (ry as i64).abs();
        if rx == 0 || ry == 0 {
            return;
        }
        if rx == ry {
            self.circle(cx, cy, rx as i32, color);
            return;
        }

        let (cx, cy) = (cx as i64, cy as i64);
        let a = 2 * rx as i128;
        let b = 2 * ry as i128;
        let mut b1 = b & 1;
        let mut dx = 4 * (1 - a) * b * b;
        let mut dy = 4 * (b1 + 1) * a * a;
        let mut err = dx + dy + b1 * a * a;

        let mut x0 = cx - rx;
        let mut x1 = cx + rx;
        let mut y0 = cy - ry + ((b as i64 + 1) >> 1);
        let mut y1 = y0 - b1 as i64;
        let a8 = 8 * a * a;
        b1 = 8 * b * b;

        loop {
            self.plot(x1, y0, color);
            self.plot(x0, y0, color);
            self.plot(x0, y1, color);
            self.plot(x1, y1, color);
            let e2 = 2 * err;
            if e2 <= dy {
                y0 += 1;
                y1 -= 1;
                dy += a8;
                err += dy;
            }
            if e2 >= dx || 2 * err > dy {
                x0 += 1;
                x1 -= 1;
                dx += b1;
                err += dx;
            }
            if x0 > x1 {
                break;
            }
        }

        // flat ellipses finish with vertical caps
        while ((y0 - y1) as i128) < b {
            self.plot(x0 - 1, y0, color);
            self.plot(x1 + 1, y0, color);
            y0 += 1;
            self.plot(x0 - 1, y1, color);
            self.plot(x1 + 1, y1, color);
            y1 -= 1;
        }
    }

    /// Fill an ellipse with radii `rx`, `ry` centered at `(cx, cy)`.
    pub fn fill_oval(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: u8) {
        let rx = (rx as i64).abs();
        let ry = (ry as i64).abs();
        if rx == 0 || ry == 0 {
            return;
        }
        if rx == ry {
            self.fill_circle(cx, cy, rx as i32, color);
            return;
        }
        let (cx, cy) = (cx as i64, cy as i64);
        let (rx2, ry2) = (rx as u128 * rx as u128, ry as u128 * ry as u128);
        let (top, bottom) = self.row_range(cy, ry);
        for dy in top..=bottom {
            let dy2 = (dy * dy) as u128;
            let half = (rx2 * (ry2 - dy2) / ry2).isqrt() as i64;
            self.hspan(cx - half, cx + half, cy + dy, color);
        }
    }

    /// Draw the three edges of a triangle.
    pub fn triangle(&mut self, p0: Point, p1: Point, p2: Point, color: u8) {
        self.line(p1.x, p1.y, p0.x, p0.y, color);
        self.line(p2.x, p2.y, p1.x, p1.y, color);
        self.line(p0.x, p0.y, p2.x, p2.y, color);
    }

    /// Fill a triangle.
    ///
    /// Each covered column is intersected with the three edges in exact
    /// integer arithmetic and the span `ceil(min)..=floor(max)` is painted in
    /// one packed column write.
    pub fn fill_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: u8) {
        let w = self.width() as i64;
        let h = self.height() as i64;
        let xs = [p0.x as i64, p1.x as i64, p2.x as i64];
        let ys = [p0.y as i64, p1.y as i64, p2.y as i64];
        let (min_x, max_x) = (xs.iter().min(), xs.iter().max());
        let (min_y, max_y) = (ys.iter().min(), ys.iter().max());
        let (Some(&min_x), Some(&max_x), Some(&min_y), Some(&max_y)) = (min_x, max_x, min_y, max_y)
        else {
            return;
        };
        if max_x < 0 || max_y < 0 || min_x >= w || min_y >= h {
            return;
        }
        let (min_x, max_x) = (min_x.max(0), max_x.min(w - 1));
        let (min_y, max_y) = (min_y.max(0), max_y.min(h - 1));

        let [a, b, c] = sort_by_x(p0, p1, p2);
        let color = color & 0x0F;
        let mut column = vec![0u8; h as usize];

        for x in min_x..=max_x {
            let mut start = i64::MAX;
            let mut end = i64::MIN;
            for (p, q) in [(a, b), (a, c), (b, c)] {
                if let Some((ceil, floor)) = edge_crossing(p, q, x) {
                    start = start.min(ceil);
                    end = end.max(floor);
                }
            }
            let start = start.max(min_y);
            let end = end.min(max_y);
            if start <= end {
                self.vspan(x as u32, start as usize, end as usize, &mut column, color);
            }
        }
    }

    /// Draw the four edges of a quadrilateral, corner to corner.
    pub fn quad(&mut self, corners: [Point; 4], color: u8) {
        let [p0, p1, p2, p3] = corners;
        self.line(p1.x, p1.y, p0.x, p0.y, color);
        self.line(p2.x, p2.y, p1.x, p1.y, color);
        self.line(p3.x, p3.y, p2.x, p2.y, color);
        self.line(p3.x, p3.y, p0.x, p0.y, color);
    }

    /// Fill a quadrilateral as the triangles `(p0, p1, p2)` and `(p0, p2, p3)`.
    pub fn fill_quad(&mut self, corners: [Point; 4], color: u8) {
        let [p0, p1, p2, p3] = corners;
        self.fill_triangle(p0, p1, p2, color);
        self.fill_triangle(p0, p2, p3, color);
    }
}

impl FxImage {
    /// Draw a line on frame `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReadOnly`] if the image is read-only.
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u8,
        frame: u32,
    ) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.line(x0, y0, x1, y1, color);
        }
        Ok(())
    }

    /// Draw a rectangle outline on frame `frame`.
    pub fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: u8,
        frame: u32,
    ) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.rect(x, y, width, height, color);
        }
        Ok(())
    }

    /// Fill a rectangle on frame `frame`.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: u8,
        frame: u32,
    ) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.fill_rect(x, y, width, height, color);
        }
        Ok(())
    }

    /// Draw a circle outline on frame `frame`.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: u8, frame: u32) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.circle(cx, cy, r, color);
        }
        Ok(())
    }

    /// Fill a circle on frame `frame`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: u8, frame: u32) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.fill_circle(cx, cy, r, color);
        }
        Ok(())
    }

    /// Draw an ellipse outline on frame `frame`.
    pub fn draw_oval(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        color: u8,
        frame: u32,
    ) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.oval(cx, cy, rx, ry, color);
        }
        Ok(())
    }

    /// Fill an ellipse on frame `frame`.
    pub fn fill_oval(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        color: u8,
        frame: u32,
    ) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.fill_oval(cx, cy, rx, ry, color);
        }
        Ok(())
    }

    /// Draw a triangle outline on frame `frame`.
    pub fn draw_triangle(
        &mut self,
        p0: Point,
        p1: Point,
        p2: Point,
        color: u8,
        frame: u32,
    ) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.triangle(p0, p1, p2, color);
        }
        Ok(())
    }

    /// Fill a triangle on frame `frame`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fximg_core::{FxImage, Point};
    ///
    /// let mut img = FxImage::new(5, 5);
    /// img.fill_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), 3, 0)
    ///     .unwrap();
    /// assert_eq!(img.get_pixel(2, 2).unwrap(), 3);
    /// assert_eq!(img.get_pixel(3, 2).unwrap(), 0);
    /// ```
    pub fn fill_triangle(
        &mut self,
        p0: Point,
        p1: Point,
        p2: Point,
        color: u8,
        frame: u32,
    ) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.fill_triangle(p0, p1, p2, color);
        }
        Ok(())
    }

    /// Draw a quadrilateral outline on frame `frame`.
    pub fn draw_quad(&mut self, corners: [Point; 4], color: u8, frame: u32) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.quad(corners, color);
        }
        Ok(())
    }

    /// Fill a quadrilateral on frame `frame`.
    pub fn fill_quad(&mut self, corners: [Point; 4], color: u8, frame: u32) -> Result<()> {
        if let Some(mut canvas) = self.frame_canvas(frame)? {
            canvas.fill_quad(corners, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn lit(img: &FxImage) -> Vec<(i32, i32)> {
        let w = img.width().unwrap() as i32;
        let h = img.height().unwrap() as i32;
        let mut out = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if img.get_pixel(x, y).unwrap() != 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_line_horizontal() {
        let mut img = FxImage::new(3, 1);
        img.draw_line(0, 0, 2, 0, 5, 0).unwrap();
        for x in 0..3 {
            assert_eq!(img.get_pixel(x, 0).unwrap(), 5);
        }
    }

    #[test]
    fn test_line_single_point() {
        let mut img = FxImage::new(3, 3);
        img.draw_line(1, 2, 1, 2, 4, 0).unwrap();
        assert_eq!(lit(&img), vec![(1, 2)]);
    }

    #[test]
    fn test_line_diagonal_reverse() {
        let mut img = FxImage::new(4, 4);
        img.draw_line(3, 3, 0, 0, 1, 0).unwrap();
        assert_eq!(lit(&img), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_line_same_side_skipped() {
        let mut img = FxImage::new(4, 4);
        img.draw_line(-5, 0, -1, 3, 1, 0).unwrap();
        img.draw_line(0, 4, 3, 9, 1, 0).unwrap();
        assert!(lit(&img).is_empty());
    }

    #[test]
    fn test_line_clipped_into_canvas() {
        let mut img = FxImage::new(4, 1);
        img.draw_line(-3, 0, 100, 0, 2, 0).unwrap();
        assert_eq!(lit(&img), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_rect_outline() {
        let mut img = FxImage::new(4, 4);
        img.draw_rect(0, 0, 3, 3, 1, 0).unwrap();
        let pixels = lit(&img);
        assert_eq!(pixels.len(), 8);
        assert!(!pixels.contains(&(1, 1)));
        img.draw_rect(0, 0, 0, 3, 2, 0).unwrap();
        assert_eq!(lit(&img).len(), 8);
    }

    #[test]
    fn test_fill_rect_intersects_canvas() {
        let mut img = FxImage::new(4, 4);
        img.fill_rect(-2, 2, 4, 10, 6, 0).unwrap();
        assert_eq!(lit(&img), vec![(0, 2), (1, 2), (0, 3), (1, 3)]);
        let mut empty = FxImage::new(4, 4);
        empty.fill_rect(5, 0, 2, 2, 6, 0).unwrap();
        empty.fill_rect(0, 0, -2, 2, 6, 0).unwrap();
        assert!(lit(&empty).is_empty());
    }

    fn circle_offsets(r: i32) -> Vec<(i32, i32)> {
        let size = 2 * r + 1;
        let mut img = FxImage::new(size as u32, size as u32);
        img.draw_circle(r, r, r, 3, 0).unwrap();
        let mut pixels: Vec<_> = lit(&img).into_iter().map(|(x, y)| (x - r, y - r)).collect();
        pixels.sort();
        pixels
    }

    #[test]
    fn test_circle_small_radii() {
        // r = 1 and r = 2 light the whole border of their bounding square
        for r in 1i32..=2 {
            let mut expected = Vec::new();
            for dx in -r..=r {
                for dy in -r..=r {
                    if dx.abs() == r || dy.abs() == r {
                        expected.push((dx, dy));
                    }
                }
            }
            expected.sort();
            assert_eq!(circle_offsets(r), expected, "r = {r}");
        }

        let mut expected: Vec<(i32, i32)> = (-2..=2)
            .flat_map(|d| [(d, -3), (d, 3), (-3, d), (3, d)])
            .collect();
        expected.sort();
        assert_eq!(circle_offsets(3), expected);

        let mut none = FxImage::new(3, 3);
        none.draw_circle(1, 1, 0, 3, 0).unwrap();
        assert!(lit(&none).is_empty());
    }

    #[test]
    fn test_fill_circle() {
        let mut img = FxImage::new(5, 5);
        img.fill_circle(2, 2, 2, 1, 0).unwrap();
        let pixels = lit(&img);
        assert_eq!(pixels.len(), 13);
        assert!(!pixels.contains(&(0, 0)));
        assert!(pixels.contains(&(2, 2)));
    }

    #[test]
    fn test_oval_flat() {
        let mut img = FxImage::new(5, 3);
        img.draw_oval(2, 1, 2, 1, 7, 0).unwrap();
        let mut pixels = lit(&img);
        pixels.sort();
        let mut expected = vec![(0, 1), (4, 1), (1, 0), (3, 0), (2, 0), (1, 2), (3, 2), (2, 2)];
        expected.sort();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_oval_degenerate() {
        let mut img = FxImage::new(5, 5);
        img.draw_oval(2, 2, 0, 2, 1, 0).unwrap();
        assert!(lit(&img).is_empty());
        img.draw_oval(2, 2, -2, -2, 1, 0).unwrap();
        let mut circle = FxImage::new(5, 5);
        circle.draw_circle(2, 2, 2, 1, 0).unwrap();
        assert_eq!(img, circle);
    }

    #[test]
    fn test_oval_symmetric() {
        let mut img = FxImage::new(11, 7);
        img.draw_oval(5, 3, 5, 3, 1, 0).unwrap();
        img.draw_oval(5, 3, 4, 2, 2, 0).unwrap();
        for x in 0..11 {
            for y in 0..7 {
                assert_eq!(
                    img.get_pixel(x, y).unwrap(),
                    img.get_pixel(10 - x, 6 - y).unwrap()
                );
            }
        }
        assert_eq!(img.get_pixel(5, 3).unwrap(), 0);
    }

    #[test]
    fn test_fill_huge_radius_clips_rows() {
        let mut img = FxImage::new(4, 3);
        img.fill_circle(1, 1, i32::MAX, 5, 0).unwrap();
        assert_eq!(lit(&img).len(), 12);

        let mut oval = FxImage::new(4, 3);
        oval.fill_oval(2, 1, 1 << 20, i32::MAX, 6, 0).unwrap();
        assert_eq!(lit(&oval).len(), 12);

        let mut below = FxImage::new(4, 3);
        below.fill_circle(1, 1_000, 900, 5, 0).unwrap();
        assert!(lit(&below).is_empty());
    }

    #[test]
    fn test_fill_oval() {
        let mut img = FxImage::new(7, 3);
        img.fill_oval(3, 1, 3, 1, 2, 0).unwrap();
        let pixels = lit(&img);
        assert!(pixels.contains(&(0, 1)) && pixels.contains(&(6, 1)));
        assert!(pixels.contains(&(3, 0)) && pixels.contains(&(3, 2)));
        assert!(!pixels.contains(&(1, 0)));
    }

    #[test]
    fn test_fill_triangle_scenario() {
        let mut img = FxImage::new(5, 5);
        img.fill_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), 3, 0)
            .unwrap();
        for x in 0..5 {
            for y in 0..5 {
                let expected = if x + y <= 4 { 3 } else { 0 };
                assert_eq!(img.get_pixel(x, y).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_triangle_vertex_order_irrelevant() {
        let pts = [Point::new(1, 0), Point::new(6, 3), Point::new(0, 5)];
        let mut reference = FxImage::new(7, 7);
        reference.fill_triangle(pts[0], pts[1], pts[2], 1, 0).unwrap();
        for order in [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            let mut img = FxImage::new(7, 7);
            img.fill_triangle(pts[order[0]], pts[order[1]], pts[order[2]], 1, 0)
                .unwrap();
            assert_eq!(img, reference);
        }
    }

    #[test]
    fn test_fill_triangle_offscreen() {
        let mut img = FxImage::new(4, 4);
        img.fill_triangle(Point::new(-9, -9), Point::new(-5, -9), Point::new(-9, -2), 1, 0)
            .unwrap();
        assert!(lit(&img).is_empty());
        img.fill_triangle(Point::new(-4, -4), Point::new(10, -4), Point::new(-4, 10), 1, 0)
            .unwrap();
        assert_eq!(lit(&img).len(), 16);
    }

    #[test]
    fn test_quad() {
        let corners = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];
        let mut outline = FxImage::new(4, 4);
        outline.draw_quad(corners, 1, 0).unwrap();
        assert_eq!(lit(&outline).len(), 12);
        let mut filled = FxImage::new(4, 4);
        filled.fill_quad(corners, 1, 0).unwrap();
        assert_eq!(lit(&filled).len(), 16);
    }

    #[test]
    fn test_shapes_respect_frames_and_read_only() {
        let mut img = FxImage::new_frames(3, 3, 2);
        img.fill_rect(0, 0, 3, 3, 4, 1).unwrap();
        img.fill_rect(0, 0, 3, 3, 4, 2).unwrap();
        assert_eq!(img.get_frame_pixel(0, 1, 1).unwrap(), 0);
        assert_eq!(img.get_frame_pixel(1, 1, 1).unwrap(), 4);
        img.set_read_only(true).unwrap();
        assert_eq!(img.draw_line(0, 0, 2, 2, 1, 0), Err(Error::ReadOnly));
        assert_eq!(img.get_frame_pixel(0, 0, 0).unwrap(), 0);
    }
}
