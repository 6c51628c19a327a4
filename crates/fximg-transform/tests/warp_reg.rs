//! Quad-distortion regression test
//!
//! Texel-to-quad mapping, mirroring, transparency and clipping.

use fximg_core::{BlitMode, FxImage, Point};
use fximg_test::{RegParams, parse_fximg};
use fximg_transform::draw_distorted;

fn quad(corners: [(i32, i32); 4]) -> [Point; 4] {
    corners.map(Point::from)
}

#[test]
fn warp_reg() {
    let mut rp = RegParams::new("warp");

    let src = parse_fximg(&["12", "34"]);

    // --- Upscaling quad: each texel covers a closed 3x3 block ---
    let mut dst = FxImage::new(5, 5);
    let square = quad([(0, 0), (4, 0), (4, 4), (0, 4)]);
    draw_distorted(&mut dst, &src, square, BlitMode::Opaque, 0).expect("draw_distorted");
    let expected = parse_fximg(&["11222", "11222", "33444", "33444", "33444"]);
    rp.compare_fximg(&expected, &dst);

    // --- Swapping left and right corners mirrors the image ---
    let mut mirrored = FxImage::new(5, 5);
    let flipped = quad([(4, 0), (0, 0), (0, 4), (4, 4)]);
    draw_distorted(&mut mirrored, &src, flipped, BlitMode::Opaque, 0).expect("draw_distorted");
    let expected = parse_fximg(&["22211", "22211", "44433", "44433", "44433"]);
    rp.compare_fximg(&expected, &mirrored);

    // --- Transparent texels leave the background alone ---
    let sparse = parse_fximg(&["1.", ".2"]);
    let mut over = FxImage::new(5, 5);
    over.fill(9, 0).expect("fill");
    draw_distorted(&mut over, &sparse, square, BlitMode::Transparent, 0).expect("draw_distorted");
    rp.compare_values(1.0, over.get_pixel(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(9.0, over.get_pixel(4, 0).unwrap() as f64, 0.0);
    rp.compare_values(9.0, over.get_pixel(0, 4).unwrap() as f64, 0.0);
    rp.compare_values(2.0, over.get_pixel(4, 4).unwrap() as f64, 0.0);

    // --- Trapezoid stays inside its outline ---
    let mut block = FxImage::new(4, 4);
    block.fill(7, 0).expect("fill");
    let mut canvas = FxImage::new(8, 8);
    let trapezoid = quad([(2, 0), (5, 0), (7, 6), (0, 6)]);
    draw_distorted(&mut canvas, &block, trapezoid, BlitMode::Opaque, 0).expect("draw_distorted");
    rp.compare_values(7.0, canvas.get_pixel(3, 3).unwrap() as f64, 0.0);
    rp.compare_values(0.0, canvas.get_pixel(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.0, canvas.get_pixel(7, 0).unwrap() as f64, 0.0);
    let below = (0..8).filter(|&x| canvas.get_pixel(x, 7).unwrap() != 0).count();
    rp.compare_values(0.0, below as f64, 0.0);

    // --- Partially visible quads are clipped to the frame ---
    let mut clipped = FxImage::new_frames(3, 3, 2);
    let shifted = quad([(-2, -2), (2, -2), (2, 2), (-2, 2)]);
    draw_distorted(&mut clipped, &src, shifted, BlitMode::Opaque, 1).expect("draw_distorted");
    // the last texel drawn covers the whole visible frame
    let visible = clipped.get_frame(1).expect("get_frame");
    rp.compare_fximg(&parse_fximg(&["444", "444", "444"]), &visible);
    rp.compare_fximg(&FxImage::new(3, 3), &clipped.get_frame(0).unwrap());

    assert!(rp.cleanup(), "warp regression test failed");
}
