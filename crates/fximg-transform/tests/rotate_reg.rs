//! Arbitrary rotation regression test
//!
//! Rotations in 256 steps per turn and rotation sheets built from them.

use fximg_core::FxImage;
use fximg_test::{RegParams, parse_fximg};
use fximg_transform::{rotate, rotated_bounds, rotation_sheet};

#[test]
fn rotate_reg() {
    let mut rp = RegParams::new("rotate");

    let bar = parse_fximg(&["123"]);

    // --- Bounds ---
    rp.compare_values(6.0, rotated_bounds(3, 1, 0).0 as f64, 0.0);
    rp.compare_values(4.0, rotated_bounds(3, 1, 0).1 as f64, 0.0);
    rp.compare_values(5.0, rotated_bounds(3, 1, 32).0 as f64, 0.0);

    // --- Zero angle copies into the center of the larger canvas ---
    let r0 = rotate(&bar, 0).expect("rotate 0");
    rp.compare_fximg(&parse_fximg(&["......", "......", "..123.", "......"]), &r0);
    rp.compare_fximg(&r0, &rotate(&bar, 256).expect("rotate 256"));

    // --- Quarter and half turns ---
    let r64 = rotate(&bar, 64).expect("rotate 64");
    let expected = parse_fximg(&["....", "....", "..3.", "..2.", "..1.", "...."]);
    rp.compare_fximg(&expected, &r64);

    let r128 = rotate(&bar, 128).expect("rotate 128");
    rp.compare_fximg(&parse_fximg(&["......", "......", "..321.", "......"]), &r128);

    // --- The center survives any angle ---
    let mut block = FxImage::new(5, 5);
    block.fill(2, 0).expect("fill");
    for theta in [16, 32, 77, 200] {
        let out = rotate(&block, theta).expect("rotate");
        let (w, h) = rotated_bounds(5, 5, theta);
        rp.compare_values(w as f64, out.width().unwrap() as f64, 0.0);
        rp.compare_values(h as f64, out.height().unwrap() as f64, 0.0);
        let center = out.get_pixel((w >> 1) as i32, (h >> 1) as i32).unwrap();
        rp.compare_values(2.0, center as f64, 0.0);
        eprintln!("  theta {}: {}x{}", theta, w, h);
    }

    assert!(rp.cleanup(), "rotate regression test failed");
}

#[test]
fn rotation_sheet_reg() {
    let mut rp = RegParams::new("rotation_sheet");

    let bar = parse_fximg(&["123"]);
    let sheet = rotation_sheet(&bar, 4).expect("rotation_sheet");
    rp.compare_values(4.0, sheet.frame_count().unwrap() as f64, 0.0);
    rp.compare_values(6.0, sheet.width().unwrap() as f64, 0.0);
    rp.compare_values(6.0, sheet.height().unwrap() as f64, 0.0);

    let expected = [
        ["......", "......", "......", "..123.", "......", "......"],
        ["......", "......", "...3..", "...2..", "...1..", "......"],
        ["......", "......", "......", "..321.", "......", "......"],
        ["......", "......", "...1..", "...2..", "...3..", "......"],
    ];
    for (idx, rows) in expected.iter().enumerate() {
        let frame = sheet.get_frame(idx as u32).expect("get_frame");
        rp.compare_fximg(&parse_fximg(rows), &frame);
    }

    let single = rotation_sheet(&bar, 0).expect("rotation_sheet");
    rp.compare_values(1.0, single.frame_count().unwrap() as f64, 0.0);

    assert!(rp.cleanup(), "rotation_sheet regression test failed");
}
