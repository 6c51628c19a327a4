//! fximg-test - Regression test framework for fixed images
//!
//! Integration tests in each crate's `tests/` directory are written as
//! `*_reg.rs` files driven by [`RegParams`]:
//!
//! ```ignore
//! use fximg_test::RegParams;
//!
//! let mut rp = RegParams::new("graphics");
//! rp.compare_values(12.0, lit as f64, 0.0);
//! rp.compare_fximg(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`, which also prints
//!   every compared image
//! - `RUST_LOG`: log filter for the libraries under test

mod params;

pub use params::{RegParams, RegTestMode};

use fximg_core::FxImage;

/// Render every frame of an image as rows of hex digits, `.` for color 0.
///
/// Frames are separated by `|`. Images that fail validation render as the
/// error message.
pub fn render_fximg(img: &FxImage) -> String {
    let geometry = match img.geometry() {
        Ok(g) => g,
        Err(e) => return format!("<{e}>"),
    };
    let mut out = String::new();
    for y in 0..geometry.height as i32 {
        for frame in 0..geometry.frame_count {
            if frame > 0 {
                out.push('|');
            }
            for x in 0..geometry.width as i32 {
                let p = img.get_frame_pixel(frame, x, y).unwrap_or(0);
                out.push(if p == 0 {
                    '.'
                } else {
                    char::from_digit(p as u32, 16).unwrap_or('?')
                });
            }
        }
        out.push('\n');
    }
    out
}

/// Build an image from rows of hex digits (`.` or `0` for color 0).
///
/// All rows are expected to have the same length; short rows are padded
/// with 0.
///
/// # Panics
///
/// Panics on a character that is neither a hex digit nor `.`, so a typo in
/// a fixture fails the test that uses it.
pub fn parse_fximg(rows: &[&str]) -> FxImage {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut img = FxImage::new(width as u32, rows.len() as u32);
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let color = match c {
                '.' => 0,
                _ => c
                    .to_digit(16)
                    .unwrap_or_else(|| panic!("bad fixture pixel {c:?} at ({x}, {y})"))
                    as u8,
            };
            if color != 0 {
                img.set_pixel(x as i32, y as i32, color)
                    .expect("fixture pixel write");
            }
        }
    }
    img
}
