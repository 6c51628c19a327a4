//! fximg - Packed 16-color fixed images
//!
//! A fixed image is a single self-describing byte buffer: a small hashed
//! header followed by 4-bit pixels stored column by column. Images may hold
//! several equally sized frames side by side.
//!
//! # Overview
//!
//! - Header codec with one-byte integrity hashes
//! - Pixel and column access, frames, conversion to external images
//! - Integer rasterizer (lines, rectangles, circles, ellipses, triangles)
//! - Transforms (scaling, rotation, rotation sheets, quad distortion)
//!
//! # Example
//!
//! ```
//! use fximg::{FxImage, Point};
//!
//! let mut img = FxImage::new(5, 5);
//! img.fill_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), 3, 0)
//!     .unwrap();
//! assert_eq!(img.get_pixel(2, 2).unwrap(), 3);
//! assert_eq!(img.get_pixel(4, 4).unwrap(), 0);
//!
//! let turned = fximg::transform::rotate_orth(&img, 1).unwrap();
//! assert_eq!(turned.get_pixel(0, 4).unwrap(), 3);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use fximg_core::*;

// Re-export the transform crate as a module
pub use fximg_transform as transform;
