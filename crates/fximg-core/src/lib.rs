//! fximg Core - packed 16-color fixed images
//!
//! This crate provides the fixed image container and everything that works
//! directly on its packed representation:
//!
//! - [`FxImage`] - self-describing buffer of 4-bit pixels with a hashed header
//! - [`FrameView`] / [`FrameCanvas`] - validated per-frame read/write access
//! - [`header`] - the variable-width header codec
//! - [`hash8`] - the one-byte integrity hash
//! - [`ColumnImage`] - conversion partner for conventional images
//! - Drawing primitives, blits and frame helpers on [`FxImage`]
//!
//! # Buffer layout
//!
//! ```text
//! [header hash][header][metadata hash][width][height][frame count][pixels...]
//! ```
//!
//! The three dimension fields are 1, 2 or 4 bytes wide depending on their
//! value. Pixels follow as nibbles, column by column.

pub mod error;
pub mod external;
pub mod fximg;
pub mod hash;
pub mod header;

pub use error::{Error, Result};
pub use external::ColumnImage;
pub use fximg::{BlitMode, FrameCanvas, FrameView, FxImage, Point};
pub use hash::hash8;
pub use header::{Field, Geometry, Layout, Region, SizeClass};
