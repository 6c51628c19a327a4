//! fximg-transform - Geometric transformations for fixed images
//!
//! This crate provides integer-only transformations of [`fximg_core::FxImage`]:
//!
//! - Nearest-neighbor scaling
//! - Orthogonal rotations (quarter turns)
//! - Arbitrary rotations in 256 steps per turn, using a fixed sine table
//! - Rotation sheets (one rotated copy per frame)
//! - Quad-distortion blits onto arbitrary quadrilaterals
//!
//! Every transform reads the first frame of its source. All but the
//! distortion blit return a new image; the distortion blit draws into an
//! existing one.

mod error;
pub mod rotate;
pub mod scale;
pub mod sine;
pub mod warp;

pub use error::{TransformError, TransformResult};
pub use rotate::{rotate, rotate_orth, rotated_bounds, rotation_sheet};
pub use scale::scale;
pub use sine::{icos, isin};
pub use warp::draw_distorted;
