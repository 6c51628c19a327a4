//! Integer trigonometry
//!
//! Angles are measured in 256ths of a full turn and results are scaled by
//! [`UNIT`], so `isin(64) == 120` stands for `sin(90°) == 1`.

/// Fixed-point scale of [`isin`] and [`icos`].
pub const UNIT: i32 = 120;

/// Number of angle steps in a full turn.
pub const FULL_TURN: i32 = 256;

#[rustfmt::skip]
static SINE_TABLE: [i8; 256] = [
    0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45,
    48, 51, 54, 57, 59, 62, 65, 67, 70, 72, 75, 77, 80, 82, 84, 86,
    88, 90, 92, 94, 96, 98, 99, 101, 102, 104, 105, 106, 108, 109, 110, 111,
    112, 113, 114, 115, 115, 116, 117, 117, 118, 118, 119, 119, 119, 120, 120, 120,
    120, 120, 120, 120, 119, 119, 119, 118, 118, 117, 117, 116, 115, 115, 114, 113,
    112, 111, 110, 109, 108, 106, 105, 104, 102, 101, 99, 98, 96, 94, 92, 90,
    88, 86, 84, 82, 80, 77, 75, 72, 70, 67, 65, 62, 59, 57, 54, 51,
    48, 45, 42, 39, 36, 33, 30, 27, 24, 21, 18, 15, 12, 9, 6, 3,
    0, -3, -6, -9, -12, -15, -18, -21, -24, -27, -30, -33, -36, -39, -42, -45,
    -48, -51, -54, -57, -59, -62, -65, -67, -70, -72, -75, -77, -80, -82, -84, -86,
    -88, -90, -92, -94, -96, -98, -99, -101, -102, -104, -105, -106, -108, -109, -110, -111,
    -112, -113, -114, -115, -115, -116, -117, -117, -118, -118, -119, -119, -119, -120, -120, -120,
    -120, -120, -120, -120, -119, -119, -119, -118, -118, -117, -117, -116, -115, -115, -114, -113,
    -112, -111, -110, -109, -108, -106, -105, -104, -102, -101, -99, -98, -96, -94, -92, -90,
    -88, -86, -84, -82, -80, -77, -75, -72, -70, -67, -65, -62, -59, -57, -54, -51,
    -48, -45, -42, -39, -36, -33, -30, -27, -24, -21, -18, -15, -12, -9, -6, -3,
];

/// Sine of `theta` (in 256ths of a turn), scaled by [`UNIT`].
///
/// Any integer is accepted; only the low eight bits matter.
pub fn isin(theta: i32) -> i32 {
    SINE_TABLE[(theta & 0xFF) as usize] as i32
}

/// Cosine of `theta` (in 256ths of a turn), scaled by [`UNIT`].
pub fn icos(theta: i32) -> i32 {
    isin(theta.wrapping_add(FULL_TURN / 4))
}
