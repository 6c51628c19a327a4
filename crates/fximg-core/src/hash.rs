//! One-byte integrity hash
//!
//! The two hash bytes of a fixed image header are CRC-8 checksums
//! (polynomial `0x07`, initial value `0x00`, no reflection, no final XOR).
//! Every single-bit error in the guarded bytes changes the hash.

const POLY: u8 = 0x07;

const TABLE: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the one-byte hash of `bytes`.
///
/// # Examples
///
/// ```
/// use fximg_core::hash8;
///
/// assert_eq!(hash8(b"123456789"), 0xF4);
/// assert_eq!(hash8(&[]), 0x00);
/// ```
pub fn hash8(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |crc, &b| TABLE[(crc ^ b) as usize])
}
