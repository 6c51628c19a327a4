//! Header codec
//!
//! Every fixed image starts with a variable-width header:
//!
//! | offset | content |
//! |---|---|
//! | 0 | header hash, `hash8([byte 1])` |
//! | 1 | header byte: flags and size classes |
//! | 2 | metadata hash, `hash8(dimension fields)` |
//! | 3.. | width, height, frame count (little-endian, 1/2/4 bytes each) |
//! | data start.. | packed pixel data |
//!
//! Header byte layout (bit 7 to bit 0):
//!
//! ```text
//! | read-only | frozen | width class | height class | frame class |
//! |   bit 7   | bit 6  |  bits 5:4   |  bits 3:2    |  bits 1:0   |
//! ```
//!
//! A size class of 0, 1 or 2 selects a 1, 2 or 4 byte field. Class 3 is
//! reserved.

use crate::error::{Error, Result};
use crate::hash::hash8;
use std::fmt;

/// Byte offset of the header hash
pub const HEADER_HASH: usize = 0;
/// Byte offset of the header byte
pub const HEADER: usize = 1;
/// Byte offset of the metadata hash
pub const METADATA_HASH: usize = 2;
/// Byte offset of the first dimension field
pub const FIELDS_START: usize = 3;

/// Header flag: pixel writes are refused
pub const FLAG_READ_ONLY: u8 = 0b1000_0000;
/// Header flag: dimension fields can no longer be written
pub const FLAG_FROZEN: u8 = 0b0100_0000;

const CLASS_MASK: u8 = 0b0011_1111;

/// Encoding width of one dimension field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SizeClass {
    /// One byte
    U8 = 0,
    /// Two bytes
    U16 = 1,
    /// Four bytes
    U32 = 2,
}

impl SizeClass {
    /// Smallest size class able to hold `value`.
    pub fn for_value(value: u32) -> Self {
        if value <= 0xFF {
            SizeClass::U8
        } else if value <= 0xFFFF {
            SizeClass::U16
        } else {
            SizeClass::U32
        }
    }

    /// Decode a two-bit size class. Returns `None` for the reserved class 3.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b11 {
            0 => Some(SizeClass::U8),
            1 => Some(SizeClass::U16),
            2 => Some(SizeClass::U32),
            _ => None,
        }
    }

    /// The two-bit encoding of this class.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Number of bytes a field of this class occupies.
    pub fn byte_len(self) -> usize {
        1 << self.bits()
    }

    /// Largest value a field of this class can store.
    pub fn max_value(self) -> u32 {
        match self {
            SizeClass::U8 => 0xFF,
            SizeClass::U16 => 0xFFFF,
            SizeClass::U32 => u32::MAX,
        }
    }
}

/// Header fields addressable by [`offset_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Frame width in pixels
    Width,
    /// Frame height in pixels
    Height,
    /// Number of frames
    FrameCount,
    /// Start of the pixel data
    Start,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::FrameCount => "frame count",
            Field::Start => "start",
        };
        f.write_str(name)
    }
}

/// Header regions guarded by a hash byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The header byte, guarded by byte 0
    Header,
    /// The dimension fields, guarded by byte 2
    Metadata,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Header => f.write_str("header"),
            Region::Metadata => f.write_str("metadata"),
        }
    }
}

/// Field widths and pixel data offset implied by a header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Size class of the width field
    pub width: SizeClass,
    /// Size class of the height field
    pub height: SizeClass,
    /// Size class of the frame count field
    pub frame_count: SizeClass,
    /// Byte offset of the pixel data
    pub data_start: usize,
    /// Header byte with the size classes packed and no flags set
    pub header: u8,
}

impl Layout {
    fn from_classes(width: SizeClass, height: SizeClass, frame_count: SizeClass) -> Self {
        let header = (width.bits() << 4) | (height.bits() << 2) | frame_count.bits();
        Self {
            width,
            height,
            frame_count,
            data_start: FIELDS_START
                + width.byte_len()
                + height.byte_len()
                + frame_count.byte_len(),
            header,
        }
    }

    /// Decode the layout from a header byte. Flag bits are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if any size class is the reserved
    /// value 3.
    pub fn decode(header: u8) -> Result<Self> {
        let classes = header & CLASS_MASK;
        let class = |shift: u8| {
            SizeClass::from_bits(classes >> shift).ok_or(Error::InvalidHeader { header })
        };
        Ok(Self::from_classes(class(4)?, class(2)?, class(0)?))
    }

    /// Size class of a dimension field. [`Field::Start`] has no class of
    /// its own and reports the frame count class, the last field before it.
    pub fn class_of(&self, field: Field) -> SizeClass {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
            Field::FrameCount | Field::Start => self.frame_count,
        }
    }

    /// Byte offset of `field` within the buffer.
    pub fn offset(&self, field: Field) -> usize {
        let mut offset = FIELDS_START;
        if field == Field::Width {
            return offset;
        }
        offset += self.width.byte_len();
        if field == Field::Height {
            return offset;
        }
        offset += self.height.byte_len();
        if field == Field::FrameCount {
            return offset;
        }
        offset + self.frame_count.byte_len()
    }
}

/// Minimal layout for the given dimensions.
pub fn compute_layout(width: u32, height: u32, frame_count: u32) -> Layout {
    Layout::from_classes(
        SizeClass::for_value(width),
        SizeClass::for_value(height),
        SizeClass::for_value(frame_count),
    )
}

/// Byte offset of `field` for a buffer whose first two bytes are
/// `[header_hash, header]`.
///
/// Only the header hash can be checked here, since the dimension fields are
/// not available; [`read_field`] and [`inspect`] validate both hashes.
///
/// # Errors
///
/// Returns [`Error::Corruption`] if the header hash does not match and
/// [`Error::InvalidHeader`] for a reserved size class.
pub fn offset_of(header_hash: u8, header: u8, field: Field) -> Result<usize> {
    check_header(header_hash, header)?;
    Ok(Layout::decode(header)?.offset(field))
}

/// Number of pixel data bytes needed for the given dimensions.
///
/// Saturates at `usize::MAX` when the product does not fit.
pub fn payload_len(width: u32, height: u32, frame_count: u32) -> usize {
    let nibbles = width as u128 * height as u128 * frame_count as u128;
    usize::try_from(nibbles.div_ceil(2)).unwrap_or(usize::MAX)
}

/// Validated view of a buffer's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Number of frames
    pub frame_count: u32,
    /// Byte offset of the pixel data
    pub data_start: usize,
    /// Raw header byte, including flags
    pub header: u8,
}

impl Geometry {
    /// Whether the read-only flag is set.
    pub fn read_only(&self) -> bool {
        self.header & FLAG_READ_ONLY != 0
    }

    /// Whether the metadata-frozen flag is set.
    pub fn frozen(&self) -> bool {
        self.header & FLAG_FROZEN != 0
    }

    /// Total number of columns across all frames.
    pub fn total_columns(&self) -> usize {
        self.width as usize * self.frame_count as usize
    }

    /// Total buffer length the header calls for.
    pub fn byte_len(&self) -> usize {
        self.data_start
            .saturating_add(payload_len(self.width, self.height, self.frame_count))
    }
}

fn check_header(stored: u8, header: u8) -> Result<()> {
    let computed = hash8(&[header]);
    if stored != computed {
        log::warn!("header signature mismatch: stored 0x{stored:02X}, computed 0x{computed:02X}");
        return Err(Error::Corruption {
            region: Region::Header,
            stored,
            computed,
        });
    }
    Ok(())
}

/// Validate the header hash and decode the layout.
fn verify_header(bytes: &[u8]) -> Result<Layout> {
    if bytes.len() < FIELDS_START {
        return Err(Error::Truncated {
            expected: FIELDS_START,
            actual: bytes.len(),
        });
    }
    check_header(bytes[HEADER_HASH], bytes[HEADER])?;
    let layout = Layout::decode(bytes[HEADER])?;
    if bytes.len() < layout.data_start {
        return Err(Error::Truncated {
            expected: layout.data_start,
            actual: bytes.len(),
        });
    }
    Ok(layout)
}

fn metadata_hash(bytes: &[u8], layout: &Layout) -> u8 {
    hash8(&bytes[FIELDS_START..layout.data_start])
}

/// Validate both hashes and return the layout.
fn verify_metadata(bytes: &[u8]) -> Result<Layout> {
    let layout = verify_header(bytes)?;
    let stored = bytes[METADATA_HASH];
    let computed = metadata_hash(bytes, &layout);
    if stored != computed {
        log::warn!("metadata signature mismatch: stored 0x{stored:02X}, computed 0x{computed:02X}");
        return Err(Error::Corruption {
            region: Region::Metadata,
            stored,
            computed,
        });
    }
    Ok(layout)
}

fn read_le(bytes: &[u8], offset: usize, class: SizeClass) -> u32 {
    bytes[offset..offset + class.byte_len()]
        .iter()
        .rev()
        .fold(0u32, |acc, &b| (acc << 8) | b as u32)
}

fn write_le(bytes: &mut [u8], offset: usize, class: SizeClass, value: u32) {
    let value = value.min(class.max_value());
    let le = value.to_le_bytes();
    bytes[offset..offset + class.byte_len()].copy_from_slice(&le[..class.byte_len()]);
}

/// Read one header field after validating both hashes.
///
/// [`Field::Start`] yields the pixel data offset.
///
/// # Errors
///
/// Returns [`Error::Corruption`], [`Error::InvalidHeader`] or
/// [`Error::Truncated`] when the header does not validate.
pub fn read_field(bytes: &[u8], field: Field) -> Result<u32> {
    let layout = verify_metadata(bytes)?;
    if field == Field::Start {
        return Ok(layout.data_start as u32);
    }
    Ok(read_le(bytes, layout.offset(field), layout.class_of(field)))
}

/// Write one dimension field, clamped to its size class, and rehash the
/// metadata.
///
/// # Errors
///
/// Returns [`Error::ImmutableField`] once the metadata is frozen, which is
/// always the case for buffers built by [`encode`]. The buffer is left
/// unchanged on error.
pub fn write_field(bytes: &mut [u8], field: Field, value: u32) -> Result<()> {
    let layout = verify_metadata(bytes)?;
    if bytes[HEADER] & FLAG_FROZEN != 0 {
        return Err(Error::ImmutableField { field });
    }
    if field == Field::Start {
        return Ok(());
    }
    write_le(bytes, layout.offset(field), layout.class_of(field), value);
    bytes[METADATA_HASH] = metadata_hash(bytes, &layout);
    Ok(())
}

/// Set or clear the read-only flag and rehash the header byte.
///
/// This is the only header bit that may change after construction; the
/// frozen flag and the size classes are never touched.
///
/// # Errors
///
/// Returns [`Error::Corruption`] if either hash does not validate. The
/// buffer is left unchanged on error.
pub fn set_read_only(bytes: &mut [u8], read_only: bool) -> Result<()> {
    verify_metadata(bytes)?;
    set_flag(bytes, FLAG_READ_ONLY, read_only);
    Ok(())
}

fn set_flag(bytes: &mut [u8], flag: u8, value: bool) {
    let header = if value {
        bytes[HEADER] | flag
    } else {
        bytes[HEADER] & !flag
    };
    if header != bytes[HEADER] {
        bytes[HEADER] = header;
        bytes[HEADER_HASH] = hash8(&[header]);
    }
}

/// Fully validate a buffer: both hashes, the layout, and the payload length.
///
/// # Errors
///
/// Returns [`Error::Corruption`] on a hash mismatch,
/// [`Error::InvalidHeader`] on a reserved size class, and
/// [`Error::Truncated`] when the buffer is shorter than its header requires.
pub fn inspect(bytes: &[u8]) -> Result<Geometry> {
    let layout = verify_metadata(bytes)?;
    let geometry = Geometry {
        width: read_le(bytes, layout.offset(Field::Width), layout.width),
        height: read_le(bytes, layout.offset(Field::Height), layout.height),
        frame_count: read_le(bytes, layout.offset(Field::FrameCount), layout.frame_count),
        data_start: layout.data_start,
        header: bytes[HEADER],
    };
    let expected = geometry.byte_len();
    if bytes.len() < expected {
        return Err(Error::Truncated {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(geometry)
}

/// Build a zero-filled, metadata-frozen buffer for the given dimensions,
/// optionally read-only from the start.
///
/// A frame count of 0 is stored as 1.
pub fn encode(width: u32, height: u32, frame_count: u32, read_only: bool) -> Vec<u8> {
    let frame_count = frame_count.max(1);
    let layout = compute_layout(width, height, frame_count);
    let len = layout
        .data_start
        .saturating_add(payload_len(width, height, frame_count));
    let mut bytes = vec![0u8; len];
    write_le(&mut bytes, layout.offset(Field::Width), layout.width, width);
    write_le(&mut bytes, layout.offset(Field::Height), layout.height, height);
    write_le(&mut bytes, layout.offset(Field::FrameCount), layout.frame_count, frame_count);
    bytes[METADATA_HASH] = metadata_hash(&bytes, &layout);
    let mut header = layout.header | FLAG_FROZEN;
    if read_only {
        header |= FLAG_READ_ONLY;
    }
    bytes[HEADER] = header;
    bytes[HEADER_HASH] = hash8(&[header]);
    bytes
}
