pub(crate) mod utf16decoder;
pub(crate) mod utf32decoder;
pub(crate) mod utf8decoder;

use std::io::Read;

use crate::{cursor::ByteCursor, step::Step};

pub(crate) trait Decode {
    /// Size in bytes of the atom read per step.
    const UNIT_SIZE: usize;

    fn decode_next<R: Read>(&self, cursor: &mut ByteCursor<R>) -> std::io::Result<Step>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Endianness {
    #[default]
    BigEndian,
    LittleEndian,
}

impl Endianness {
    #[inline]
    pub const fn u16_from(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => u16::from_be_bytes(bytes),
            Endianness::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub const fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endianness::BigEndian => u32::from_be_bytes(bytes),
            Endianness::LittleEndian => u32::from_le_bytes(bytes),
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Endianness::BigEndian => "BE",
            Endianness::LittleEndian => "LE",
        }
    }
}
