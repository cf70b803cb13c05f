use std::{fmt, str::FromStr};

use crate::{utf::Endianness, Error};

/// Encoding of the input stream, fixed for the life of a decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Utf8,
    Utf16(Endianness),
    Utf32(Endianness),
}

impl Charset {
    /// Picks a charset from a code unit width in bits. Byte order is
    /// ignored for 8-bit units.
    pub fn from_width(width: u8, endianness: Endianness) -> Result<Self, Error> {
        match width {
            8 => Ok(Self::Utf8),
            16 => Ok(Self::Utf16(endianness)),
            32 => Ok(Self::Utf32(endianness)),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }

    pub const fn unit_width(self) -> u8 {
        match self {
            Self::Utf8 => 8,
            Self::Utf16(_) => 16,
            Self::Utf32(_) => 32,
        }
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let charset = match label.to_ascii_uppercase().as_str() {
            "UTF-8" => Self::Utf8,
            "UTF-16" | "UTF-16BE" => Self::Utf16(Endianness::BigEndian),
            "UTF-16LE" => Self::Utf16(Endianness::LittleEndian),
            "UTF-32" | "UTF-32BE" => Self::Utf32(Endianness::BigEndian),
            "UTF-32LE" => Self::Utf32(Endianness::LittleEndian),
            _ => return Err(Error::UnknownCharset(label.to_owned())),
        };
        Ok(charset)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => f.write_str("UTF-8"),
            Self::Utf16(endianness) => write!(f, "UTF-16{}", endianness.suffix()),
            Self::Utf32(endianness) => write!(f, "UTF-32{}", endianness.suffix()),
        }
    }
}
