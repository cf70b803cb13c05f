use std::fmt;

/// How a single decode step judged the bytes it consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Ok,
    InvalidByteSequence,
    /// A structurally valid sequence that is longer than it needs to be.
    RedundantEncoding,
    IncompleteSurrogatePair,
}

impl Classification {
    /// Whether tokens of this class carry a decoded scalar value.
    #[inline]
    pub const fn carries_scalar(self) -> bool {
        matches!(self, Self::Ok | Self::RedundantEncoding)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "ok",
            Self::InvalidByteSequence => "invalid byte sequence",
            Self::RedundantEncoding => "redundant encoding",
            Self::IncompleteSurrogatePair => "incomplete surrogate pair",
        })
    }
}

/// The outcome of one decode step: an optional scalar, its classification
/// and the raw bytes the step consumed.
///
/// The scalar is kept as a `u32` rather than a `char`: the UTF-8 decoder
/// reports whatever value a well-formed sequence spells out, including
/// surrogates and values past U+10FFFF.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    scalar: Option<u32>,
    classification: Classification,
    bytes: [u8; 4],
    length: u8,
}

impl Token {
    fn new(scalar: Option<u32>, classification: Classification, raw: &[u8]) -> Self {
        debug_assert!(!raw.is_empty() && raw.len() <= 4);
        let length = raw.len().min(4);
        let mut bytes = [0; 4];
        bytes[..length].copy_from_slice(&raw[..length]);
        Self {
            scalar,
            classification,
            bytes,
            length: length as u8,
        }
    }

    pub fn ok(scalar: u32, raw: &[u8]) -> Self {
        Self::new(Some(scalar), Classification::Ok, raw)
    }

    pub fn redundant(scalar: u32, raw: &[u8]) -> Self {
        Self::new(Some(scalar), Classification::RedundantEncoding, raw)
    }

    pub fn invalid(raw: &[u8]) -> Self {
        Self::new(None, Classification::InvalidByteSequence, raw)
    }

    pub fn incomplete_surrogate(raw: &[u8]) -> Self {
        Self::new(None, Classification::IncompleteSurrogatePair, raw)
    }

    #[inline]
    pub const fn scalar(&self) -> Option<u32> {
        self.scalar
    }

    #[inline]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.length as usize]
    }

    /// The scalar as a `char`, if there is one and it is a valid code point.
    pub fn as_char(&self) -> Option<char> {
        self.scalar.and_then(char::from_u32)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("scalar", &self.scalar.map(|s| format!("U+{s:04X}")))
            .field("classification", &self.classification)
            .field("bytes", &self.bytes())
            .finish()
    }
}
