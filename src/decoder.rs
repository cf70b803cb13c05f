use std::io::Read;

use tracing::{trace, warn};

use crate::{
    charset::Charset,
    cursor::ByteCursor,
    step::Step,
    utf::{
        utf16decoder::Utf16Decoder, utf32decoder::Utf32Decoder, utf8decoder::Utf8Decoder, Decode,
    },
};

#[derive(Clone, Copy, Debug)]
enum Codec {
    Utf8(Utf8Decoder),
    Utf16(Utf16Decoder),
    Utf32(Utf32Decoder),
}

/// A codec bound to the cursor it reads from.
///
/// The cursor is borrowed, not owned: its position is the only state that
/// carries over between calls to [`Decoder::decode_next`].
pub struct Decoder<'c, R> {
    cursor: &'c mut ByteCursor<R>,
    codec: Codec,
    charset: Charset,
}

impl<'c, R: Read> Decoder<'c, R> {
    pub fn new(charset: Charset, cursor: &'c mut ByteCursor<R>) -> Self {
        let codec = match charset {
            Charset::Utf8 => Codec::Utf8(Utf8Decoder),
            Charset::Utf16(endianness) => Codec::Utf16(Utf16Decoder::new(endianness)),
            Charset::Utf32(endianness) => Codec::Utf32(Utf32Decoder::new(endianness)),
        };
        Self {
            cursor,
            codec,
            charset,
        }
    }

    pub const fn charset(&self) -> Charset {
        self.charset
    }

    /// Bytes consumed from the cursor so far.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Decodes one token, or reports that the input is exhausted.
    ///
    /// I/O errors other than running out of input are returned as-is.
    pub fn decode_next(&mut self) -> std::io::Result<Step> {
        let offset = self.cursor.position();
        let step = match self.codec {
            Codec::Utf8(decoder) => Self::run(&decoder, self.cursor)?,
            Codec::Utf16(decoder) => Self::run(&decoder, self.cursor)?,
            Codec::Utf32(decoder) => Self::run(&decoder, self.cursor)?,
        };
        match &step {
            Step::Token(token) => trace!(
                offset,
                classification = %token.classification(),
                scalar = ?token.scalar(),
                "decoded"
            ),
            Step::Truncated(token) => warn!(
                offset,
                charset = %self.charset,
                length = token.bytes().len(),
                "input ended in the middle of a code unit"
            ),
            Step::End => trace!(offset, "end of input"),
        }
        Ok(step)
    }

    fn run<D: Decode>(decoder: &D, cursor: &mut ByteCursor<R>) -> std::io::Result<Step> {
        let step = decoder.decode_next(cursor)?;
        if let Step::Token(token) = &step {
            debug_assert_eq!(token.bytes().len() % D::UNIT_SIZE, 0);
        }
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Decoder;
    use crate::{
        charset::Charset,
        cursor::ByteCursor,
        step::{Signal, Step},
        token::{Classification, Token},
        utf::Endianness,
    };

    fn scalars(charset: Charset, input: &[u8]) -> Vec<u32> {
        let mut cursor = ByteCursor::new(input);
        let mut decoder = Decoder::new(charset, &mut cursor);
        let mut out = Vec::new();
        loop {
            let step = decoder.decode_next().unwrap();
            if let Some(token) = step.token() {
                assert_eq!(token.classification(), Classification::Ok);
                out.extend(token.scalar());
            }
            if step.signal().is_some() {
                assert_eq!(step.signal(), Some(Signal::Exhausted));
                return out;
            }
        }
    }

    #[test]
    fn same_scalars_across_codecs() {
        let expected = vec![0x61, 0xC0, 0x3042, 0x29E3D];
        let text = "aÀあ𩸽";
        let utf16be: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        let utf16le: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        let utf32be: Vec<u8> = text.chars().flat_map(|c| u32::from(c).to_be_bytes()).collect();
        let utf32le: Vec<u8> = text.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect();

        assert_eq!(scalars(Charset::Utf8, text.as_bytes()), expected);
        assert_eq!(
            scalars(Charset::Utf16(Endianness::BigEndian), &utf16be),
            expected
        );
        assert_eq!(
            scalars(Charset::Utf16(Endianness::LittleEndian), &utf16le),
            expected
        );
        assert_eq!(
            scalars(Charset::Utf32(Endianness::BigEndian), &utf32be),
            expected
        );
        assert_eq!(
            scalars(Charset::Utf32(Endianness::LittleEndian), &utf32le),
            expected
        );
    }

    #[test]
    fn stray_byte_in_utf16() {
        let mut cursor = ByteCursor::new(&[0x61][..]);
        let mut decoder = Decoder::new(Charset::Utf16(Endianness::BigEndian), &mut cursor);
        let step = decoder.decode_next().unwrap();
        assert_eq!(step, Step::Truncated(Token::invalid(&[0x61])));
        assert_eq!(step.signal(), Some(Signal::UnexpectedEnd));
        assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn cursor_outlives_decoder() {
        let mut cursor = ByteCursor::new(&b"ab"[..]);
        {
            let mut decoder = Decoder::new(Charset::Utf8, &mut cursor);
            assert_eq!(decoder.charset(), Charset::Utf8);
            decoder.decode_next().unwrap();
        }
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_byte().unwrap(), Some(b'b'));
    }
}
