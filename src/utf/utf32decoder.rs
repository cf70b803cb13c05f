use std::io::Read;

use tracing::debug;

use crate::{
    cursor::ByteCursor,
    step::Step,
    token::Token,
    utf::{Decode, Endianness},
};

const MAX_CODEPOINT: u32 = 0x10_FFFF;

#[derive(Clone, Copy, Debug)]
pub struct Utf32Decoder {
    endianness: Endianness,
}

impl Decode for Utf32Decoder {
    const UNIT_SIZE: usize = 4;

    fn decode_next<R: Read>(&self, cursor: &mut ByteCursor<R>) -> std::io::Result<Step> {
        let mut unit = [0u8; 4];
        match cursor.read_full(&mut unit)? {
            0 => return Ok(Step::End),
            n @ 1..=3 => return Ok(Step::Truncated(Token::invalid(&unit[..n]))),
            _ => {}
        }
        let codepoint = self.endianness.u32_from(unit);
        if codepoint > MAX_CODEPOINT {
            debug!(codepoint, "UTF-32 unit beyond U+10FFFF");
            return Ok(Step::Token(Token::invalid(&unit)));
        }
        Ok(Step::Token(Token::ok(codepoint, &unit)))
    }
}

impl Utf32Decoder {
    pub const fn new(endianness: Endianness) -> Self {
        Self { endianness }
    }
}
