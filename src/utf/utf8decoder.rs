use std::io::Read;

use tracing::{debug, trace};

use crate::{cursor::ByteCursor, step::Step, token::Token, utf::Decode};

#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8Decoder;

impl Decode for Utf8Decoder {
    const UNIT_SIZE: usize = 1;

    fn decode_next<R: Read>(&self, cursor: &mut ByteCursor<R>) -> std::io::Result<Step> {
        let Some(lead) = cursor.read_byte()? else {
            return Ok(Step::End);
        };
        if lead.is_ascii() {
            return Ok(Step::Token(Token::ok(lead as u32, &[lead])));
        }
        let Some((full_length, payload, minimum)) = Self::leader(lead) else {
            debug!(byte = lead, "invalid UTF-8 leader");
            return Ok(Step::Token(Token::invalid(&[lead])));
        };

        let mut bytes = [lead, 0, 0, 0];
        let mut codepoint = payload;
        for i in 1..full_length {
            let Some(&next) = cursor.peek(1)?.first() else {
                return Ok(Step::Truncated(Token::invalid(&bytes[..i])));
            };
            if !Self::is_continuation(next) {
                debug!(byte = next, at = i, "missing UTF-8 continuation byte");
                return Ok(Step::Token(Token::invalid(&bytes[..i])));
            }
            cursor.consume(1);
            bytes[i] = next;
            codepoint = (codepoint << 6) | (next & 0b0011_1111) as u32;
        }

        let raw = &bytes[..full_length];
        if codepoint < minimum {
            trace!(codepoint, length = full_length, "overlong UTF-8 sequence");
            return Ok(Step::Token(Token::redundant(codepoint, raw)));
        }
        Ok(Step::Token(Token::ok(codepoint, raw)))
    }
}

impl Utf8Decoder {
    /// Sequence length, leader payload bits and the smallest value that
    /// needs that length, for a multi-byte leader.
    #[inline]
    const fn leader(byte: u8) -> Option<(usize, u32, u32)> {
        match byte {
            0xC0..=0xDF => Some((2, (byte & 0b0001_1111) as u32, 0x80)),
            0xE0..=0xEF => Some((3, (byte & 0b0000_1111) as u32, 0x800)),
            0xF0..=0xF7 => Some((4, (byte & 0b0000_0111) as u32, 0x1_0000)),
            _ => None,
        }
    }

    #[inline]
    const fn is_continuation(byte: u8) -> bool {
        byte & 0b1100_0000 == 0b1000_0000
    }
}
