use std::io::Read;

use tracing::debug;

use crate::{
    cursor::ByteCursor,
    step::Step,
    token::Token,
    utf::{Decode, Endianness},
};

#[derive(Clone, Copy, Debug)]
pub struct Utf16Decoder {
    endianness: Endianness,
}

impl Decode for Utf16Decoder {
    const UNIT_SIZE: usize = 2;

    fn decode_next<R: Read>(&self, cursor: &mut ByteCursor<R>) -> std::io::Result<Step> {
        let mut unit = [0u8; 2];
        match cursor.read_full(&mut unit)? {
            0 => return Ok(Step::End),
            1 => return Ok(Step::Truncated(Token::invalid(&unit[..1]))),
            _ => {}
        }
        let high = self.endianness.u16_from(unit);

        if Self::is_low_surrogate(high) {
            debug!(unit = high, "unpaired low surrogate");
            return Ok(Step::Token(Token::incomplete_surrogate(&unit)));
        }
        if !Self::is_high_surrogate(high) {
            return Ok(Step::Token(Token::ok(high as u32, &unit)));
        }

        let peeked = cursor.peek(2)?;
        let Ok(next) = <[u8; 2]>::try_from(peeked) else {
            return Ok(Step::Truncated(Token::incomplete_surrogate(&unit)));
        };
        let low = self.endianness.u16_from(next);
        if !Self::is_low_surrogate(low) {
            debug!(unit = high, next = low, "high surrogate without a low surrogate");
            return Ok(Step::Token(Token::incomplete_surrogate(&unit)));
        }
        cursor.consume(2);

        let codepoint = ((((high & 0x3FF) as u32) << 10) | (low & 0x3FF) as u32) + 0x1_0000;
        Ok(Step::Token(Token::ok(
            codepoint,
            &[unit[0], unit[1], next[0], next[1]],
        )))
    }
}

impl Utf16Decoder {
    pub const fn new(endianness: Endianness) -> Self {
        Self { endianness }
    }

    #[inline]
    const fn is_high_surrogate(unit: u16) -> bool {
        matches!(unit, 0xD800..=0xDBFF)
    }

    #[inline]
    const fn is_low_surrogate(unit: u16) -> bool {
        matches!(unit, 0xDC00..=0xDFFF)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::Utf16Decoder;
    use crate::{
        step::{Signal, Step},
        token::Token,
        utf::{
            testing::{drain, steps},
            Endianness,
        },
    };

    const BE: Utf16Decoder = Utf16Decoder::new(Endianness::BigEndian);
    const LE: Utf16Decoder = Utf16Decoder::new(Endianness::LittleEndian);

    #[test]
    fn big_endian_characters() {
        let input = [0x00, 0x61, 0x00, 0xC0, 0x30, 0x42, 0xD8, 0x67, 0xDE, 0x3D];
        assert_eq!(
            steps(&BE, &input),
            vec![
                Step::Token(Token::ok('a' as u32, &[0x00, 0x61])),
                Step::Token(Token::ok('À' as u32, &[0x00, 0xC0])),
                Step::Token(Token::ok('あ' as u32, &[0x30, 0x42])),
                Step::Token(Token::ok('𩸽' as u32, &[0xD8, 0x67, 0xDE, 0x3D])),
                Step::End,
            ]
        );
    }

    #[test]
    fn little_endian_characters() {
        let input = [0x61, 0x00, 0xC0, 0x00, 0x42, 0x30, 0x67, 0xD8, 0x3D, 0xDE];
        assert_eq!(
            steps(&LE, &input),
            vec![
                Step::Token(Token::ok('a' as u32, &[0x61, 0x00])),
                Step::Token(Token::ok('À' as u32, &[0xC0, 0x00])),
                Step::Token(Token::ok('あ' as u32, &[0x42, 0x30])),
                Step::Token(Token::ok('𩸽' as u32, &[0x67, 0xD8, 0x3D, 0xDE])),
                Step::End,
            ]
        );
    }

    #[test]
    fn odd_trailing_byte() {
        for decoder in [BE, LE] {
            let out = steps(&decoder, &[0x61]);
            assert_eq!(out, vec![Step::Truncated(Token::invalid(&[0x61]))]);
            assert_eq!(out[0].signal(), Some(Signal::UnexpectedEnd));
        }
    }

    #[test]
    fn high_surrogate_at_end() {
        assert_eq!(
            steps(&BE, &[0xD8, 0x00]),
            vec![Step::Truncated(Token::incomplete_surrogate(&[0xD8, 0x00]))]
        );
        assert_eq!(
            steps(&LE, &[0x00, 0xD8]),
            vec![Step::Truncated(Token::incomplete_surrogate(&[0x00, 0xD8]))]
        );
    }

    #[test]
    fn high_surrogate_then_one_stray_byte() {
        assert_eq!(
            drain(&BE, &[0xD8, 0x00, 0xDC]),
            vec![
                Step::Truncated(Token::incomplete_surrogate(&[0xD8, 0x00])),
                Step::Truncated(Token::invalid(&[0xDC])),
            ]
        );
    }

    #[test]
    fn high_surrogate_followed_by_other_unit() {
        assert_eq!(
            steps(&BE, &[0xD8, 0x00, 0x00, 0x61]),
            vec![
                Step::Token(Token::incomplete_surrogate(&[0xD8, 0x00])),
                Step::Token(Token::ok(0x61, &[0x00, 0x61])),
                Step::End,
            ]
        );
        assert_eq!(
            steps(&LE, &[0x00, 0xD8, 0x61, 0x00]),
            vec![
                Step::Token(Token::incomplete_surrogate(&[0x00, 0xD8])),
                Step::Token(Token::ok(0x61, &[0x61, 0x00])),
                Step::End,
            ]
        );
    }

    #[test]
    fn two_high_surrogates() {
        assert_eq!(
            steps(&BE, &[0xD8, 0x00, 0xD8, 0x3D, 0xDE, 0x00]),
            vec![
                Step::Token(Token::incomplete_surrogate(&[0xD8, 0x00])),
                Step::Token(Token::ok(0x1F600, &[0xD8, 0x3D, 0xDE, 0x00])),
                Step::End,
            ]
        );
    }

    #[test]
    fn lone_low_surrogate() {
        assert_eq!(
            steps(&BE, &[0xDC, 0x00]),
            vec![
                Step::Token(Token::incomplete_surrogate(&[0xDC, 0x00])),
                Step::End,
            ]
        );
        assert_eq!(
            steps(&LE, &[0x00, 0xDC]),
            vec![
                Step::Token(Token::incomplete_surrogate(&[0x00, 0xDC])),
                Step::End,
            ]
        );
    }

    proptest! {
        #[test]
        fn valid_text_round_trips(text in "\\PC{0,32}") {
            let input: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
            let scalars: Vec<u32> = drain(&LE, &input)
                .iter()
                .filter_map(|step| step.token()?.scalar())
                .collect();
            let expected: Vec<u32> = text.chars().map(u32::from).collect();
            prop_assert_eq!(scalars, expected);
        }

        #[test]
        fn every_byte_is_accounted_for(input in proptest::collection::vec(any::<u8>(), 0..64)) {
            let consumed: Vec<u8> = drain(&BE, &input)
                .iter()
                .filter_map(Step::token)
                .flat_map(|token| token.bytes().to_vec())
                .collect();
            prop_assert_eq!(consumed, input);
        }
    }
}
