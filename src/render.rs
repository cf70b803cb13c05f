//! One display line per token: glyph, code point, hex dump and name,
//! separated by tabs.

use std::{borrow::Cow, fmt};

use itertools::Itertools;

use crate::token::{Classification, Token};

/// Source of code point names for the last column.
pub trait NameLookup {
    fn name(&self, scalar: u32) -> Option<Cow<'_, str>>;
}

/// Names control characters only: `<control>` followed by the standard
/// alias, as in `<control> LINE FEED`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlNames;

impl NameLookup for ControlNames {
    fn name(&self, scalar: u32) -> Option<Cow<'_, str>> {
        control_alias(scalar).map(|alias| Cow::Owned(format!("<control> {alias}")))
    }
}

const C0_ALIASES: [&str; 32] = [
    "NULL",
    "START OF HEADING",
    "START OF TEXT",
    "END OF TEXT",
    "END OF TRANSMISSION",
    "ENQUIRY",
    "ACKNOWLEDGE",
    "ALERT",
    "BACKSPACE",
    "CHARACTER TABULATION",
    "LINE FEED",
    "LINE TABULATION",
    "FORM FEED",
    "CARRIAGE RETURN",
    "SHIFT OUT",
    "SHIFT IN",
    "DATA LINK ESCAPE",
    "DEVICE CONTROL ONE",
    "DEVICE CONTROL TWO",
    "DEVICE CONTROL THREE",
    "DEVICE CONTROL FOUR",
    "NEGATIVE ACKNOWLEDGE",
    "SYNCHRONOUS IDLE",
    "END OF TRANSMISSION BLOCK",
    "CANCEL",
    "END OF MEDIUM",
    "SUBSTITUTE",
    "ESCAPE",
    "INFORMATION SEPARATOR FOUR",
    "INFORMATION SEPARATOR THREE",
    "INFORMATION SEPARATOR TWO",
    "INFORMATION SEPARATOR ONE",
];

const C1_ALIASES: [&str; 32] = [
    "PADDING CHARACTER",
    "HIGH OCTET PRESET",
    "BREAK PERMITTED HERE",
    "NO BREAK HERE",
    "INDEX",
    "NEXT LINE",
    "START OF SELECTED AREA",
    "END OF SELECTED AREA",
    "CHARACTER TABULATION SET",
    "CHARACTER TABULATION WITH JUSTIFICATION",
    "LINE TABULATION SET",
    "PARTIAL LINE FORWARD",
    "PARTIAL LINE BACKWARD",
    "REVERSE LINE FEED",
    "SINGLE SHIFT TWO",
    "SINGLE SHIFT THREE",
    "DEVICE CONTROL STRING",
    "PRIVATE USE ONE",
    "PRIVATE USE TWO",
    "SET TRANSMIT STATE",
    "CANCEL CHARACTER",
    "MESSAGE WAITING",
    "START OF GUARDED AREA",
    "END OF GUARDED AREA",
    "START OF STRING",
    "SINGLE GRAPHIC CHARACTER INTRODUCER",
    "SINGLE CHARACTER INTRODUCER",
    "CONTROL SEQUENCE INTRODUCER",
    "STRING TERMINATOR",
    "OPERATING SYSTEM COMMAND",
    "PRIVACY MESSAGE",
    "APPLICATION PROGRAM COMMAND",
];

fn control_alias(scalar: u32) -> Option<&'static str> {
    match scalar {
        0x00..=0x1F => Some(C0_ALIASES[scalar as usize]),
        0x7F => Some("DELETE"),
        0x80..=0x9F => Some(C1_ALIASES[(scalar - 0x80) as usize]),
        _ => None,
    }
}

/// Control Pictures stand in for C0 controls and DEL.
fn control_symbol(scalar: u32) -> Option<char> {
    match scalar {
        0x00..=0x1F => char::from_u32(0x2400 + scalar),
        0x7F => Some('\u{2421}'),
        _ => None,
    }
}

/// Display adapter rendering a token as a single line.
pub struct TokenLine<'a, N: ?Sized> {
    token: &'a Token,
    names: &'a N,
}

impl<'a, N: NameLookup + ?Sized> TokenLine<'a, N> {
    pub fn new(token: &'a Token, names: &'a N) -> Self {
        Self { token, names }
    }
}

impl<N: NameLookup + ?Sized> fmt::Display for TokenLine<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self
            .token
            .bytes()
            .iter()
            .format_with(" ", |byte, f| f(&format_args!("{byte:02x}")));
        let scalar = match self.token.scalar() {
            Some(scalar) if self.token.classification().carries_scalar() => scalar,
            _ => return write!(f, "\t\t{hex}\t"),
        };

        match self.token.as_char() {
            Some(c) if c.is_control() => match control_symbol(scalar) {
                Some(symbol) => write!(f, "{symbol}")?,
                None => f.write_str("(control)")?,
            },
            Some(c) => write!(f, "{c}")?,
            None => write!(f, "{}", char::REPLACEMENT_CHARACTER)?,
        }
        write!(f, "\tU+{scalar:04X}\t{hex}\t")?;
        if self.token.classification() == Classification::RedundantEncoding {
            f.write_str("[Redundant encoding]")?;
        }
        if let Some(name) = self.names.name(scalar) {
            f.write_str(&name)?;
        }
        Ok(())
    }
}
