use crate::token::Token;

/// Out-of-band state of the byte stream after a decode step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// The stream ended on a unit boundary.
    Exhausted,
    /// The stream ended part way through a unit.
    UnexpectedEnd,
}

/// Result of one decode step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Token(Token),
    /// Best-effort token for a unit cut short by the end of input.
    Truncated(Token),
    End,
}

impl Step {
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) | Self::Truncated(token) => Some(token),
            Self::End => None,
        }
    }

    pub const fn into_token(self) -> Option<Token> {
        match self {
            Self::Token(token) | Self::Truncated(token) => Some(token),
            Self::End => None,
        }
    }

    pub const fn signal(&self) -> Option<Signal> {
        match self {
            Self::Token(_) => None,
            Self::Truncated(_) => Some(Signal::UnexpectedEnd),
            Self::End => Some(Signal::Exhausted),
        }
    }
}
