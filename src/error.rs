use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unknown charset `{0}`")]
    UnknownCharset(String),
    #[error("unsupported code unit width {0}, expected 8, 16 or 32")]
    UnsupportedWidth(u8),
    #[error("option `{0}` requires a value")]
    MissingValue(&'static str),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

impl Error {
    /// Whether the error came from how the tool was invoked.
    pub const fn is_usage(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
