pub mod charset;
pub mod cursor;
pub mod decoder;
mod error;
pub mod render;
pub mod step;
pub mod token;
pub mod utf;

use std::{
    ffi::OsString,
    io::{Read, Write},
    sync::Once,
};

use tracing::debug;

pub use charset::Charset;
pub use cursor::ByteCursor;
pub use decoder::Decoder;
pub use error::Error;
pub use render::{ControlNames, NameLookup, TokenLine};
pub use step::{Signal, Step};
pub use token::{Classification, Token};
pub use utf::Endianness;

pub const USAGE: &str = "\
Usage: unidump [-c charset]

Reads bytes from standard input and prints one line per decoded character.

Options:
  -c, --charset <charset>  select character set (UTF-8 | UTF-16 | UTF-16BE |
                           UTF-16LE | UTF-32 | UTF-32BE | UTF-32LE) [default: UTF-8]
  -h, --help               print this message";

static TRACING_INIT: Once = Once::new();

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub charset: Charset,
    pub help: bool,
}

impl Options {
    pub fn parse(argv: Vec<OsString>) -> Result<Self, Error> {
        let mut options = Self::default();
        let mut args = argv.into_iter().map(|arg| arg.to_string_lossy().into_owned());
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with('-') => {
                    (flag.to_owned(), Some(value.to_owned()))
                }
                _ => (arg.clone(), None),
            };
            match flag.as_str() {
                "-c" | "--charset" | "-charset" => {
                    let value = match inline {
                        Some(value) => value,
                        None => args.next().ok_or(Error::MissingValue("--charset"))?,
                    };
                    options.charset = value.parse()?;
                }
                "-h" | "--help" | "-help" if inline.is_none() => options.help = true,
                _ => return Err(Error::UnexpectedArgument(arg)),
            }
        }
        Ok(options)
    }
}

/// Per-classification tally of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub ok: u64,
    pub invalid: u64,
    pub redundant: u64,
    pub incomplete_surrogates: u64,
    /// Input stopped part way through a code unit.
    pub truncated: bool,
    pub bytes: u64,
}

impl Summary {
    fn record(&mut self, token: &Token) {
        match token.classification() {
            Classification::Ok => self.ok += 1,
            Classification::InvalidByteSequence => self.invalid += 1,
            Classification::RedundantEncoding => self.redundant += 1,
            Classification::IncompleteSurrogatePair => self.incomplete_surrogates += 1,
        }
    }

    pub const fn tokens(&self) -> u64 {
        self.ok + self.invalid + self.redundant + self.incomplete_surrogates
    }
}

/// Decodes `input` as `charset` and writes one line per token to `output`
/// until the input runs out.
///
/// Each line is flushed as soon as it is written so a live pipe shows
/// tokens while the input is still open.
pub fn dump<R, W, N>(
    charset: Charset,
    input: R,
    mut output: W,
    names: &N,
) -> Result<Summary, Error>
where
    R: Read,
    W: Write,
    N: NameLookup + ?Sized,
{
    let mut cursor = ByteCursor::new(input);
    let mut decoder = Decoder::new(charset, &mut cursor);
    let mut summary = Summary::default();
    loop {
        let step = decoder.decode_next()?;
        let signal = step.signal();
        if let Some(token) = step.into_token() {
            summary.record(&token);
            writeln!(output, "{}", TokenLine::new(&token, names))?;
            output.flush()?;
        }
        match signal {
            None => {}
            Some(signal) => {
                summary.truncated = signal == Signal::UnexpectedEnd;
                break;
            }
        }
    }
    summary.bytes = decoder.position();
    debug!(%charset, ?summary, "done");
    Ok(summary)
}

/// Entry point of the `unidump` binary: decodes standard input into
/// standard output according to `argv`.
pub fn unidump(argv: Vec<OsString>) -> Result<(), Error> {
    let options = Options::parse(argv)?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    dump(options.charset, stdin, stdout, &ControlNames)?;
    Ok(())
}
