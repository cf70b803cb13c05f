use std::io::{ErrorKind, Read};

const DEFAULT_CAPACITY: usize = 8 * 1024;

/// Buffered byte source with non-destructive look-ahead.
///
/// Bytes are pulled from the wrapped reader into an internal buffer on
/// demand. `peek` never advances; `consume`, `read_byte` and `read_full` do.
/// A short result from `peek` or `read_full` means the reader is exhausted.
pub struct ByteCursor<R> {
    inner: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    consumed: u64,
}

impl<R: Read> ByteCursor<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            buf: vec![0; capacity.max(4)],
            start: 0,
            end: 0,
            consumed: 0,
        }
    }

    /// Total number of bytes consumed so far.
    #[inline]
    pub const fn position(&self) -> u64 {
        self.consumed
    }

    #[inline]
    const fn available(&self) -> usize {
        self.end - self.start
    }

    /// Makes at least `n` bytes available unless the reader runs dry first.
    fn fill(&mut self, n: usize) -> std::io::Result<usize> {
        if self.available() >= n {
            return Ok(n);
        }
        if self.start + n > self.buf.len() {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
            if n > self.buf.len() {
                self.buf.resize(n, 0);
            }
        }
        while self.available() < n {
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => break,
                Ok(read) => self.end += read,
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }
        Ok(self.available().min(n))
    }

    pub fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        if self.fill(1)? == 0 {
            return Ok(None);
        }
        let byte = self.buf[self.start];
        self.consume(1);
        Ok(Some(byte))
    }

    /// Consumes up to `out.len()` bytes, returning how many were read.
    pub fn read_full(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
        let n = self.fill(out.len())?;
        out[..n].copy_from_slice(&self.buf[self.start..self.start + n]);
        self.consume(n);
        Ok(n)
    }

    pub fn peek(&mut self, n: usize) -> std::io::Result<&[u8]> {
        let n = self.fill(n)?;
        Ok(&self.buf[self.start..self.start + n])
    }

    /// Commits `n` bytes previously returned by [`ByteCursor::peek`].
    #[inline]
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.available());
        let n = n.min(self.available());
        self.start += n;
        self.consumed += n as u64;
    }
}
