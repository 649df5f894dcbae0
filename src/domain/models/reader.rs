//! The text stream handed to the YAML parser.

use std::fmt;
use std::io::{self, BufRead, BufReader, Read};

use crate::domain::errors::{SourceError, SourceResult};

/// Handle underneath a [`ConfigReader`].
///
/// `Owned` handles were opened by the source (a file, an HTTP response) and
/// are released with the reader. `Borrowed` handles belong to the caller.
enum Handle<'a> {
    Owned(Box<dyn Read + Send + 'a>),
    Borrowed(&'a mut (dyn Read + Send)),
}

impl Read for Handle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Owned(inner) => inner.read(buf),
            Self::Borrowed(inner) => inner.read(buf),
        }
    }
}

const REPLACEMENT: &[u8] = "\u{FFFD}".as_bytes();

/// Buffered UTF-8 text stream positioned at the start of the content.
///
/// The bytes it yields are always valid UTF-8: malformed input is replaced
/// with U+FFFD, one replacement per malformed sequence, and a sequence cut
/// off by the end of the stream becomes a single U+FFFD. Use `BufRead::lines`,
/// `Read::read_to_string` or [`ConfigReader::into_string`] to get text.
/// Dropping the reader releases an owned handle, so release happens on every
/// exit path. [`ConfigReader::close`] makes that explicit.
pub struct ConfigReader<'a> {
    origin: String,
    inner: BufReader<Handle<'a>>,
    /// Decoded bytes not yet handed out.
    decoded: Vec<u8>,
    pos: usize,
    /// Trailing bytes of an incomplete sequence, waiting for more input.
    pending: Vec<u8>,
}

impl<'a> ConfigReader<'a> {
    pub(crate) fn owned(origin: impl Into<String>, handle: impl Read + Send + 'a) -> Self {
        Self::new(origin.into(), Handle::Owned(Box::new(handle)))
    }

    pub(crate) fn borrowed(origin: impl Into<String>, handle: &'a mut (dyn Read + Send)) -> Self {
        Self::new(origin.into(), Handle::Borrowed(handle))
    }

    fn new(origin: String, handle: Handle<'a>) -> Self {
        Self {
            origin,
            inner: BufReader::new(handle),
            decoded: Vec::new(),
            pos: 0,
            pending: Vec::new(),
        }
    }

    /// Description of the origin this reader was opened from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Whether closing this reader releases the underlying handle.
    pub fn owns_handle(&self) -> bool {
        matches!(self.inner.get_ref(), Handle::Owned(_))
    }

    /// Read the remaining content as text, then close the reader.
    pub fn into_string(mut self) -> SourceResult<String> {
        let mut content = String::new();
        self.read_to_string(&mut content)
            .map_err(|e| SourceError::io(self.origin.clone(), e))?;
        self.close()?;
        Ok(content)
    }

    /// Release the handle this reader opened.
    ///
    /// A no-op for borrowed handles: the caller's stream stays open. Bytes
    /// already buffered by this reader are discarded with it.
    pub fn close(self) -> SourceResult<()> {
        if self.owns_handle() {
            tracing::trace!(origin = %self.origin(), "closing config source handle");
        }
        drop(self);
        Ok(())
    }

    /// Decode the next chunk of input into `decoded`. Leaves `decoded` empty
    /// only at end of stream.
    fn refill(&mut self) -> io::Result<()> {
        self.decoded.clear();
        self.pos = 0;

        while self.decoded.is_empty() {
            let chunk = self.inner.fill_buf()?;
            if chunk.is_empty() {
                if !self.pending.is_empty() {
                    self.pending.clear();
                    self.decoded.extend_from_slice(REPLACEMENT);
                }
                return Ok(());
            }
            self.pending.extend_from_slice(chunk);
            let consumed = chunk.len();
            self.inner.consume(consumed);

            let tail = decode_lossy(&self.pending, &mut self.decoded);
            self.pending = self.pending.split_off(self.pending.len() - tail);
        }
        Ok(())
    }
}

/// Append the decodable prefix of `bytes` to `out`, replacing malformed
/// sequences. Returns the length of the incomplete tail left undecoded.
fn decode_lossy(bytes: &[u8], out: &mut Vec<u8>) -> usize {
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.extend_from_slice(valid.as_bytes());
                return 0;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                out.extend_from_slice(valid);
                match e.error_len() {
                    Some(len) => {
                        out.extend_from_slice(REPLACEMENT);
                        rest = &after[len..];
                    }
                    None => return after.len(),
                }
            }
        }
    }
}

impl Read for ConfigReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for ConfigReader<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.decoded.len() {
            self.refill()?;
        }
        Ok(&self.decoded[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.decoded.len());
    }
}

impl fmt::Debug for ConfigReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigReader")
            .field("origin", &self.origin)
            .field("owns_handle", &self.owns_handle())
            .finish_non_exhaustive()
    }
}
