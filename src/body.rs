//! Module with the message body types.
//!
//! The body of a message is a [`Stream`], by default a [`MemoryStream`].
//! [`IoStream`] can wrap any I/O resource, e.g. a [`File`], opened using an
//! `fopen(3)` style [`Mode`].

use std::fs::{File, OpenOptions};
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::str::FromStr;
use std::{error, fmt};

use log::warn;

/// Body stream capability.
///
/// All operations fail with [`StreamError::Detached`] once the stream is
/// closed or detached.
pub trait Stream {
    /// Returns `true` if the stream can be read from.
    fn is_readable(&self) -> bool;

    /// Returns `true` if the stream can be written to.
    fn is_writable(&self) -> bool;

    /// Returns `true` if the stream can seek.
    fn is_seekable(&self) -> bool;

    /// Read up to `length` bytes.
    fn read(&mut self, length: usize) -> Result<Vec<u8>, StreamError>;

    /// Write all `bytes`, returning the number of bytes written.
    fn write(&mut self, bytes: &[u8]) -> Result<usize, StreamError>;

    /// Seek to `position`, returning the new position.
    fn seek(&mut self, position: SeekFrom) -> Result<u64, StreamError>;

    /// Seek to the start of the stream.
    fn rewind(&mut self) -> Result<(), StreamError> {
        self.seek(SeekFrom::Start(0)).map(|_| ())
    }

    /// Returns the current position.
    fn tell(&mut self) -> Result<u64, StreamError>;

    /// Returns `true` if a read hit the end of the stream.
    fn eof(&self) -> bool;

    /// Returns the size of the stream, if known.
    fn size(&mut self) -> Option<u64>;

    /// Read the remainder of the stream.
    fn contents(&mut self) -> Result<Vec<u8>, StreamError>;

    /// Close the stream, releasing the underlying resource.
    fn close(&mut self) -> Result<(), StreamError>;

    /// Returns metadata about the stream.
    fn metadata(&self) -> Metadata;
}

/// Metadata of a [`Stream`], see [`Stream::metadata`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// Mode the stream was opened with.
    pub mode: Mode,
    /// Whether or not the stream can seek.
    pub seekable: bool,
    /// Whether or not the underlying resource is closed or detached.
    pub detached: bool,
}

/// In-memory stream, the default body of all messages.
///
/// An empty `MemoryStream` doesn't allocate.
pub type MemoryStream = IoStream<Cursor<Vec<u8>>>;

/// [`Stream`] implementation wrapping an I/O resource.
#[derive(Clone, Debug)]
pub struct IoStream<T> {
    /// `None` if closed or detached.
    inner: Option<T>,
    mode: Mode,
    eof: bool,
}

impl<T> IoStream<T>
where
    T: Read + Write + Seek,
{
    /// Create a new stream from `inner`, which must be opened using `mode`.
    pub const fn new(inner: T, mode: Mode) -> IoStream<T> {
        IoStream {
            inner: Some(inner),
            mode,
            eof: false,
        }
    }

    /// Detach the underlying resource from the stream.
    ///
    /// Afterwards the stream is unusable.
    pub fn detach(&mut self) -> Option<T> {
        let inner = self.inner.take();
        if inner.is_none() {
            warn!("detaching already detached body stream");
        }
        inner
    }

    fn inner(&mut self) -> Result<&mut T, StreamError> {
        self.inner.as_mut().ok_or(StreamError::Detached)
    }
}

impl IoStream<File> {
    /// Open the file at `path` using the `fopen(3)` style `mode`, e.g. `r+`.
    pub fn open<P>(path: P, mode: &str) -> Result<IoStream<File>, StreamError>
    where
        P: AsRef<Path>,
    {
        let mode = mode.parse::<Mode>()?;
        let file = mode.open_options().open(path)?;
        Ok(IoStream::new(file, mode))
    }
}

impl Default for IoStream<Cursor<Vec<u8>>> {
    fn default() -> IoStream<Cursor<Vec<u8>>> {
        IoStream::new(Cursor::new(Vec::new()), Mode::MEMORY)
    }
}

impl From<Vec<u8>> for IoStream<Cursor<Vec<u8>>> {
    fn from(content: Vec<u8>) -> IoStream<Cursor<Vec<u8>>> {
        IoStream::new(Cursor::new(content), Mode::MEMORY)
    }
}

impl From<String> for IoStream<Cursor<Vec<u8>>> {
    fn from(content: String) -> IoStream<Cursor<Vec<u8>>> {
        IoStream::from(content.into_bytes())
    }
}

impl From<&str> for IoStream<Cursor<Vec<u8>>> {
    fn from(content: &str) -> IoStream<Cursor<Vec<u8>>> {
        IoStream::from(content.as_bytes().to_vec())
    }
}

/// Maximum capacity allocated up front by [`IoStream::read`], the buffer
/// grows beyond it as needed.
const MAX_READ_CAPACITY: usize = 8 * 1024;

impl<T> Stream for IoStream<T>
where
    T: Read + Write + Seek,
{
    fn is_readable(&self) -> bool {
        self.inner.is_some() && self.mode.is_readable()
    }

    fn is_writable(&self) -> bool {
        self.inner.is_some() && self.mode.is_writable()
    }

    fn is_seekable(&self) -> bool {
        self.inner.is_some()
    }

    fn read(&mut self, length: usize) -> Result<Vec<u8>, StreamError> {
        let readable = self.mode.is_readable();
        let inner = self.inner()?;
        if !readable {
            return Err(StreamError::NotReadable);
        }
        let mut buf = Vec::with_capacity(length.min(MAX_READ_CAPACITY));
        let n = Read::take(inner, length as u64).read_to_end(&mut buf)?;
        if n < length {
            self.eof = true;
        }
        Ok(buf)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        let writable = self.mode.is_writable();
        let append = self.mode.kind == ModeKind::Append;
        let inner = self.inner()?;
        if !writable {
            return Err(StreamError::NotWritable);
        }
        if append {
            _ = inner.seek(SeekFrom::End(0))?;
        }
        inner.write_all(bytes)?;
        Ok(bytes.len())
    }

    fn seek(&mut self, position: SeekFrom) -> Result<u64, StreamError> {
        let position = self.inner()?.seek(position)?;
        self.eof = false;
        Ok(position)
    }

    fn tell(&mut self) -> Result<u64, StreamError> {
        Ok(self.inner()?.stream_position()?)
    }

    fn eof(&self) -> bool {
        self.inner.is_none() || self.eof
    }

    fn size(&mut self) -> Option<u64> {
        let inner = self.inner.as_mut()?;
        let position = inner.stream_position().ok()?;
        let size = inner.seek(SeekFrom::End(0)).ok()?;
        _ = inner.seek(SeekFrom::Start(position)).ok()?;
        Some(size)
    }

    fn contents(&mut self) -> Result<Vec<u8>, StreamError> {
        let readable = self.mode.is_readable();
        let inner = self.inner()?;
        if !readable {
            return Err(StreamError::NotReadable);
        }
        let mut buf = Vec::new();
        _ = inner.read_to_end(&mut buf)?;
        self.eof = true;
        Ok(buf)
    }

    fn close(&mut self) -> Result<(), StreamError> {
        match self.inner.take() {
            Some(mut inner) => inner.flush().map_err(StreamError::Io),
            None => Ok(()),
        }
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            mode: self.mode,
            seekable: self.is_seekable(),
            detached: self.inner.is_none(),
        }
    }
}

/// Mode used to open a stream, using the same format as `fopen(3)`.
///
/// Format: `r`, `w`, `a`, `x` or `c`, optionally followed by `+`, followed by
/// any number of `b` or `t` flags (which are ignored).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mode {
    kind: ModeKind,
    /// `+` flag, opens the stream for both reading and writing.
    update: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ModeKind {
    /// `r`: read only.
    Read,
    /// `w`: write only, truncating the resource.
    Write,
    /// `a`: write only, appending to the resource.
    Append,
    /// `x`: write only, the resource must not exist yet.
    Exclusive,
    /// `c`: write only, not truncating the resource.
    Create,
}

impl Mode {
    /// Mode used by in-memory streams, `w+`.
    pub const MEMORY: Mode = Mode {
        kind: ModeKind::Write,
        update: true,
    };

    /// Returns `true` if the mode allows reading.
    pub const fn is_readable(self) -> bool {
        self.update || matches!(self.kind, ModeKind::Read)
    }

    /// Returns `true` if the mode allows writing.
    pub const fn is_writable(self) -> bool {
        self.update || !matches!(self.kind, ModeKind::Read)
    }

    /// Returns the options to open a file with this mode.
    pub fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        _ = options.read(self.is_readable()).write(self.is_writable());
        match self.kind {
            ModeKind::Read => {}
            ModeKind::Write => {
                _ = options.create(true).truncate(true);
            }
            ModeKind::Append => {
                _ = options.create(true).append(true);
            }
            ModeKind::Exclusive => {
                _ = options.create_new(true);
            }
            ModeKind::Create => {
                _ = options.create(true);
            }
        }
        options
    }
}

impl FromStr for Mode {
    type Err = StreamError;

    fn from_str(mode: &str) -> Result<Mode, StreamError> {
        let mut chars = mode.chars();
        let kind = match chars.next() {
            Some('r') => ModeKind::Read,
            Some('w') => ModeKind::Write,
            Some('a') => ModeKind::Append,
            Some('x') => ModeKind::Exclusive,
            Some('c') => ModeKind::Create,
            _ => return Err(StreamError::InvalidMode(mode.to_owned())),
        };
        let rest = chars.as_str();
        let (update, flags) = match rest.strip_prefix('+') {
            Some(flags) => (true, flags),
            None => (false, rest),
        };
        if !flags.chars().all(|c| matches!(c, 'b' | 't')) {
            return Err(StreamError::InvalidMode(mode.to_owned()));
        }
        Ok(Mode { kind, update })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            ModeKind::Read => "r",
            ModeKind::Write => "w",
            ModeKind::Append => "a",
            ModeKind::Exclusive => "x",
            ModeKind::Create => "c",
        })?;
        if self.update {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// Error returned by [`Stream`] operations.
#[derive(Debug)]
#[non_exhaustive]
pub enum StreamError {
    /// The stream is closed or detached.
    Detached,
    /// The stream is not opened for reading.
    NotReadable,
    /// The stream is not opened for writing.
    NotWritable,
    /// Invalid `fopen(3)` style mode.
    InvalidMode(String),
    /// Error from the underlying resource.
    Io(io::Error),
}

impl From<io::Error> for StreamError {
    fn from(err: io::Error) -> StreamError {
        StreamError::Io(err)
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Detached => f.write_str("stream is detached"),
            StreamError::NotReadable => f.write_str("stream is not readable"),
            StreamError::NotWritable => f.write_str("stream is not writable"),
            StreamError::InvalidMode(mode) => write!(f, "invalid stream mode: `{mode}`"),
            StreamError::Io(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl error::Error for StreamError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            StreamError::Io(err) => Some(err),
            _ => None,
        }
    }
}
