//! The [`ByteStream`] capability and its concrete implementations.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use thiserror::Error;

/// Error surfaced by any [`ByteStream`] operation.
#[derive(Debug, Error)]
pub enum IoError {
    /// A fixed-size read ran out of bytes before filling the caller's
    /// buffer. Short reads are always an error for this trait: callers
    /// never observe a partially filled buffer.
    #[error("short read: wanted {expected} bytes, stream had {available} remaining")]
    ShortRead {
        /// Number of bytes the caller asked for.
        expected: usize,
        /// Number of bytes actually available before EOF.
        available: usize,
    },
    /// The underlying OS-level operation failed.
    #[error("{operation} failed: {source}")]
    Os {
        /// Name of the failing operation, for diagnostics.
        operation: &'static str,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A seekable byte stream: the sole capability the tdmsync core requires
/// from its caller's I/O layer.
///
/// Every operation is blocking. There is no async variant — the core is
/// fully synchronous (see the workspace's concurrency notes) and leaves any
/// asynchronous wrapping to the caller.
pub trait ByteStream {
    /// Fills `buf` completely, blocking until it is full.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ShortRead`] if the stream reaches EOF before
    /// `buf` is filled.
    fn read(&mut self, buf: &mut [u8]) -> Result<(), IoError>;

    /// Writes all of `buf`, blocking until it is drained.
    fn write(&mut self, buf: &[u8]) -> Result<(), IoError>;

    /// Moves the stream's cursor to an absolute byte position.
    fn seek(&mut self, pos: u64) -> Result<(), IoError>;

    /// Returns the stream's current cursor position.
    fn tell(&mut self) -> Result<u64, IoError>;

    /// Returns the total length of the stream, in bytes.
    fn size(&mut self) -> Result<u64, IoError>;
}

/// A [`ByteStream`] backed by an open [`File`].
#[derive(Debug)]
pub struct FileStream {
    file: File,
}

impl FileStream {
    /// Opens `path` for reading and writing, creating it if it does not
    /// exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| IoError::Os {
                operation: "open",
                source,
            })?;
        Ok(Self { file })
    }

    /// Opens `path` read-only.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path).map_err(|source| IoError::Os {
            operation: "open",
            source,
        })?;
        Ok(Self { file })
    }

    /// Wraps an already-open file.
    #[must_use]
    pub fn from_file(file: File) -> Self {
        Self { file }
    }
}

impl ByteStream for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<(), IoError> {
        self.file
            .read_exact(buf)
            .map_err(|source| classify_read_error(source, buf.len()))
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), IoError> {
        self.file.write_all(buf).map_err(|source| IoError::Os {
            operation: "write",
            source,
        })
    }

    fn seek(&mut self, pos: u64) -> Result<(), IoError> {
        self.file
            .seek(SeekFrom::Start(pos))
            .map(|_| ())
            .map_err(|source| IoError::Os {
                operation: "seek",
                source,
            })
    }

    fn tell(&mut self) -> Result<u64, IoError> {
        self.file
            .stream_position()
            .map_err(|source| IoError::Os {
                operation: "tell",
                source,
            })
    }

    fn size(&mut self) -> Result<u64, IoError> {
        self.file
            .metadata()
            .map(|meta| meta.len())
            .map_err(|source| IoError::Os {
                operation: "size",
                source,
            })
    }
}

/// A [`ByteStream`] backed by an in-memory buffer.
///
/// Used throughout the test suites in preference to temporary files
/// wherever a real file is not the thing under test.
#[derive(Debug, Default, Clone)]
pub struct MemStream {
    buf: Vec<u8>,
    pos: usize,
}

impl MemStream {
    /// Creates an empty in-memory stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory stream pre-populated with `data`.
    #[must_use]
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: data.into(),
            pos: 0,
        }
    }

    /// Consumes the stream, returning its backing buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Borrows the stream's backing buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl ByteStream for MemStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<(), IoError> {
        let available = self.buf.len().saturating_sub(self.pos);
        if available < buf.len() {
            return Err(IoError::ShortRead {
                expected: buf.len(),
                available,
            });
        }
        buf.copy_from_slice(&self.buf[self.pos..self.pos + buf.len()]);
        self.pos += buf.len();
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), IoError> {
        let end = self.pos + buf.len();
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[self.pos..end].copy_from_slice(buf);
        self.pos = end;
        Ok(())
    }

    fn seek(&mut self, pos: u64) -> Result<(), IoError> {
        self.pos = pos as usize;
        Ok(())
    }

    fn tell(&mut self) -> Result<u64, IoError> {
        Ok(self.pos as u64)
    }

    fn size(&mut self) -> Result<u64, IoError> {
        Ok(self.buf.len() as u64)
    }
}

fn classify_read_error(source: std::io::Error, expected: usize) -> IoError {
    if source.kind() == std::io::ErrorKind::UnexpectedEof {
        IoError::ShortRead {
            expected,
            available: 0,
        }
    } else {
        IoError::Os {
            operation: "read",
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_stream_round_trips() {
        let mut stream = MemStream::new();
        stream.write(b"hello world").unwrap();
        stream.seek(0).unwrap();
        let mut buf = [0u8; 5];
        stream.read(&mut buf).unwrap();
        assert_eq!(&buf, b"hello");
        assert_eq!(stream.tell().unwrap(), 5);
        assert_eq!(stream.size().unwrap(), 11);
    }

    #[test]
    fn mem_stream_short_read_is_error() {
        let mut stream = MemStream::from_bytes(*b"ab");
        let mut buf = [0u8; 4];
        assert!(matches!(
            stream.read(&mut buf),
            Err(IoError::ShortRead {
                expected: 4,
                available: 2
            })
        ));
    }

    #[test]
    fn file_stream_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        {
            let mut stream = FileStream::open(&path).unwrap();
            stream.write(b"0123456789").unwrap();
        }
        let mut stream = FileStream::open_read_only(&path).unwrap();
        assert_eq!(stream.size().unwrap(), 10);
        stream.seek(3).unwrap();
        let mut buf = [0u8; 4];
        stream.read(&mut buf).unwrap();
        assert_eq!(&buf, b"3456");
    }
}
