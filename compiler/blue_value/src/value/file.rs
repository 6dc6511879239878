//! Payload of `file` values: an open disk file or one of the process
//! streams.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};

use parking_lot::Mutex;

use crate::errors::{file_closed, io_error, unknown_file_mode, EvalError};

/// What a file value reads from or writes to.
pub enum Stream {
    Disk(File),
    Reader(Box<dyn Read + Send>),
    Writer(Box<dyn Write + Send>),
}

/// How `file(path, mode)` opens its path.
///
/// Mode characters: `r` read, `w` write (creating the file), `a` append,
/// `t` truncate. `w` alone does not truncate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FileMode {
    pub read: bool,
    pub write: bool,
    pub append: bool,
    pub truncate: bool,
}

impl FileMode {
    pub fn parse(mode: &str) -> Result<Self, EvalError> {
        let mut parsed = FileMode::default();
        for c in mode.chars() {
            match c {
                'r' => parsed.read = true,
                'w' => parsed.write = true,
                'a' => parsed.append = true,
                't' => parsed.truncate = true,
                other => return Err(unknown_file_mode(other)),
            }
        }
        if !parsed.write && !parsed.append {
            parsed.read = true;
        }
        Ok(parsed)
    }

    /// Open options for this mode; `perm` is the creation mode on unix.
    pub fn options(self, perm: u32) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(self.read)
            .write(self.write)
            .append(self.append)
            .truncate(self.truncate)
            .create(self.write || self.append);
        #[cfg(unix)]
        std::os::unix::fs::OpenOptionsExt::mode(&mut options, perm);
        #[cfg(not(unix))]
        let _ = perm;
        options
    }
}

/// An open (or closed) file. Closing drops the stream; every later
/// operation fails.
pub struct FileObject {
    pub name: String,
    pub mode: String,
    stream: Mutex<Option<Stream>>,
}

impl FileObject {
    pub(super) fn new(name: String, mode: String, stream: Stream) -> Self {
        FileObject {
            name,
            mode,
            stream: Mutex::new(Some(stream)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stream.lock().is_some()
    }

    fn with_stream<T>(
        &self,
        op: impl FnOnce(&mut Stream) -> io::Result<T>,
    ) -> Result<T, EvalError> {
        let mut guard = self.stream.lock();
        let stream = guard.as_mut().ok_or_else(file_closed)?;
        op(stream).map_err(|err| io_error(&err))
    }

    /// Read up to `limit` bytes; empty at end of input.
    pub fn read(&self, limit: usize) -> Result<String, EvalError> {
        let limit = u64::try_from(limit).unwrap_or(u64::MAX);
        let mut buf = Vec::new();
        self.with_stream(|stream| match stream {
            Stream::Disk(file) => file.take(limit).read_to_end(&mut buf),
            Stream::Reader(reader) => reader.take(limit).read_to_end(&mut buf),
            Stream::Writer(_) => Err(not_readable()),
        })?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Read from the current position to the end.
    pub fn read_all(&self) -> Result<String, EvalError> {
        let mut buf = Vec::new();
        self.with_stream(|stream| match stream {
            Stream::Disk(file) => file.read_to_end(&mut buf),
            Stream::Reader(reader) => reader.read_to_end(&mut buf),
            Stream::Writer(_) => Err(not_readable()),
        })?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write `text`, returning the number of bytes written.
    pub fn write(&self, text: &str) -> Result<usize, EvalError> {
        self.with_stream(|stream| {
            let sink: &mut dyn Write = match stream {
                Stream::Disk(file) => file,
                Stream::Writer(writer) => writer,
                Stream::Reader(_) => return Err(not_writable()),
            };
            sink.write_all(text.as_bytes())?;
            sink.flush()?;
            Ok(text.len())
        })
    }

    pub fn close(&self) -> Result<(), EvalError> {
        let stream = self.stream.lock().take().ok_or_else(file_closed)?;
        if let Stream::Writer(mut writer) = stream {
            writer.flush().map_err(|err| io_error(&err))?;
        }
        Ok(())
    }
}

fn not_readable() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "file not open for reading")
}

fn not_writable() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "file not open for writing")
}

impl fmt::Debug for FileObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileObject")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("open", &self.is_open())
            .finish()
    }
}
