use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Represents any kind of error that can occur while parsing emoji data.
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) line: Option<u64>,
    pub(crate) path: Option<PathBuf>,
}

/// The kind of error that occurred while parsing emoji data.
#[derive(Debug)]
pub enum ErrorKind {
    /// An I/O error.
    Io(io::Error),
    /// A generic parse error.
    Parse(String),
    /// The CLDR document was not well formed XML.
    Xml(String),
}

impl Error {
    /// Create a new parse error from the given message.
    pub(crate) fn parse(msg: String) -> Error {
        Error { kind: ErrorKind::Parse(msg), line: None, path: None }
    }

    /// Create a new XML error from the given message.
    pub(crate) fn xml(msg: String) -> Error {
        Error { kind: ErrorKind::Xml(msg), line: None, path: None }
    }

    /// Return the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the line number at which this error occurred, if available.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Return the file path associated with this error, if one exists.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Unwrap this error into its underlying kind.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns true if and only if this is an I/O error.
    ///
    /// If this returns true, the underlying `ErrorKind` is guaranteed to be
    /// `ErrorKind::Io`.
    pub fn is_io_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }

    pub(crate) fn with_line(mut self, line: u64) -> Error {
        self.line = Some(line);
        self
    }

    pub(crate) fn with_path<P: AsRef<Path>>(mut self, path: P) -> Error {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error { kind: ErrorKind::Io(err), line: None, path: None }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref path) = self.path {
            if let Some(line) = self.line {
                write!(f, "{}:{}: ", path.display(), line)?;
            } else {
                write!(f, "{}: ", path.display())?;
            }
        } else if let Some(line) = self.line {
            write!(f, "error on line {}: ", line)?;
        }
        match self.kind {
            ErrorKind::Io(ref err) => write!(f, "{}", err),
            ErrorKind::Parse(ref msg) => write!(f, "{}", msg),
            ErrorKind::Xml(ref msg) => write!(f, "invalid XML: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_with_location() {
        let err = Error::parse("bad row".to_string())
            .with_line(12)
            .with_path("emoji/emoji-test.txt");
        assert_eq!(err.to_string(), "emoji/emoji-test.txt:12: bad row");

        let err = Error::parse("bad row".to_string()).with_line(3);
        assert_eq!(err.to_string(), "error on line 3: bad row");
    }
}
