use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// An error that aborts building the emoji catalog.
///
/// The upstream data is versioned and trusted, so every inconsistency is
/// fatal. There is no partial catalog.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    line: Option<u64>,
}

/// The kind of error that occurred while building the emoji catalog.
#[derive(Debug)]
pub enum ErrorKind {
    /// A structurally invalid line: a bad codepoint, a missing field, a row
    /// outside of any group, or a second neutral definition of an entry.
    MalformedInput(String),
    /// A skin tone, gender or role variant that matches no entry. This means
    /// either that the variant came before its neutral definition or that
    /// the role table is missing a row.
    UnresolvedVariant {
        /// The canonical key that was looked up last.
        key: String,
        /// The name of the variant.
        name: String,
    },
}

impl Error {
    pub(crate) fn malformed(msg: String) -> Error {
        Error { kind: ErrorKind::MalformedInput(msg), line: None }
    }

    pub(crate) fn unresolved(key: String, name: &str) -> Error {
        Error {
            kind: ErrorKind::UnresolvedVariant { key, name: name.to_string() },
            line: None,
        }
    }

    pub(crate) fn with_line(mut self, line: u64) -> Error {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }

    /// Return the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the line of emoji-test.txt this error occurred on, if known.
    pub fn line(&self) -> Option<u64> {
        self.line
    }
}

impl error::Error for Error {}

impl From<uni_parse::Error> for Error {
    fn from(err: uni_parse::Error) -> Error {
        let line = err.line();
        let msg = match err.into_kind() {
            uni_parse::ErrorKind::Parse(msg) => msg,
            uni_parse::ErrorKind::Xml(msg) => msg,
            uni_parse::ErrorKind::Io(err) => err.to_string(),
        };
        Error { kind: ErrorKind::MalformedInput(msg), line }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "emoji-test.txt:{}: ", line)?;
        }
        match self.kind {
            ErrorKind::MalformedInput(ref msg) => {
                write!(f, "malformed input: {}", msg)
            }
            ErrorKind::UnresolvedVariant { ref key, ref name } => write!(
                f,
                "unresolved variant '{}': no entry for [{}]",
                name, key
            ),
        }
    }
}
