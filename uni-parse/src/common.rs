use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Parse a particular file in a Unicode data directory.
///
/// The `dir` given should be the directory containing the emoji and CLDR
/// data files. Every line accepted by `D::is_data_line` is parsed and
/// returned in file order.
pub fn parse<P, D>(dir: P) -> Result<Vec<D>, Error>
where
    P: AsRef<Path>,
    D: UniFile,
{
    let mut xs = vec![];
    for result in D::from_dir(dir)? {
        let (_, x) = result?;
        xs.push(x);
    }
    Ok(xs)
}

/// Describes a single line-oriented file in a Unicode data directory.
pub trait UniFile: Clone + fmt::Debug + Eq + FromStr<Err = Error> {
    /// The file path corresponding to this file, relative to the data
    /// directory.
    fn relative_file_path() -> &'static Path;

    /// The full file path corresponding to this file given the data
    /// directory path.
    fn file_path<P: AsRef<Path>>(dir: P) -> PathBuf {
        dir.as_ref().join(Self::relative_file_path())
    }

    /// Create an iterator over each record in this file.
    fn from_dir<P: AsRef<Path>>(
        dir: P,
    ) -> Result<UniLineParser<File, Self>, Error> {
        UniLineParser::from_path(Self::file_path(dir))
    }

    /// Returns true if the given raw line should be handed to this type's
    /// `FromStr` implementation.
    ///
    /// By default, blank lines and `#` comments are skipped.
    fn is_data_line(line: &str) -> bool {
        !line.starts_with('#') && !line.trim().is_empty()
    }
}

/// A line oriented parser for a particular file in a Unicode data directory.
///
/// The `R` type parameter refers to the underlying `io::Read` implementation
/// from which the data is read.
///
/// The `D` type parameter refers to the type of data parsed out of each line.
/// Each item yielded is paired with its 1-based line number.
#[derive(Debug)]
pub struct UniLineParser<R, D> {
    path: Option<PathBuf>,
    rdr: io::BufReader<R>,
    line: String,
    line_number: u64,
    _data: PhantomData<D>,
}

impl<D> UniLineParser<File, D> {
    /// Create a new parser from the given file path.
    pub(crate) fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<UniLineParser<File, D>, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error {
            kind: ErrorKind::Io(e),
            line: None,
            path: Some(path.to_path_buf()),
        })?;
        Ok(UniLineParser::new(Some(path.to_path_buf()), file))
    }
}

impl<R: io::Read, D> UniLineParser<R, D> {
    /// Create a new parser that parses the reader given.
    ///
    /// The path, if present, is only used to annotate errors.
    pub fn new(path: Option<PathBuf>, rdr: R) -> UniLineParser<R, D> {
        UniLineParser {
            path,
            rdr: io::BufReader::new(rdr),
            line: String::new(),
            line_number: 0,
            _data: PhantomData,
        }
    }
}

impl<R: io::Read, D: UniFile> Iterator for UniLineParser<R, D> {
    type Item = Result<(u64, D), Error>;

    fn next(&mut self) -> Option<Result<(u64, D), Error>> {
        loop {
            self.line_number += 1;
            self.line.clear();
            let n = match self.rdr.read_line(&mut self.line) {
                Err(err) => {
                    return Some(Err(Error {
                        kind: ErrorKind::Io(err),
                        line: None,
                        path: self.path.clone(),
                    }))
                }
                Ok(n) => n,
            };
            if n == 0 {
                return None;
            }
            if D::is_data_line(&self.line) {
                break;
            }
        }
        let line_number = self.line_number;
        Some(
            self.line
                .trim_end_matches(&['\n', '\r'][..])
                .parse()
                .map(|data| (line_number, data))
                .map_err(|mut err: Error| {
                    err.line = Some(line_number);
                    err.path = self.path.clone();
                    err
                }),
        )
    }
}

/// A single Unicode codepoint.
///
/// This type's string representation is a hexadecimal number. It is
/// guaranteed to be in the range `[0, 10FFFF]`.
///
/// Note that unlike Rust's `char` type, this may be a surrogate codepoint.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Codepoint(u32);

impl Codepoint {
    /// Create a new codepoint from a `u32`.
    ///
    /// If the given number is not a valid codepoint, then this returns an
    /// error.
    pub fn from_u32(n: u32) -> Result<Codepoint, Error> {
        if n > 0x10FFFF {
            err!("{:x} is not a valid Unicode codepoint", n)
        } else {
            Ok(Codepoint(n))
        }
    }

    /// Return the underlying `u32` codepoint value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Codepoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codepoint, Error> {
        match u32::from_str_radix(s, 16) {
            Ok(n) => Codepoint::from_u32(n),
            Err(err) => {
                err!("failed to parse '{}' as a hexadecimal codepoint: {}", s, err)
            }
        }
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl PartialEq<u32> for Codepoint {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Codepoint> for u32 {
    fn eq(&self, other: &Codepoint) -> bool {
        *self == other.0
    }
}
