use std::ffi::OsStr;
use std::ops;

use crate::error::Result;
use crate::writer::{Writer, WriterBuilder};

/// Wraps clap matches and provides convenient accessors to various parameters.
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ops::Deref for ArgMatches<'a> {
    type Target = clap::ArgMatches<'a>;
    fn deref(&self) -> &clap::ArgMatches<'a> {
        &self.0
    }
}

impl<'a> ArgMatches<'a> {
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    /// Return the directory holding `emoji-test.txt` and the CLDR
    /// annotations.
    pub fn data_dir(&self) -> Result<&'a OsStr> {
        match self.0.value_of_os("data-dir") {
            Some(dir) => Ok(dir),
            None => err!("missing data directory"),
        }
    }

    /// Return the table name given on the command line.
    pub fn name(&self) -> &str {
        self.0.value_of("name").unwrap_or("EMOJI")
    }

    /// Create a writer for the table named `name`.
    ///
    /// When an output directory is given, the tables are written to
    /// `<out-dir>/<name>.rs`. Otherwise they go to stdout.
    pub fn writer(&self, name: &str) -> Result<Writer> {
        let mut builder = WriterBuilder::new(name);
        builder
            .columns(79)
            .char_literals(self.is_present("chars"));
        match self.value_of_os("out-dir") {
            None => Ok(builder.from_stdout()),
            Some(dir) => builder.from_out_dir(dir),
        }
    }
}
