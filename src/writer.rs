use std::char;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::emoji::{Emoji, Subgroup};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct WriterBuilder(WriterOptions);

#[derive(Clone, Debug)]
struct WriterOptions {
    name: String,
    columns: u64,
    char_literals: bool,
}

impl WriterBuilder {
    /// Create a new builder for emoji table writers.
    ///
    /// The name given corresponds to the Rust module name to use when
    /// applicable.
    pub fn new(name: &str) -> WriterBuilder {
        WriterBuilder(WriterOptions {
            name: name.to_string(),
            columns: 79,
            char_literals: false,
        })
    }

    /// Create a new writer from this builder's configuration.
    pub fn from_writer<W: io::Write + 'static>(&self, wtr: W) -> Writer {
        let mut wtr = LineWriter::new(Box::new(wtr) as Box<dyn io::Write>);
        wtr.columns = self.0.columns as usize;
        Writer { wtr, wrote_header: false, opts: self.0.clone() }
    }

    /// Create a new writer that writes to stdout.
    pub fn from_stdout(&self) -> Writer {
        self.from_writer(io::stdout())
    }

    /// Create a new writer that writes a Rust module to a directory.
    ///
    /// The module's file name is derived from the name given to the
    /// constructor.
    pub fn from_out_dir<P: AsRef<Path>>(&self, out_dir: P) -> Result<Writer> {
        let mut fpath = out_dir.as_ref().join(rust_module_name(&self.0.name));
        fpath.set_extension("rs");
        log::info!("writing {}", fpath.display());
        Ok(self.from_writer(File::create(fpath)?))
    }

    /// Set the column limit to use when writing Rust source code.
    ///
    /// Note that this is adhered to on a "best effort" basis.
    pub fn columns(&mut self, columns: u64) -> &mut WriterBuilder {
        self.0.columns = columns;
        self
    }

    /// When printing Rust source code, emit `char` literals instead of `u32`
    /// literals. Any codepoints that aren't Unicode scalar values (i.e.,
    /// surrogate codepoints) are silently dropped when writing.
    pub fn char_literals(&mut self, yes: bool) -> &mut WriterBuilder {
        self.0.char_literals = yes;
        self
    }
}

/// A writer of emoji catalog tables.
///
/// Every table is emitted as a `pub const` slice in Rust source code.
/// Identifiers of groups and subgroups are indices into the corresponding
/// tables.
pub struct Writer {
    wtr: LineWriter<Box<dyn io::Write + 'static>>,
    wrote_header: bool,
    opts: WriterOptions,
}

impl Writer {
    /// Write the group names, in identifier order.
    pub fn emoji_groups(&mut self, name: &str, groups: &[String]) -> Result<()> {
        self.header()?;
        self.separator()?;

        let name = rust_const_name(&format!("{}_groups", name));
        writeln!(self.wtr, "pub const {}: &'static [&'static str] = &[", name)?;
        for group in groups {
            self.wtr.write_str(&format!("{:?}, ", group))?;
        }
        writeln!(self.wtr, "];")?;

        self.wtr.flush()?;
        Ok(())
    }

    /// Write the subgroup names, in identifier order, each paired with the
    /// identifier of the group that owns it.
    pub fn emoji_subgroups(
        &mut self,
        name: &str,
        subgroups: &[Subgroup],
    ) -> Result<()> {
        self.header()?;
        self.separator()?;

        let name = rust_const_name(&format!("{}_subgroups", name));
        writeln!(
            self.wtr,
            "pub const {}: &'static [(&'static str, u16)] = &[",
            name
        )?;
        for subgroup in subgroups {
            let group = id(subgroup.group)?;
            self.wtr.write_str(&format!("({:?}, {}), ", subgroup.name, group))?;
        }
        writeln!(self.wtr, "];")?;

        self.wtr.flush()?;
        Ok(())
    }

    /// Write the emoji catalog, one entry per line.
    ///
    /// Each entry is a tuple of its base codepoints, its name, its group and
    /// subgroup identifiers, whether it has skin tone variants, its gender
    /// kind (0 for none, 1 for a sign, 2 for a role) and its CLDR names.
    pub fn emoji_catalog(&mut self, name: &str, emojis: &[Emoji]) -> Result<()> {
        self.header()?;
        self.separator()?;

        let name = rust_const_name(name);
        let ty = self.rust_codepoint_type();
        writeln!(
            self.wtr,
            "pub const {}: &'static [(\
                &'static [{}], &'static str, u16, u16, bool, u8, \
                &'static [&'static str])] = &[",
            name, ty
        )?;
        for emoji in emojis {
            let cps: Vec<String> = emoji
                .codepoints
                .iter()
                .filter_map(|&cp| self.rust_codepoint(cp))
                .collect();
            let cldr: Vec<String> =
                emoji.cldr.iter().map(|s| format!("{:?}", s)).collect();
            writeln!(
                self.wtr,
                "  (&[{}], {:?}, {}, {}, {}, {}, &[{}]),",
                cps.join(", "),
                emoji.name,
                id(emoji.group)?,
                id(emoji.subgroup)?,
                emoji.skin_tones,
                emoji.gender.as_u8(),
                cldr.join(", "),
            )?;
        }
        writeln!(self.wtr, "];")?;

        self.wtr.flush()?;
        Ok(())
    }

    fn header(&mut self) -> Result<()> {
        if self.wrote_header {
            return Ok(());
        }
        self.wrote_header = true;
        let mut argv = vec![];
        argv.push(
            env::current_exe()?
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "uni-generate".to_string()),
        );
        for arg in env::args_os().skip(1) {
            let x = arg.to_string_lossy();
            if x.contains('\n') {
                argv.push("[snip (arg too long)]".to_string());
            } else {
                argv.push(x.into_owned());
            }
        }
        writeln!(
            self.wtr,
            "// DO NOT EDIT THIS FILE. IT WAS AUTOMATICALLY GENERATED BY:"
        )?;
        writeln!(self.wtr, "//")?;
        writeln!(self.wtr, "//   {}", argv.join(" "))?;
        writeln!(self.wtr, "//")?;
        writeln!(self.wtr, "// uni-generate is available on crates.io.")?;
        Ok(())
    }

    fn separator(&mut self) -> Result<()> {
        writeln!(self.wtr)?;
        Ok(())
    }

    /// Return valid Rust source code that represents the given codepoint.
    ///
    /// The source code returned is either a u32 literal or a char literal,
    /// depending on the configuration. If the configuration demands a char
    /// literal and the given codepoint is a surrogate, then return None.
    fn rust_codepoint(&self, cp: u32) -> Option<String> {
        if self.opts.char_literals {
            char::from_u32(cp).map(|c| format!("{:?}", c))
        } else {
            Some(format!("0x{:X}", cp))
        }
    }

    /// Return valid Rust source code indicating the type of the codepoint
    /// that we emit based on this writer's configuration.
    fn rust_codepoint_type(&self) -> &'static str {
        if self.opts.char_literals {
            "char"
        } else {
            "u32"
        }
    }
}

#[derive(Debug)]
struct LineWriter<W> {
    wtr: W,
    line: String,
    columns: usize,
    indent: String,
}

impl<W: io::Write> LineWriter<W> {
    fn new(wtr: W) -> LineWriter<W> {
        LineWriter {
            wtr,
            line: String::new(),
            columns: 79,
            indent: "  ".to_string(),
        }
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        if self.line.len() + s.len() > self.columns {
            self.flush_line()?;
        }
        if self.line.is_empty() {
            self.line.push_str(&self.indent);
        }
        self.line.push_str(s);
        Ok(())
    }

    fn flush_line(&mut self) -> io::Result<()> {
        if self.line.is_empty() {
            return Ok(());
        }
        self.wtr.write_all(self.line.trim_end().as_bytes())?;
        self.wtr.write_all(b"\n")?;
        self.line.clear();
        Ok(())
    }
}

impl<W: io::Write> io::Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.flush_line()?;
        self.wtr.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_line()?;
        self.wtr.flush()
    }
}

/// Convert a group or subgroup identifier to the integer type used in the
/// emitted tables.
fn id(id: usize) -> Result<u16> {
    if id > u16::MAX as usize {
        return err!("identifier {} does not fit in a u16", id);
    }
    Ok(id as u16)
}

/// Heuristically produce an appropriate constant Rust name.
fn rust_const_name(s: &str) -> String {
    let mut s = s.replace(|c: char| !c.is_ascii_alphanumeric(), "_");
    s.make_ascii_uppercase();
    s
}

/// Heuristically produce an appropriate module Rust name.
fn rust_module_name(s: &str) -> String {
    let mut s = s.replace('-', "_");
    s.make_ascii_lowercase();
    s
}
