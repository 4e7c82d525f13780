/*!
Builds a deduplicated emoji catalog from `emoji-test.txt`.

`emoji-test.txt` lists every emoji sequence variant on its own line: the
neutral definition, each skin tone, each gendered spelling and several
qualification levels of each. The catalog keeps one entry per neutral
definition and folds every variant into flags on that entry. Variants always
come after their neutral definition in the listing, so a single pass over the
file suffices.
*/

use std::ops::RangeInclusive;
use std::path::Path;

use uni_parse::{
    CldrAnnotations, EmojiSequence, EmojiStatus, EmojiTestLine, UniFile,
};

use crate::args::ArgMatches;

pub use self::catalog::{key, Catalog, Emoji};
pub use self::classify::{classify, GenderKind};
pub use self::error::{Error, ErrorKind};
pub use self::index::{GroupIndex, Subgroup};
pub use self::roles::RoleTable;

mod annotate;
mod catalog;
mod classify;
mod error;
mod index;
mod render;
mod roles;

/// ZERO WIDTH JOINER
pub const ZWJ: u32 = 0x200D;
/// VARIATION SELECTOR-16, requesting emoji presentation.
pub const EMOJI_PRESENTATION: u32 = 0xFE0F;
/// VARIATION SELECTOR-15, requesting text presentation.
pub const TEXT_PRESENTATION: u32 = 0xFE0E;
/// COMBINING ENCLOSING KEYCAP
pub const KEYCAP: u32 = 0x20E3;
/// FEMALE SIGN
pub const FEMALE_SIGN: u32 = 0x2640;
/// MALE SIGN
pub const MALE_SIGN: u32 = 0x2642;
/// ADULT, i.e., the gender neutral "person" emoji.
pub const ADULT: u32 = 0x1F9D1;
/// TAG LATIN SMALL LETTER G, which starts every subdivision flag tag
/// sequence (`gbeng`, `gbsct`, `gbwls`).
pub const TAG_LATIN_SMALL_G: u32 = 0xE0067;
/// EMOJI MODIFIER FITZPATRICK TYPE-1-2 through TYPE-6.
pub const SKIN_TONES: RangeInclusive<u32> = 0x1F3FB..=0x1F3FF;
/// REGIONAL INDICATOR SYMBOL LETTER A through Z.
pub const REGIONAL_INDICATORS: RangeInclusive<u32> = 0x1F1E6..=0x1F1FF;

fn is_skin_tone(cp: u32) -> bool {
    SKIN_TONES.contains(&cp)
}

fn is_regional_indicator(cp: u32) -> bool {
    REGIONAL_INDICATORS.contains(&cp)
}

/// The finished catalog, with its group structure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmojiCatalog {
    /// All entries, in the order of their neutral definitions.
    pub emojis: Vec<Emoji>,
    /// Group names, indexed by group identifier.
    pub groups: Vec<String>,
    /// Subgroups, indexed by subgroup identifier.
    pub subgroups: Vec<Subgroup>,
}

/// Builds an emoji catalog from the lines of `emoji-test.txt`, in order.
#[derive(Debug)]
pub struct Builder {
    catalog: Catalog,
    index: GroupIndex,
    roles: RoleTable,
    group: Option<(String, usize)>,
    subgroup: Option<usize>,
    skipped: usize,
    dropped: usize,
}

impl Builder {
    /// Create a new builder that matches role variants with the given table.
    pub fn new(roles: RoleTable) -> Builder {
        log::debug!("using {} gendered role prefixes", roles.len());
        Builder {
            catalog: Catalog::new(),
            index: GroupIndex::new(),
            roles,
            group: None,
            subgroup: None,
            skipped: 0,
            dropped: 0,
        }
    }

    /// Add the next line of `emoji-test.txt`.
    ///
    /// Any error is reported against the given line number.
    pub fn push(
        &mut self,
        line_number: u64,
        line: EmojiTestLine,
    ) -> error::Result<()> {
        self.line(line).map_err(|err| err.with_line(line_number))
    }

    fn line(&mut self, line: EmojiTestLine) -> error::Result<()> {
        match line {
            EmojiTestLine::Group(name) => {
                let id = self.index.intern_group(&name);
                log::debug!("group {}: {}", id, name);
                self.group = Some((name, id));
                self.subgroup = None;
            }
            EmojiTestLine::Subgroup(name) => {
                let group = match self.group {
                    Some((ref group, _)) => group,
                    None => {
                        return Err(Error::malformed(format!(
                            "subgroup '{}' outside of any group",
                            name
                        )))
                    }
                };
                self.subgroup = Some(self.index.intern_subgroup(group, &name));
            }
            EmojiTestLine::Sequence(seq) => self.sequence(seq)?,
        }
        Ok(())
    }

    fn sequence(&mut self, seq: EmojiSequence) -> error::Result<()> {
        // Only fully-qualified sequences should be produced by keyboards and
        // other input methods. The rest duplicate them.
        if seq.status != EmojiStatus::FullyQualified {
            self.skipped += 1;
            return Ok(());
        }
        let (group, subgroup) = match (&self.group, self.subgroup) {
            (&Some((_, group)), Some(subgroup)) => (group, subgroup),
            _ => {
                return Err(Error::malformed(format!(
                    "'{}' is not preceded by a group and subgroup",
                    seq.name
                )))
            }
        };
        let cps: Vec<u32> = seq.codepoints.iter().map(|cp| cp.value()).collect();
        let mut variant = match classify(&seq.name, &cps) {
            Some(variant) => variant,
            None => {
                log::debug!("dropping '{}'", seq.name);
                self.dropped += 1;
                return Ok(());
            }
        };
        self.roles.apply(&mut variant);
        self.catalog.ingest(variant, &seq.name, group, subgroup)
    }

    /// Finish building, attaching CLDR short names when annotations are
    /// given.
    pub fn finish(self, cldr: Option<&CldrAnnotations>) -> EmojiCatalog {
        let mut emojis = self.catalog.into_emojis();
        if let Some(cldr) = cldr {
            let missing = annotate::annotate(&mut emojis, cldr);
            log::info!(
                "{} of {} emoji have no CLDR annotation",
                missing,
                emojis.len()
            );
        }
        let (groups, subgroups) = self.index.into_parts();
        log::info!(
            "cataloged {} emoji in {} groups and {} subgroups \
             ({} rows not fully-qualified, {} combinations dropped)",
            emojis.len(),
            groups.len(),
            subgroups.len(),
            self.skipped,
            self.dropped,
        );
        EmojiCatalog { emojis, groups, subgroups }
    }
}

/// Feed every line of a parsed `emoji-test.txt` to the given builder.
///
/// Lines that fail to parse are malformed input. I/O errors are reported as
/// they are.
pub fn read_listing<I>(builder: &mut Builder, lines: I) -> crate::error::Result<()>
where
    I: IntoIterator<Item = Result<(u64, EmojiTestLine), uni_parse::Error>>,
{
    for result in lines {
        let (line_number, line) = match result {
            Ok(x) => x,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => return Err(Error::from(err).into()),
        };
        builder.push(line_number, line)?;
    }
    Ok(())
}

/// Build the catalog from the data directory named on the command line.
fn build(args: &ArgMatches<'_>, cldr: bool) -> crate::error::Result<EmojiCatalog> {
    let dir = Path::new(args.data_dir()?);
    let mut builder = Builder::new(RoleTable::upstream());
    read_listing(&mut builder, EmojiTestLine::from_dir(dir)?)?;

    let cldr = if !cldr || args.is_present("no-cldr") {
        None
    } else if let Some(path) = args.value_of_os("cldr") {
        Some(CldrAnnotations::from_path(path)?)
    } else {
        Some(CldrAnnotations::from_dir(dir)?)
    };
    Ok(builder.finish(cldr.as_ref()))
}

pub fn command(args: ArgMatches<'_>) -> crate::error::Result<()> {
    let catalog = build(&args, true)?;
    let mut wtr = args.writer("emoji")?;
    wtr.emoji_groups(args.name(), &catalog.groups)?;
    wtr.emoji_subgroups(args.name(), &catalog.subgroups)?;
    wtr.emoji_catalog(args.name(), &catalog.emojis)?;
    Ok(())
}

pub fn command_groups(args: ArgMatches<'_>) -> crate::error::Result<()> {
    let catalog = build(&args, false)?;
    let mut wtr = args.writer("emoji_groups")?;
    wtr.emoji_groups(args.name(), &catalog.groups)?;
    wtr.emoji_subgroups(args.name(), &catalog.subgroups)?;
    Ok(())
}
