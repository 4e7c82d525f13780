use uni_parse::CldrAnnotations;

use super::catalog::Emoji;
use super::render::render;

/// Return the string under which CLDR annotates the given base codepoints.
///
/// CLDR keys omit presentation selectors.
pub fn cldr_key(codepoints: &[u32]) -> String {
    render(codepoints).replace(|c: char| c == '\u{FE0F}' || c == '\u{FE0E}', "")
}

/// Attach CLDR short names to each of the given entries.
///
/// Entries without an annotation get an empty list. Returns the number of
/// such entries.
pub fn annotate(emojis: &mut [Emoji], cldr: &CldrAnnotations) -> usize {
    let mut missing = 0;
    for emoji in emojis.iter_mut() {
        match cldr.get(&cldr_key(&emoji.codepoints)) {
            Some(names) => emoji.cldr = names.to_vec(),
            None => {
                log::debug!("no CLDR annotation for '{}'", emoji.name);
                emoji.cldr = vec![];
                missing += 1;
            }
        }
    }
    missing
}
