use std::char;

use super::{
    is_regional_indicator, is_skin_tone, EMOJI_PRESENTATION, KEYCAP,
    TAG_LATIN_SMALL_G, TEXT_PRESENTATION, ZWJ,
};

/// Render a sequence of base codepoints as the string a user would type.
///
/// Joiners are inserted between codepoints, except before either
/// presentation selector, a skin tone modifier or a keycap, and next to a
/// codepoint that is already a joiner. Flags (regional indicator pairs and tag sequences)
/// never contain joiners.
///
/// Codepoints that are not Unicode scalar values are rendered as U+FFFD.
pub fn render(codepoints: &[u32]) -> String {
    let mut out = String::with_capacity(codepoints.len() * 8);
    let is_flag = match codepoints {
        [] => return out,
        [first, ..] if is_regional_indicator(*first) => true,
        [_, TAG_LATIN_SMALL_G, ..] => true,
        _ => false,
    };
    if is_flag {
        out.extend(codepoints.iter().map(|&cp| to_char(cp)));
        return out;
    }
    for pair in codepoints.windows(2) {
        let (cp, next) = (pair[0], pair[1]);
        out.push(to_char(cp));
        if !joins_without_zwj(cp, next) {
            out.push('\u{200D}');
        }
    }
    if let Some(&last) = codepoints.last() {
        out.push(to_char(last));
    }
    out
}

fn joins_without_zwj(cp: u32, next: u32) -> bool {
    cp == ZWJ
        || next == ZWJ
        || next == EMOJI_PRESENTATION
        || next == TEXT_PRESENTATION
        || next == KEYCAP
        || is_skin_tone(next)
}

fn to_char(cp: u32) -> char {
    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
}
