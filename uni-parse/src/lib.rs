/*!
A library for parsing the Unicode emoji test listing and the CLDR emoji
annotations.
*/

#![deny(missing_docs)]

pub use crate::common::{parse, Codepoint, UniFile, UniLineParser};
pub use crate::error::{Error, ErrorKind};

pub use crate::cldr_annotations::CldrAnnotations;
pub use crate::emoji_test::{EmojiSequence, EmojiStatus, EmojiTestLine};

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::parse(format!($($tt)*)))
    }
}

mod common;
mod error;

mod cldr_annotations;
