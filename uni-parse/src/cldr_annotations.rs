use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// The short names ("annotations") CLDR assigns to emoji in one locale.
///
/// This is parsed from a CLDR `common/annotations/<locale>.xml` file, which
/// looks like this:
///
/// ```text
/// <annotation cp="🧑‍⚕">doctor | health worker | healthcare | nurse</annotation>
/// <annotation cp="🧑‍⚕" type="tts">health worker</annotation>
/// ```
///
/// Each entry maps the exact emoji string in the `cp` attribute to its names,
/// in the order given. Text-to-speech (`type="tts"`) entries are excluded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CldrAnnotations {
    map: BTreeMap<String, Vec<String>>,
}

impl CldrAnnotations {
    /// The file path corresponding to the English annotations, relative to
    /// the data directory.
    pub fn relative_file_path() -> &'static Path {
        Path::new("annotations/en.xml")
    }

    /// The full file path of the annotations given the data directory path.
    pub fn file_path<P: AsRef<Path>>(dir: P) -> PathBuf {
        let dir = dir.as_ref();
        let std = dir.join(Self::relative_file_path());
        if std.exists() {
            std
        } else {
            let legacy = dir.join("en.xml");
            if legacy.exists() {
                legacy
            } else {
                std
            }
        }
    }

    /// Parse the English annotations from the given data directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<CldrAnnotations, Error> {
        CldrAnnotations::from_path(CldrAnnotations::file_path(dir))
    }

    /// Parse the annotations in the CLDR XML file at the given path.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<CldrAnnotations, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error {
            kind: ErrorKind::Io(e),
            line: None,
            path: Some(path.to_path_buf()),
        })?;
        text.parse().map_err(|err: Error| err.with_path(path))
    }

    /// Return the names for the given emoji string, if any.
    ///
    /// The lookup is exact. In particular, CLDR omits emoji presentation
    /// selectors (`U+FE0F`) from its keys.
    pub fn get(&self, emoji: &str) -> Option<&[String]> {
        self.map.get(emoji).map(|names| names.as_slice())
    }

    /// Add names for the given emoji string, replacing any that exist.
    pub fn insert(&mut self, emoji: String, names: Vec<String>) {
        self.map.insert(emoji, names);
    }

    /// Return the number of annotated emoji strings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if and only if there are no annotations.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over all annotations in lexicographic order of their keys.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.map.iter()
    }
}

impl FromStr for CldrAnnotations {
    type Err = Error;

    fn from_str(xml: &str) -> Result<CldrAnnotations, Error> {
        let opts = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(xml, opts)
            .map_err(|err| Error::xml(err.to_string()))?;

        let mut annotations = CldrAnnotations::default();
        for node in doc.descendants().filter(|n| n.has_tag_name("annotation"))
        {
            if node.attribute("type") == Some("tts") {
                continue;
            }
            let cp = match node.attribute("cp") {
                Some(cp) => cp,
                None => {
                    let pos = doc.text_pos_at(node.range().start);
                    return Err(Error::parse(
                        "annotation without a 'cp' attribute".to_string(),
                    )
                    .with_line(pos.row as u64));
                }
            };
            let names = node
                .text()
                .unwrap_or("")
                .split('|')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            annotations.insert(cp.to_string(), names);
        }
        Ok(annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::CldrAnnotations;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
	<identity>
		<version number="$Revision$"/>
		<language type="en"/>
	</identity>
	<annotations>
		<annotation cp="👍">+1 | hand | thumb | thumbs up | up</annotation>
		<annotation cp="👍" type="tts">thumbs up</annotation>
		<annotation cp="🧑‍⚕">doctor | health worker | healthcare | nurse | therapist</annotation>
		<annotation cp="🧑‍⚕" type="tts">health worker</annotation>
		<annotation cp="&amp;">ampersand | and</annotation>
	</annotations>
</ldml>
"#;

    #[test]
    fn parse_annotations() {
        let cldr: CldrAnnotations = SAMPLE.parse().unwrap();
        assert_eq!(cldr.len(), 3);
        assert_eq!(
            cldr.get("👍").unwrap(),
            &["+1", "hand", "thumb", "thumbs up", "up"][..]
        );
        assert_eq!(
            cldr.get("\u{1F9D1}\u{200D}\u{2695}").unwrap()[1],
            "health worker"
        );
        assert_eq!(cldr.get("&").unwrap(), &["ampersand", "and"][..]);
        assert!(cldr.get("\u{1F9D1}\u{200D}\u{2695}\u{FE0F}").is_none());
    }

    #[test]
    fn tts_only_is_absent() {
        let xml = r#"<ldml><annotations>
            <annotation cp="🫠" type="tts">melting face</annotation>
        </annotations></ldml>"#;
        let cldr: CldrAnnotations = xml.parse().unwrap();
        assert!(cldr.is_empty());
    }

    #[test]
    fn malformed() {
        assert!("<ldml><annotations>".parse::<CldrAnnotations>().is_err());

        let xml = "<ldml>\n<annotations>\n<annotation>x</annotation>\n</annotations></ldml>";
        let err = xml.parse::<CldrAnnotations>().unwrap_err();
        assert_eq!(err.line(), Some(3));
    }
}
