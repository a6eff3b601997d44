//! Turns parsed tags into `name -> value` maps for display.
//!
//! There are two flavors:
//!
//! - [`ParsedTags::simple_dictionary`] keeps one value per dataset (the
//!   last), trims trailing line endings off text, and summarizes binary data
//!   by its length.
//! - [`ParsedTags::full_dictionary`] keeps every occurrence, concatenated in
//!   stream order, and dumps binary data as hex.
//!
//! Both use the same keys: the standard name when the dataset is known, or a
//! name built from its numbers when it isn't.

use std::{borrow::Cow, collections::BTreeMap};

use iptc_iim_types::{TagNotStandard, lookup};

use crate::{
    parse::ParsedTags,
    tag::{StreamTagKey, TagData},
    util::dump_bytes_to_string,
};

impl ParsedTags {
    /// Builds a dictionary with a single value per dataset.
    ///
    /// When a dataset repeats, the last occurrence wins.
    pub fn simple_dictionary(&self) -> BTreeMap<String, String> {
        self.iter()
            .filter_map(|(key, values)| {
                let last: &TagData = values.last()?;
                Some((tag_name(key).into_owned(), render_simple(last)))
            })
            .collect()
    }

    /// Builds a dictionary keeping every occurrence of every dataset.
    pub fn full_dictionary(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(key, values)| {
                let rendered: String = values.iter().map(render_full).collect();
                (tag_name(key).into_owned(), rendered)
            })
            .collect()
    }
}

/// Finds a display name for a dataset.
///
/// ```
/// use iptc_iim::{StreamTagKey, dictionary::tag_name};
///
/// assert_eq!(tag_name(&StreamTagKey::new(2, 120)), "Caption/Abstract");
/// assert_eq!(tag_name(&StreamTagKey::new(3, 7)), "3:7 (not a standard tag)");
/// ```
pub fn tag_name(key: &StreamTagKey) -> Cow<'static, str> {
    match lookup(key.record_number, key.dataset_number) {
        Ok(info) => Cow::Borrowed(info.name),
        Err(TagNotStandard { .. }) => {
            log::trace!("Dataset `{key}` isn't standard. Making up a name for it...");
            Cow::Owned(format!("{key} (not a standard tag)"))
        }
    }
}

/// Text loses its trailing line endings. Everything else is a byte count.
fn render_simple(data: &TagData) -> String {
    match data.as_text() {
        Some(text) => text.trim_end_matches(['\r', '\n']).to_string(),
        None => data.to_string(),
    }
}

/// Text is kept as-is. Everything else becomes a hex dump.
fn render_full(data: &TagData) -> String {
    match data.as_text() {
        Some(text) => text.to_string(),
        None => format!("[BINARY] {}", dump_bytes_to_string(data.as_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::{parse::ParsedTags, tag::tests::encode_tag, util::logger};

    fn keywords_stream() -> ParsedTags {
        let mut raw = encode_tag(2, 0, &[0, 4], None);
        raw.extend(encode_tag(2, 25, b"cat", None));
        raw.extend(encode_tag(2, 25, b"calico", None));
        raw.extend(encode_tag(2, 120, b"A cat.\r\nAsleep.\n", None));
        raw.extend(encode_tag(3, 7, &[0xFF], None));
        ParsedTags::new(raw).unwrap()
    }

    #[test]
    fn simple() {
        logger();

        assert_eq!(
            keywords_stream().simple_dictionary(),
            BTreeMap::<String, String>::from([
                ("Record Version".into(), "BINARY<(2) bytes>".into()),
                ("Keywords".into(), "calico".into()),
                ("Caption/Abstract".into(), "A cat.\r\nAsleep.".into()),
                ("3:7 (not a standard tag)".into(), "BINARY<(1) bytes>".into()),
            ])
        );
    }

    #[test]
    fn full() {
        logger();

        assert_eq!(
            keywords_stream().full_dictionary(),
            BTreeMap::<String, String>::from([
                ("Record Version".into(), "[BINARY] 00 04".into()),
                ("Keywords".into(), "catcalico".into()),
                ("Caption/Abstract".into(), "A cat.\r\nAsleep.\n".into()),
                ("3:7 (not a standard tag)".into(), "[BINARY] FF".into()),
            ])
        );
    }

    #[test]
    fn same_keys() {
        logger();

        let parsed = keywords_stream();
        let simple = parsed.simple_dictionary();
        let full = parsed.full_dictionary();
        assert!(simple.keys().eq(full.keys()));
    }

    #[test]
    fn empty_text_payload() {
        logger();

        let parsed = ParsedTags::new(encode_tag(2, 5, b"", None)).unwrap();
        assert_eq!(parsed.simple_dictionary()["Object Name"], "");
        assert_eq!(parsed.full_dictionary()["Object Name"], "");
    }
}
