use std::collections::BTreeMap;

use crate::{
    error::IimDecodeError,
    tag::{StreamTagKey, Tag, TagData},
};

/// Every tag found in an IIM stream, grouped by dataset.
///
/// Repeated datasets keep all of their occurrences, in stream order.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ParsedTags {
    tags: BTreeMap<StreamTagKey, Vec<TagData>>,
}

impl ParsedTags {
    /// Parses an IIM stream.
    ///
    /// The input should hold only IIM data. Finding it inside a JPEG or
    /// TIFF file is up to the caller.
    pub fn new<B: AsRef<[u8]>>(raw: B) -> Result<Self, IimDecodeError> {
        parse_stream(raw.as_ref())
    }

    /// Grabs all occurrences of a dataset.
    pub fn get(&self, key: &StreamTagKey) -> Option<&[TagData]> {
        self.tags.get(key).map(Vec::as_slice)
    }

    /// How many distinct datasets were found.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &StreamTagKey> {
        self.tags.keys()
    }

    /// Iterates over each dataset and its occurrences, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&StreamTagKey, &[TagData])> {
        self.tags.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl<'a> IntoIterator for &'a ParsedTags {
    type Item = (&'a StreamTagKey, &'a Vec<TagData>);
    type IntoIter = std::collections::btree_map::Iter<'a, StreamTagKey, Vec<TagData>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Parses every tag in `input`.
///
/// Stops when the input runs out exactly between two tags. Running out
/// anywhere else is an error.
///
/// # Errors
///
/// The first bad tag fails the whole stream. No partial result is kept.
pub fn parse_stream(input: &[u8]) -> Result<ParsedTags, IimDecodeError> {
    let input: &mut &[u8] = &mut &*input;
    let mut tags: BTreeMap<StreamTagKey, Vec<TagData>> = BTreeMap::new();
    let mut count: usize = 0;

    while !input.is_empty() {
        let tag: Tag = Tag::decode(input)
            .inspect_err(|e| log::error!("Failed to parse IIM stream! err: {e}"))?;
        let data: TagData = tag
            .payload(input)
            .inspect_err(|e| log::error!("Failed to parse IIM stream! err: {e}"))?;

        tags.entry(tag.key()).or_default().push(data);
        count += 1;
    }

    log::trace!(
        "Completed IIM parsing! found `{count}` tags across `{}` datasets.",
        tags.len()
    );
    Ok(ParsedTags { tags })
}
