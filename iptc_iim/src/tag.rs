//! Decoding of single IIM tags.
//!
//! Every tag is laid out like so:
//!
//! ```text
//! [0x1C][record][dataset][size: be u16][payload]
//! ```
//!
//! When the size's top bit is set, its lower 15 bits instead give the width
//! of a big-endian length field that sits between the header and payload.

use winnow::{
    Parser as _,
    binary::{be_u16, u8},
    error::EmptyError,
    token::take,
};

use crate::{
    error::{IimDecodeError, TagPart},
    util,
};

/// Every tag header starts with this byte.
pub const TAG_MARKER: u8 = 0x1C;

/// Set on the size field when an extended length field follows.
const EXTENDED_SIZE_FLAG: u16 = 0x8000;

/// The widest extended length field we can hold in a `u32`.
const MAX_EXTENDED_SIZE_WIDTH: u16 = 4;

/// Identifies a dataset within a stream.
///
/// The same key may show up more than once, e.g. for each of several
/// keywords.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct StreamTagKey {
    pub record_number: u8,
    pub dataset_number: u8,
}

impl StreamTagKey {
    pub const fn new(record_number: u8, dataset_number: u8) -> Self {
        Self {
            record_number,
            dataset_number,
        }
    }
}

impl core::fmt::Display for StreamTagKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.record_number, self.dataset_number)
    }
}

/// A decoded tag header.
///
/// The payload isn't included. Use [`Tag::payload`] to read it.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Tag {
    pub record_number: u8,
    pub dataset_number: u8,

    /// How many payload bytes follow the header.
    pub data_size: u32,

    /// How many bytes the header itself took up.
    ///
    /// This is `5` for standard headers, plus the length field's width for
    /// extended ones.
    pub header_len: u8,
}

impl Tag {
    /// Decodes the header at the front of `input`.
    ///
    /// On success, `input` is advanced past the header and now starts at the
    /// payload.
    ///
    /// # Errors
    ///
    /// Fails if the input ends early, the marker byte is wrong, or an extended
    /// size asks for an unusable length field.
    pub fn decode(input: &mut &[u8]) -> Result<Tag, IimDecodeError> {
        let start_len: usize = input.len();

        let eof = |part: TagPart, remaining: usize| {
            log::error!(
                "Ran out of data while reading IIM {part}. \
                remaining: `{remaining}` bytes"
            );
            IimDecodeError::UnexpectedEof {
                part,
                remaining_input_len: remaining as u64,
            }
        };

        // check the marker before anything else
        let marker: u8 = u8
            .parse_next(input)
            .map_err(|_: EmptyError| eof(TagPart::Header, start_len))?;
        if marker != TAG_MARKER {
            log::error!("IIM tag started with `{marker:#04X}` instead of the tag marker.");
            return Err(IimDecodeError::InvalidTagMarker { found: marker });
        }

        let (record_number, dataset_number, raw_size): (u8, u8, u16) = (u8, u8, be_u16)
            .parse_next(input)
            .map_err(|_: EmptyError| eof(TagPart::Header, start_len))?;

        let data_size: u32 = if raw_size & EXTENDED_SIZE_FLAG == 0 {
            u32::from(raw_size)
        } else {
            // the remaining bits say how wide the real length is
            let width: u16 = raw_size & !EXTENDED_SIZE_FLAG;
            if width == 0 || width > MAX_EXTENDED_SIZE_WIDTH {
                log::error!(
                    "IIM tag `{record_number}:{dataset_number}` had a bad \
                    extended size width: `{width}`"
                );
                return Err(IimDecodeError::InvalidExtendedSizeWidth { width });
            }

            let remaining: usize = input.len();
            let field: &[u8] = take(width as usize).parse_next(input).map_err(
                |_: EmptyError| {
                    eof(
                        TagPart::ExtendedSize {
                            width: width as u8,
                        },
                        remaining,
                    )
                },
            )?;

            field
                .iter()
                .fold(0_u32, |acc, byte| (acc << 8) | u32::from(*byte))
        };

        let tag = Tag {
            record_number,
            dataset_number,
            data_size,
            header_len: (start_len.saturating_sub(input.len())) as u8,
        };
        log::trace!("Decoded IIM header: {tag}");
        Ok(tag)
    }

    /// Reads this tag's payload from `input`.
    ///
    /// This assumes `input` starts right after the header - that is, it's
    /// the same slice you gave to [`Tag::decode`].
    pub fn payload(&self, input: &mut &[u8]) -> Result<TagData, IimDecodeError> {
        let remaining: usize = input.len();
        let data_size: u32 = self.data_size;

        take(data_size as usize)
            .parse_next(input)
            .map(|bytes: &[u8]| TagData::from(bytes))
            .map_err(|_: EmptyError| {
                log::error!(
                    "IIM tag `{}` wanted `{data_size}` payload bytes, \
                    but only `{remaining}` were left.",
                    self.key()
                );
                IimDecodeError::UnexpectedEof {
                    part: TagPart::Payload { data_size },
                    remaining_input_len: remaining as u64,
                }
            })
    }

    /// The key this tag is grouped under.
    pub const fn key(&self) -> StreamTagKey {
        StreamTagKey::new(self.record_number, self.dataset_number)
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Tag<DATASET=({}:{}) DATA-SIZE=({})>",
            self.record_number, self.dataset_number, self.data_size
        )
    }
}

/// The raw payload of one tag.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct TagData(Vec<u8>);

impl TagData {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every byte is displayable ASCII.
    pub fn is_printable(&self) -> bool {
        util::is_printable(&self.0)
    }

    /// Whether the payload should be shown as text.
    ///
    /// This is [`TagData::is_printable`], but CR and LF are allowed too.
    pub fn is_text(&self) -> bool {
        util::is_text(&self.0)
    }

    /// Returns the payload as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        if !self.is_text() {
            return None;
        }

        // ascii is always utf-8
        core::str::from_utf8(&self.0).ok()
    }
}

impl From<Vec<u8>> for TagData {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for TagData {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl AsRef<[u8]> for TagData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Display for TagData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(text),
            None => write!(f, "BINARY<({}) bytes>", self.0.len()),
        }
    }
}
