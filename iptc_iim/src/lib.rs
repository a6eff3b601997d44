//! # `iptc_iim`
//!
//! A library to decode IPTC IIM (Information Interchange Model) metadata.
//!
//! IIM is the old binary form of IPTC metadata. You'll usually find it in a
//! JPEG's APP13 segment, wrapped in a Photoshop image resource. This crate
//! takes the IIM bytes themselves - digging them out of the file is left to
//! you.
//!
//! ## Usage
//!
//! ```
//! use iptc_iim::{ParsedTags, StreamTagKey};
//!
//! // `2:105` (Headline), holding "Cats"
//! let raw: &[u8] = &[0x1C, 2, 105, 0x00, 0x04, b'C', b'a', b't', b's'];
//!
//! let tags = ParsedTags::new(raw).unwrap();
//! assert_eq!(
//!     tags.get(&StreamTagKey::new(2, 105)).unwrap()[0].as_bytes(),
//!     b"Cats"
//! );
//! assert_eq!(tags.simple_dictionary()["Headline"], "Cats");
//! ```
//!
//! ## Parsing
//!
//! [`ParsedTags`] holds every tag in the stream, grouped by its record and
//! dataset numbers. Repeated datasets (like `Keywords`) keep each occurrence
//! in the order they were found.
//!
//! Decoding is all-or-nothing. If any tag is malformed, you get an
//! [`IimDecodeError`] and no tags at all.
//!
//! ## Display
//!
//! Two dictionaries map names to strings:
//!
//! - [`ParsedTags::simple_dictionary`]: one value per dataset
//! - [`ParsedTags::full_dictionary`]: every value, binary shown as hex
//!
//! Names come from the IIM 4.2 table in `iptc_iim_types`.
//!
//! ## License
//!
//! This project is dual-licensed under either the Apache License 2.0 or the MIT License at your option.

#![forbid(unsafe_code)]

pub use iptc_iim_types::{IimDataType, StandardTagInfo, TagNotStandard, lookup};

pub use crate::{
    conformance::ConformanceIssue,
    error::{IimDecodeError, TagPart},
    parse::{ParsedTags, parse_stream},
    tag::{StreamTagKey, TAG_MARKER, Tag, TagData},
};

pub mod conformance;
pub mod dictionary;
pub mod error;
pub mod parse;
pub mod tag;
pub mod util;
