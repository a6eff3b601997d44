//! # `iptc_iim_types`
//!
//! The static dataset table for the IPTC Information Interchange Model (IIM),
//! version 4.2.
//!
//! IIM metadata is a flat list of datasets, each identified by a record
//! number and a dataset number. This crate knows what each of those pairs is
//! called, whether it's required, whether it may repeat, and how long its
//! payload may be. It doesn't parse anything - see `iptc_iim` for that.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

mod table;

pub use table::STANDARD_TAGS;

/// What kind of data a dataset is expected to hold.
///
/// This is only a hint. Real-world files often store whatever they like.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum IimDataType {
    /// Opaque bytes, usually a big-endian integer or a binary blob.
    Binary,

    /// ASCII digits only.
    Digits,

    /// Free text in the coded character set of the envelope.
    Text,

    /// A date, formatted as `CCYYMMDD`.
    Date,

    /// A time, formatted as `HHMMSS±HHMM`.
    Time,
}

/// Everything the IIM standard says about one dataset.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct StandardTagInfo {
    /// The record this dataset belongs to.
    pub record_number: u8,

    /// The dataset's number within its record.
    pub dataset_number: u8,

    /// A short, human-readable name, like `"Headline"`.
    pub name: &'static str,

    /// What the dataset holds.
    pub description: &'static str,

    /// Whether the dataset must appear when its record is present.
    pub mandatory: bool,

    /// Whether the dataset may appear more than once.
    pub repeatable: bool,

    /// Minimum payload length, in bytes.
    pub min_len: u32,

    /// Maximum payload length, in bytes.
    ///
    /// `None` means the standard places no upper bound.
    pub max_len: Option<u32>,

    /// The kind of data the standard expects in the payload.
    pub data_type: IimDataType,
}

/// Maps `(record, dataset)` pairs to their table entries.
static TAG_TABLE: LazyLock<FxHashMap<(u8, u8), &'static StandardTagInfo>> = LazyLock::new(|| {
    STANDARD_TAGS
        .iter()
        .map(|info| ((info.record_number, info.dataset_number), info))
        .collect()
});

/// Finds the table entry for a `(record, dataset)` pair.
///
/// ```
/// use iptc_iim_types::lookup;
///
/// let info = lookup(2, 105).unwrap();
/// assert_eq!(info.name, "Headline");
/// assert!(lookup(99, 99).is_err());
/// ```
///
/// # Errors
///
/// Returns [`TagNotStandard`] when the pair isn't defined by IIM 4.2.
pub fn lookup(
    record_number: u8,
    dataset_number: u8,
) -> Result<&'static StandardTagInfo, TagNotStandard> {
    TAG_TABLE
        .get(&(record_number, dataset_number))
        .copied()
        .ok_or(TagNotStandard {
            record_number,
            dataset_number,
        })
}

/// Lists every dataset the standard defines for one record.
pub fn tags_in_record(record_number: u8) -> impl Iterator<Item = &'static StandardTagInfo> {
    STANDARD_TAGS
        .iter()
        .filter(move |info| info.record_number == record_number)
}

/// The `(record, dataset)` pair isn't in the IIM 4.2 table.
///
/// This is an expected outcome. Plenty of writers use private datasets.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct TagNotStandard {
    pub record_number: u8,
    pub dataset_number: u8,
}

impl core::fmt::Display for TagNotStandard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Dataset `{}:{}` is not a standard IIM tag.",
            self.record_number, self.dataset_number
        )
    }
}

impl core::error::Error for TagNotStandard {}

#[cfg(test)]
mod tests {
    use super::{IimDataType, TagNotStandard, lookup, tags_in_record};

    #[test]
    fn lookup_hit() {
        let info = lookup(9, 10).expect("9:10 is a standard tag");
        assert_eq!(info.description, "Confirmed ObjectData Size");
        assert_eq!(info.data_type, IimDataType::Binary);
    }

    #[test]
    fn lookup_miss() {
        assert_eq!(
            lookup(99, 99),
            Err(TagNotStandard {
                record_number: 99,
                dataset_number: 99,
            })
        );
    }

    #[test]
    fn keywords_repeat() {
        let info = lookup(2, 25).unwrap();
        assert_eq!(info.name, "Keywords");
        assert!(info.repeatable);
        assert!(!info.mandatory);
        assert_eq!(info.max_len, Some(64));
    }

    #[test]
    fn table_has_no_duplicate_pairs() {
        let mut pairs: Vec<(u8, u8)> = super::STANDARD_TAGS
            .iter()
            .map(|t| (t.record_number, t.dataset_number))
            .collect();
        let len = pairs.len();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), len, "each pair should be listed once");
    }

    #[test]
    fn bounds_are_ordered() {
        for info in super::STANDARD_TAGS {
            if let Some(max) = info.max_len {
                assert!(
                    info.min_len <= max,
                    "bad bounds on {}:{}",
                    info.record_number,
                    info.dataset_number
                );
            }
        }
    }

    #[test]
    fn record_two_mandatory_is_record_version() {
        let mandatory: Vec<&str> = tags_in_record(2)
            .filter(|t| t.mandatory)
            .map(|t| t.name)
            .collect();
        assert_eq!(mandatory, ["Record Version"]);
    }
}
