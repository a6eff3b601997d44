//! Checks parsed tags against the rules in the IIM dataset table.
//!
//! Plenty of real files break these rules (some writers pad `Urgency` with a
//! space), so nothing here is an error. You get a list of issues and decide
//! what to do with them.

use std::collections::BTreeSet;

use iptc_iim_types::{StandardTagInfo, lookup, tags_in_record};

use crate::{parse::ParsedTags, tag::StreamTagKey};

/// One way a stream deviates from the standard.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum ConformanceIssue {
    /// A dataset that may appear once appeared more than once.
    NotRepeatable {
        key: StreamTagKey,
        occurrences: usize,
    },

    /// A payload was shorter than the standard allows.
    TooShort {
        key: StreamTagKey,
        len: usize,
        min: u32,
    },

    /// A payload was longer than the standard allows.
    TooLong {
        key: StreamTagKey,
        len: usize,
        max: u32,
    },

    /// A record is present, but one of its mandatory datasets isn't.
    MissingMandatory { key: StreamTagKey },
}

impl core::fmt::Display for ConformanceIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotRepeatable { key, occurrences } => write!(
                f,
                "Dataset `{key}` isn't repeatable, but appeared `{occurrences}` times."
            ),
            Self::TooShort { key, len, min } => write!(
                f,
                "Dataset `{key}` is too short. minimum: `{min}` bytes; got: `{len}` bytes"
            ),
            Self::TooLong { key, len, max } => write!(
                f,
                "Dataset `{key}` is too long. maximum: `{max}` bytes; got: `{len}` bytes"
            ),
            Self::MissingMandatory { key } => {
                write!(f, "Mandatory dataset `{key}` is missing from its record.")
            }
        }
    }
}

impl ParsedTags {
    /// Lists every way these tags break the standard's rules.
    ///
    /// Datasets the standard doesn't define aren't checked.
    pub fn conformance_issues(&self) -> Vec<ConformanceIssue> {
        let mut issues: Vec<ConformanceIssue> = Vec::new();

        for (key, values) in self.iter() {
            let Ok(info) = lookup(key.record_number, key.dataset_number) else {
                continue;
            };

            if !info.repeatable && values.len() > 1 {
                issues.push(ConformanceIssue::NotRepeatable {
                    key: *key,
                    occurrences: values.len(),
                });
            }

            for value in values {
                issues.extend(check_len(info, *key, value.len()));
            }
        }

        // each record that shows up needs its mandatory datasets
        let records: BTreeSet<u8> = self.keys().map(|k| k.record_number).collect();
        for record in records {
            issues.extend(
                tags_in_record(record)
                    .filter(|info| info.mandatory)
                    .map(|info| StreamTagKey::new(info.record_number, info.dataset_number))
                    .filter(|key| self.get(key).is_none())
                    .map(|key| ConformanceIssue::MissingMandatory { key }),
            );
        }

        for issue in &issues {
            log::warn!("IIM conformance issue: {issue}");
        }

        issues
    }
}

fn check_len(info: &StandardTagInfo, key: StreamTagKey, len: usize) -> Option<ConformanceIssue> {
    if len < info.min_len as usize {
        return Some(ConformanceIssue::TooShort {
            key,
            len,
            min: info.min_len,
        });
    }

    match info.max_len {
        Some(max) if len > max as usize => Some(ConformanceIssue::TooLong { key, len, max }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::ConformanceIssue;
    use crate::{
        parse::ParsedTags,
        tag::{StreamTagKey, tests::encode_tag},
        util::logger,
    };

    #[test]
    fn clean_stream() {
        logger();

        let mut raw = encode_tag(2, 0, &[0, 4], None);
        raw.extend(encode_tag(2, 25, b"cat", None));
        raw.extend(encode_tag(2, 25, b"calico", None));
        raw.extend(encode_tag(2, 55, b"20141207", None));

        assert!(ParsedTags::new(raw).unwrap().conformance_issues().is_empty());
    }

    #[test]
    fn every_kind_of_issue() {
        logger();

        let mut raw = encode_tag(2, 105, b"One", None);
        raw.extend(encode_tag(2, 105, b"Two", None));
        raw.extend(encode_tag(2, 55, b"2014", None));
        raw.extend(encode_tag(2, 10, b"5 ", None));

        assert_eq!(
            ParsedTags::new(raw).unwrap().conformance_issues(),
            vec![
                ConformanceIssue::TooLong {
                    key: StreamTagKey::new(2, 10),
                    len: 2,
                    max: 1,
                },
                ConformanceIssue::TooShort {
                    key: StreamTagKey::new(2, 55),
                    len: 4,
                    min: 8,
                },
                ConformanceIssue::NotRepeatable {
                    key: StreamTagKey::new(2, 105),
                    occurrences: 2,
                },
                ConformanceIssue::MissingMandatory {
                    key: StreamTagKey::new(2, 0),
                },
            ]
        );
    }

    #[test]
    fn unknown_datasets_are_skipped() {
        logger();

        let raw = encode_tag(240, 1, &[1, 2, 3], None);
        assert!(ParsedTags::new(raw).unwrap().conformance_issues().is_empty());
    }
}
