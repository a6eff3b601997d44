use std::collections::BTreeMap;

use iptc_iim::{
    ConformanceIssue, IimDecodeError, ParsedTags, StreamTagKey, Tag, TagPart, parse_stream,
};

const REFERENCE: &str = "assets/reference.iim";

const CAPTION: &str = "Actress Emma Thompson arrives for the British Independent Film \
    Awards at Old Billingsgate Market in central London, Sunday, Dec. 7, 2014. \
    (Photo by Joel Ryan/Invision/AP)";

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

fn reference() -> Vec<u8> {
    std::fs::read(REFERENCE).expect("reference stream should be readable")
}

/// The text datasets that render the same in both dictionaries.
fn shared_text() -> BTreeMap<String, String> {
    [
        ("By-line", "Joel Ryan"),
        ("By-line Title", "INV"),
        ("City", "London"),
        ("Country/Primary Location Name", "GBR"),
        ("Credit", "Joel Ryan/Invision/AP"),
        ("Date Created", "20141207"),
        ("Headline", "Emma Thompson"),
        ("Object Name", "Britain Independent Film Awards"),
        ("Original Transmission Reference", "LENT108"),
        ("Source", "Invision"),
        ("Special Instructions", "12071419889"),
        ("Supplemental Category", "ENT"),
        ("Time Created", "200406+0000"),
        ("Urgency", "5 "),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn first_header() {
    logger();

    let raw = reference();
    let tag = Tag::decode(&mut raw.as_slice()).unwrap();
    assert_eq!(
        tag,
        Tag {
            record_number: 2,
            dataset_number: 0,
            data_size: 2,
            header_len: 5,
        }
    );
}

#[test]
fn parses_every_dataset() {
    logger();

    let tags = parse_stream(&reference()).unwrap();
    assert_eq!(tags.len(), 16);

    let headline = &tags.get(&StreamTagKey::new(2, 105)).unwrap()[0];
    assert_eq!(headline.as_bytes(), b"Emma Thompson");
    assert!(headline.is_printable());

    let version = &tags.get(&StreamTagKey::new(2, 0)).unwrap()[0];
    assert_eq!(version.as_bytes(), &[0_u8, 1]);
    assert!(!version.is_printable());
}

#[test]
fn simple_dictionary() {
    logger();

    let tags = ParsedTags::new(reference()).unwrap();

    let mut expected = shared_text();
    expected.insert("Caption/Abstract".into(), CAPTION.into());
    expected.insert("Record Version".into(), "BINARY<(2) bytes>".into());

    assert_eq!(tags.simple_dictionary(), expected);
}

#[test]
fn full_dictionary() {
    logger();

    let tags = ParsedTags::new(reference()).unwrap();

    let mut expected = shared_text();
    expected.insert("Caption/Abstract".into(), format!("{CAPTION}\n"));
    expected.insert("Record Version".into(), "[BINARY] 00 01".into());

    assert_eq!(tags.full_dictionary(), expected);
}

#[test]
fn dictionaries_agree_on_printable_singletons() {
    logger();

    let tags = ParsedTags::new(reference()).unwrap();
    let simple = tags.simple_dictionary();
    let full = tags.full_dictionary();

    assert!(simple.keys().eq(full.keys()));

    for (key, values) in tags.iter() {
        if values.len() == 1 && values[0].is_printable() {
            let name = iptc_iim::dictionary::tag_name(key);
            assert_eq!(simple[name.as_ref()], full[name.as_ref()], "for `{key}`");
        }
    }
}

#[test]
fn conformance() {
    logger();

    let tags = ParsedTags::new(reference()).unwrap();
    assert_eq!(
        tags.conformance_issues(),
        vec![ConformanceIssue::TooLong {
            key: StreamTagKey::new(2, 10),
            len: 2,
            max: 1,
        }]
    );
}

#[test]
fn truncated_stream_fails() {
    logger();

    let raw = reference();

    // cut the last header short
    let last_header_start = raw.len() - (5 + CAPTION.len() + 1);
    assert_eq!(
        ParsedTags::new(&raw[..last_header_start + 3]),
        Err(IimDecodeError::UnexpectedEof {
            part: TagPart::Header,
            remaining_input_len: 3,
        })
    );

    // and the caption's last byte
    assert!(matches!(
        ParsedTags::new(&raw[..raw.len() - 1]),
        Err(IimDecodeError::UnexpectedEof {
            part: TagPart::Payload { .. },
            ..
        })
    ));
}

#[test]
fn corrupted_marker_fails() {
    logger();

    let mut raw = reference();
    raw[0] = 0x1B;
    assert_eq!(
        ParsedTags::new(raw),
        Err(IimDecodeError::InvalidTagMarker { found: 0x1B })
    );
}
