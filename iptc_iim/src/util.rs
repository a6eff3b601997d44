//! Helpers for deciding how to show a payload.

/// Checks that every byte is displayable ASCII (`0x20..=0x7E`).
///
/// An empty slice counts as printable.
///
/// ```
/// use iptc_iim::util::is_printable;
///
/// assert!(is_printable(b"abc"));
/// assert!(!is_printable(&[b'a', b'b', 3]));
/// ```
pub fn is_printable(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| (0x20..=0x7E).contains(b))
}

/// Like [`is_printable`], but also lets CR and LF through.
///
/// Captions are often multi-line, and we'd like those to stay text.
pub(crate) fn is_text(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|b| (0x20..=0x7E).contains(b) || matches!(b, b'\r' | b'\n'))
}

/// Renders each byte as two uppercase hex digits, separated by spaces.
///
/// ```
/// use iptc_iim::util::dump_bytes_to_string;
///
/// assert_eq!(dump_bytes_to_string(&[0x01, 0x02, 0xAB]), "01 02 AB");
/// assert_eq!(dump_bytes_to_string(&[]), "");
/// ```
pub fn dump_bytes_to_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Helper function to initialize the logger for testing.
#[cfg(test)]
pub(crate) fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::{dump_bytes_to_string, is_printable, is_text};

    #[test]
    fn printable() {
        assert!(is_printable(b"abc"));
        assert!(is_printable(b""));
        assert!(is_printable(b" ~"));
    }

    #[test]
    fn not_printable() {
        assert!(!is_printable(&[0x61, 0x62, 0x03]));
        assert!(!is_printable(b"line\n"));
        assert!(!is_printable(&[0x7F]));
    }

    #[test]
    fn text_allows_line_endings() {
        assert!(is_text(b"first\r\nsecond\n"));
        assert!(!is_text(&[0x61, 0x00]));
    }

    #[test]
    fn dump() {
        assert_eq!(dump_bytes_to_string(&[1, 2, 3]), "01 02 03");
        assert_eq!(dump_bytes_to_string(&[0x00, 0xFF]), "00 FF");
        assert_eq!(dump_bytes_to_string(&[]), "");
    }
}
