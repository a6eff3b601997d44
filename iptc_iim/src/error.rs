/// The part of a tag we were reading when the input ran out.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum TagPart {
    /// The fixed five-byte header: marker, record, dataset, and size.
    Header,

    /// The big-endian length field that follows an extended size header.
    ExtendedSize {
        /// How wide the header said the field would be.
        width: u8,
    },

    /// The payload itself.
    Payload {
        /// How many bytes the header promised.
        data_size: u32,
    },
}

/// An error that occurred while decoding an IIM stream.
///
/// Any of these means the whole stream is unusable. We never hand back a
/// partial list of tags.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum IimDecodeError {
    /// The input ended partway through a tag.
    UnexpectedEof {
        /// Which part of the tag was cut short.
        part: TagPart,

        /// How many bytes were left when we tried to read it.
        remaining_input_len: u64,
    },

    /// A tag didn't start with the `0x1C` marker byte.
    ///
    /// After this, there's no way to tell where the next tag begins.
    InvalidTagMarker {
        /// The byte found where the marker should've been.
        found: u8,
    },

    /// An extended size header asked for a length field that's empty or
    /// wider than four bytes.
    InvalidExtendedSizeWidth {
        /// The width given by the header's lower 15 bits.
        width: u16,
    },
}

impl core::fmt::Display for TagPart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TagPart::Header => f.write_str("tag header"),
            TagPart::ExtendedSize { width } => {
                write!(f, "extended size field (`{width}` bytes)")
            }
            TagPart::Payload { data_size } => write!(f, "payload (`{data_size}` bytes)"),
        }
    }
}

impl core::fmt::Display for IimDecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnexpectedEof {
                part,
                remaining_input_len,
            } => write!(
                f,
                "Ran out of data while reading the {part}. \
                remaining input len: `{remaining_input_len}` bytes"
            ),

            Self::InvalidTagMarker { found } => write!(
                f,
                "IIM tag marker was wrong. \
                expected: `0x1C`; \
                got: `{found:#04X}`"
            ),

            Self::InvalidExtendedSizeWidth { width } => write!(
                f,
                "Extended size header gave an unusable length field width. \
                expected: 1 to 4 bytes; \
                got: `{width}`"
            ),
        }
    }
}

impl core::error::Error for IimDecodeError {}
