//! The IIM 4.2 dataset table.
//!
//! ## Adding new datasets
//!
//! Add a listing to the `standard_tags!` call below, keeping record/dataset
//! order. An unbounded maximum length is written as `_`:
//!
//! ```text
//! (2, 250) => {
//!     name: "Your New Dataset",
//!     description: "What it holds",
//!     mandatory: false, repeatable: true,
//!     len: 0..=_, ty: Text,
//! },
//! ```

use crate::{IimDataType, StandardTagInfo};

macro_rules! max_len {
    (_) => {
        None
    };
    ($max:literal) => {
        Some($max)
    };
}

/// Creates the `STANDARD_TAGS` slice from all its listings.
macro_rules! standard_tags {
    ($( ($record:literal, $dataset:literal) => {
        name: $name:literal,
        description: $description:literal,
        mandatory: $mandatory:literal, repeatable: $repeatable:literal,
        len: $min:literal..=$max:tt, ty: $ty:ident,
    }, )+) => {
        /// Every dataset defined by IIM 4.2, in record/dataset order.
        pub static STANDARD_TAGS: &[StandardTagInfo] = &[
            $(
                StandardTagInfo {
                    record_number: $record,
                    dataset_number: $dataset,
                    name: $name,
                    description: $description,
                    mandatory: $mandatory,
                    repeatable: $repeatable,
                    min_len: $min,
                    max_len: max_len!($max),
                    data_type: IimDataType::$ty,
                },
            )+
        ];
    };
}

standard_tags! {
    /*
     *
     *  Record 1: Envelope
     *
     */
    (1, 0) => {
        name: "Model Version",
        description: "Version of the envelope record",
        mandatory: true, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    (1, 5) => {
        name: "Destination",
        description: "Routing information for the provider",
        mandatory: false, repeatable: true,
        len: 0..=1024, ty: Text,
    },
    (1, 20) => {
        name: "File Format",
        description: "File format of the object data",
        mandatory: true, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    (1, 22) => {
        name: "File Format Version",
        description: "Version of the object data's file format",
        mandatory: true, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    (1, 30) => {
        name: "Service Identifier",
        description: "Identifies the provider and product",
        mandatory: true, repeatable: false,
        len: 0..=10, ty: Text,
    },
    (1, 40) => {
        name: "Envelope Number",
        description: "Number unique for the date and service",
        mandatory: true, repeatable: false,
        len: 8..=8, ty: Digits,
    },
    (1, 50) => {
        name: "Product I.D.",
        description: "Subset of the service, used for routing",
        mandatory: false, repeatable: true,
        len: 0..=32, ty: Text,
    },
    (1, 60) => {
        name: "Envelope Priority",
        description: "Envelope handling priority",
        mandatory: false, repeatable: false,
        len: 1..=1, ty: Digits,
    },
    (1, 70) => {
        name: "Date Sent",
        description: "Date the service sent the material",
        mandatory: true, repeatable: false,
        len: 8..=8, ty: Date,
    },
    (1, 80) => {
        name: "Time Sent",
        description: "Time the service sent the material",
        mandatory: false, repeatable: false,
        len: 11..=11, ty: Time,
    },
    (1, 90) => {
        name: "Coded Character Set",
        description: "ISO 2022 escape sequences for the character set",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Binary,
    },
    (1, 100) => {
        name: "UNO",
        description: "Unique Name of Object",
        mandatory: false, repeatable: false,
        len: 14..=80, ty: Text,
    },
    (1, 120) => {
        name: "ARM Identifier",
        description: "Abstract Relationship Method identifier",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    (1, 122) => {
        name: "ARM Version",
        description: "Abstract Relationship Method version",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    /*
     *
     *  Record 2: Application
     *
     */
    (2, 0) => {
        name: "Record Version",
        description: "Version of the application record",
        mandatory: true, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    (2, 3) => {
        name: "Object Type Reference",
        description: "Object type number and name",
        mandatory: false, repeatable: false,
        len: 3..=67, ty: Text,
    },
    (2, 4) => {
        name: "Object Attribute Reference",
        description: "Object attribute number and name",
        mandatory: false, repeatable: true,
        len: 4..=68, ty: Text,
    },
    (2, 5) => {
        name: "Object Name",
        description: "Shorthand reference for the object",
        mandatory: false, repeatable: false,
        len: 0..=64, ty: Text,
    },
    (2, 7) => {
        name: "Edit Status",
        description: "Status of the object data per the provider",
        mandatory: false, repeatable: false,
        len: 0..=64, ty: Text,
    },
    (2, 8) => {
        name: "Editorial Update",
        description: "Type of update this object provides",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Digits,
    },
    (2, 10) => {
        name: "Urgency",
        description: "Editorial urgency of the content",
        mandatory: false, repeatable: false,
        len: 1..=1, ty: Digits,
    },
    (2, 12) => {
        name: "Subject Reference",
        description: "Structured subject definition",
        mandatory: false, repeatable: true,
        len: 13..=236, ty: Text,
    },
    (2, 15) => {
        name: "Category",
        description: "Subject of the object data per the provider",
        mandatory: false, repeatable: false,
        len: 0..=3, ty: Text,
    },
    (2, 20) => {
        name: "Supplemental Category",
        description: "Further refinement of the category",
        mandatory: false, repeatable: true,
        len: 0..=32, ty: Text,
    },
    (2, 22) => {
        name: "Fixture Identifier",
        description: "Identifies frequently occurring object data",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 25) => {
        name: "Keywords",
        description: "Keyword for retrieval",
        mandatory: false, repeatable: true,
        len: 0..=64, ty: Text,
    },
    (2, 26) => {
        name: "Content Location Code",
        description: "ISO 3166 code of a location shown in the content",
        mandatory: false, repeatable: true,
        len: 3..=3, ty: Text,
    },
    (2, 27) => {
        name: "Content Location Name",
        description: "Name of a location shown in the content",
        mandatory: false, repeatable: true,
        len: 0..=64, ty: Text,
    },
    (2, 30) => {
        name: "Release Date",
        description: "Earliest date the provider allows use",
        mandatory: false, repeatable: false,
        len: 8..=8, ty: Date,
    },
    (2, 35) => {
        name: "Release Time",
        description: "Earliest time the provider allows use",
        mandatory: false, repeatable: false,
        len: 11..=11, ty: Time,
    },
    (2, 37) => {
        name: "Expiration Date",
        description: "Latest date the provider allows use",
        mandatory: false, repeatable: false,
        len: 8..=8, ty: Date,
    },
    (2, 38) => {
        name: "Expiration Time",
        description: "Latest time the provider allows use",
        mandatory: false, repeatable: false,
        len: 11..=11, ty: Time,
    },
    (2, 40) => {
        name: "Special Instructions",
        description: "Other editorial instructions about use",
        mandatory: false, repeatable: false,
        len: 0..=256, ty: Text,
    },
    (2, 42) => {
        name: "Action Advised",
        description: "Action the provider advises for previous data",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Digits,
    },
    (2, 45) => {
        name: "Reference Service",
        description: "Service identifier of a prior envelope",
        mandatory: false, repeatable: true,
        len: 0..=10, ty: Text,
    },
    (2, 47) => {
        name: "Reference Date",
        description: "Date sent of a prior envelope",
        mandatory: false, repeatable: true,
        len: 8..=8, ty: Date,
    },
    (2, 50) => {
        name: "Reference Number",
        description: "Envelope number of a prior envelope",
        mandatory: false, repeatable: true,
        len: 8..=8, ty: Digits,
    },
    (2, 55) => {
        name: "Date Created",
        description: "Date the intellectual content was created",
        mandatory: false, repeatable: false,
        len: 8..=8, ty: Date,
    },
    (2, 60) => {
        name: "Time Created",
        description: "Time the intellectual content was created",
        mandatory: false, repeatable: false,
        len: 11..=11, ty: Time,
    },
    (2, 62) => {
        name: "Digital Creation Date",
        description: "Date the digital representation was created",
        mandatory: false, repeatable: false,
        len: 8..=8, ty: Date,
    },
    (2, 63) => {
        name: "Digital Creation Time",
        description: "Time the digital representation was created",
        mandatory: false, repeatable: false,
        len: 11..=11, ty: Time,
    },
    (2, 65) => {
        name: "Originating Program",
        description: "Program used to create the object data",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 70) => {
        name: "Program Version",
        description: "Version of the originating program",
        mandatory: false, repeatable: false,
        len: 0..=10, ty: Text,
    },
    (2, 75) => {
        name: "Object Cycle",
        description: "Morning, evening, or both",
        mandatory: false, repeatable: false,
        len: 1..=1, ty: Text,
    },
    (2, 80) => {
        name: "By-line",
        description: "Name of the creator",
        mandatory: false, repeatable: true,
        len: 0..=32, ty: Text,
    },
    (2, 85) => {
        name: "By-line Title",
        description: "Title of the creator",
        mandatory: false, repeatable: true,
        len: 0..=32, ty: Text,
    },
    (2, 90) => {
        name: "City",
        description: "City of origin",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 92) => {
        name: "Sub-location",
        description: "Location within the city of origin",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 95) => {
        name: "Province/State",
        description: "Province or state of origin",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 100) => {
        name: "Country/Primary Location Code",
        description: "ISO 3166 code of the country of origin",
        mandatory: false, repeatable: false,
        len: 3..=3, ty: Text,
    },
    (2, 101) => {
        name: "Country/Primary Location Name",
        description: "Name of the country of origin",
        mandatory: false, repeatable: false,
        len: 0..=64, ty: Text,
    },
    (2, 103) => {
        name: "Original Transmission Reference",
        description: "Location of the original transmission",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 105) => {
        name: "Headline",
        description: "Publishable synopsis of the contents",
        mandatory: false, repeatable: false,
        len: 0..=256, ty: Text,
    },
    (2, 110) => {
        name: "Credit",
        description: "Provider of the object data",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 115) => {
        name: "Source",
        description: "Original owner of the intellectual content",
        mandatory: false, repeatable: false,
        len: 0..=32, ty: Text,
    },
    (2, 116) => {
        name: "Copyright Notice",
        description: "Copyright notice",
        mandatory: false, repeatable: false,
        len: 0..=128, ty: Text,
    },
    (2, 118) => {
        name: "Contact",
        description: "Person or organisation to contact for more information",
        mandatory: false, repeatable: true,
        len: 0..=128, ty: Text,
    },
    (2, 120) => {
        name: "Caption/Abstract",
        description: "Textual description of the object data",
        mandatory: false, repeatable: false,
        len: 0..=2000, ty: Text,
    },
    (2, 122) => {
        name: "Writer/Editor",
        description: "Writer or editor of the caption",
        mandatory: false, repeatable: true,
        len: 0..=32, ty: Text,
    },
    (2, 125) => {
        name: "Rasterized Caption",
        description: "Rasterized image of the caption",
        mandatory: false, repeatable: false,
        len: 7360..=7360, ty: Binary,
    },
    (2, 130) => {
        name: "Image Type",
        description: "Colour components and their interpretation",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Text,
    },
    (2, 131) => {
        name: "Image Orientation",
        description: "Layout of the image area",
        mandatory: false, repeatable: false,
        len: 1..=1, ty: Text,
    },
    (2, 135) => {
        name: "Language Identifier",
        description: "ISO 639 code of the content's language",
        mandatory: false, repeatable: false,
        len: 2..=3, ty: Text,
    },
    (2, 150) => {
        name: "Audio Type",
        description: "Number of channels and type of audio content",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Text,
    },
    (2, 151) => {
        name: "Audio Sampling Rate",
        description: "Sampling rate in hertz",
        mandatory: false, repeatable: false,
        len: 6..=6, ty: Digits,
    },
    (2, 152) => {
        name: "Audio Sampling Resolution",
        description: "Bits per sample",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Digits,
    },
    (2, 153) => {
        name: "Audio Duration",
        description: "Running time as HHMMSS",
        mandatory: false, repeatable: false,
        len: 6..=6, ty: Digits,
    },
    (2, 154) => {
        name: "Audio Outcue",
        description: "Content of the end of the audio",
        mandatory: false, repeatable: false,
        len: 0..=64, ty: Text,
    },
    (2, 200) => {
        name: "ObjectData Preview File Format",
        description: "File format of the preview",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    (2, 201) => {
        name: "ObjectData Preview File Format Version",
        description: "Version of the preview's file format",
        mandatory: false, repeatable: false,
        len: 2..=2, ty: Binary,
    },
    (2, 202) => {
        name: "ObjectData Preview Data",
        description: "Preview of the object data",
        mandatory: false, repeatable: false,
        len: 0..=256000, ty: Binary,
    },
    /*
     *
     *  Record 7: Pre-ObjectData Descriptor
     *
     */
    (7, 10) => {
        name: "Size Mode",
        description: "Whether the object data size is known in advance",
        mandatory: true, repeatable: false,
        len: 1..=1, ty: Binary,
    },
    (7, 20) => {
        name: "Max Subfile Size",
        description: "Largest subfile dataset size",
        mandatory: false, repeatable: false,
        len: 0..=4, ty: Binary,
    },
    (7, 90) => {
        name: "ObjectData Size Announced",
        description: "Total size of the object data, if known",
        mandatory: false, repeatable: false,
        len: 0..=4, ty: Binary,
    },
    (7, 95) => {
        name: "Maximum ObjectData Size",
        description: "Upper bound of the object data size",
        mandatory: false, repeatable: false,
        len: 0..=4, ty: Binary,
    },
    /*
     *
     *  Record 8: ObjectData
     *
     */
    (8, 10) => {
        name: "Subfile",
        description: "Object data itself",
        mandatory: true, repeatable: true,
        len: 0..=_, ty: Binary,
    },
    /*
     *
     *  Record 9: Post-ObjectData Descriptor
     *
     */
    (9, 10) => {
        name: "Confirmed ObjectData Size",
        description: "Confirmed ObjectData Size",
        mandatory: false, repeatable: false,
        len: 0..=4, ty: Binary,
    },
}
