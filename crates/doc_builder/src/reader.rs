//! Shared helpers for parsing package XML parts

use quick_xml::events::BytesStart;
use quick_xml::Reader;

/// Build a reader over an in-memory XML string
pub(crate) fn from_string(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content.as_bytes());
    reader.config_mut().trim_text(true);
    reader
}

/// Match an element name ignoring any namespace prefix
pub(crate) fn matches_element(name: &[u8], expected: &str) -> bool {
    name == expected.as_bytes()
        || name
            .rsplit(|&b| b == b':')
            .next()
            .is_some_and(|local| local == expected.as_bytes())
}

/// Read an attribute value as an owned string
pub(crate) fn get_attribute(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        if attr.key.as_ref() == name {
            String::from_utf8(attr.value.to_vec()).ok()
        } else {
            None
        }
    })
}
