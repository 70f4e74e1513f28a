//! XML name validation.
//!
//! Implements the NameStartChar/NameChar character classes of the XML
//! specification, restricted to the 16-bit code point range. Names
//! containing supplementary-plane characters are rejected.

/// Validates an XML element (or namespace prefix) name.
///
/// Returns `false` for empty input, for any character outside the XML name
/// grammar, and for names whose first three characters case-insensitively
/// spell `xml` (reserved by the XML specification).
///
/// # Example
///
/// ```
/// use minxml::name::validate_element_name;
///
/// assert!(validate_element_name("worksheet"));
/// assert!(!validate_element_name("xmlData"));
/// assert!(!validate_element_name("1st"));
/// ```
pub fn validate_element_name(name: &str) -> bool {
    validate_name(name) && !has_reserved_prefix(name)
}

/// Validates an XML attribute name.
///
/// Same character rules as [`validate_element_name`], without the reserved
/// `xml` prefix rule: `xmlns` is a perfectly valid attribute name.
pub fn validate_attribute_name(name: &str) -> bool {
    validate_name(name)
}

fn validate_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// True if the first three characters spell `xml` in any case mix.
fn has_reserved_prefix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 3
        && bytes[0].eq_ignore_ascii_case(&b'x')
        && bytes[1].eq_ignore_ascii_case(&b'm')
        && bytes[2].eq_ignore_ascii_case(&b'l')
}

/// NameStartChar per the XML specification, capped at U+FFFD.
fn is_name_start_char(c: char) -> bool {
    matches!(c as u32,
        0x3A // :
        | 0x5F // _
        | 0x41..=0x5A // A-Z
        | 0x61..=0x7A // a-z
        | 0xC0..=0xD6
        | 0xD8..=0xF6
        | 0xF8..=0x2FF
        | 0x370..=0x37D
        | 0x37F..=0x1FFF
        | 0x200C..=0x200D
        | 0x2070..=0x218F
        | 0x2C00..=0x2FEF
        | 0x3001..=0xD7FF
        | 0xF900..=0xFDCF
        | 0xFDF0..=0xFFFD)
}

/// NameChar: NameStartChar plus digits, `-`, `.`, mid dot and the
/// combining-mark ranges.
fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c as u32,
            0x2D // -
            | 0x2E // .
            | 0xB7 // mid dot
            | 0x30..=0x39 // 0-9
            | 0x300..=0x36F
            | 0x203F..=0x2040)
}
