//! XML escape utilities.
//!
//! This module provides fast, allocation-minimizing functions for escaping
//! text destined for element content or attribute values.

use memchr::{memchr, memchr3};
use std::borrow::Cow;

/// A single position in the input that needs substitution.
struct Mark {
    /// Byte offset of the character.
    pos: usize,
    /// Encoded length of the character in bytes.
    len: usize,
    /// Replacement text written instead of the character.
    replacement: &'static str,
}

/// Escapes text for use between element tags.
///
/// Replaces `<`, `>` and `&` with their entities and substitutes a single
/// space for characters that are not legal in XML content (control
/// characters below U+0020 except tab, LF and CR, plus U+FFFE and U+FFFF).
/// Double quotes are left untouched; use [`escape_attr`] for attribute
/// values.
///
/// Returns a `Cow<str>` to avoid allocation when no substitution is needed.
///
/// # Example
///
/// ```
/// use minxml::escape::escape_text;
///
/// assert_eq!(escape_text("a < b"), "a &lt; b");
/// assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
/// ```
#[inline]
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape_impl(input, false)
}

/// Escapes text for use inside a double-quoted attribute value.
///
/// Same as [`escape_text`] but additionally replaces `"` with `&quot;`.
///
/// # Example
///
/// ```
/// use minxml::escape::escape_attr;
///
/// assert_eq!(escape_attr("<\"test\">"), "&lt;&quot;test&quot;&gt;");
/// ```
#[inline]
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    escape_impl(input, true)
}

fn escape_impl(input: &str, escape_quotes: bool) -> Cow<'_, str> {
    // Fast path: nothing suspicious in the byte stream.
    if !needs_scan(input.as_bytes(), escape_quotes) {
        return Cow::Borrowed(input);
    }

    let marks = scan(input, escape_quotes);
    if marks.is_empty() {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + marks.len() * 4);
    let mut last = 0;
    for mark in &marks {
        out.push_str(&input[last..mark.pos]);
        out.push_str(mark.replacement);
        last = mark.pos + mark.len;
    }
    out.push_str(&input[last..]);
    Cow::Owned(out)
}

/// Cheap byte-level pre-check. May report false positives (the full scan
/// then finds nothing and the input is returned unchanged), never false
/// negatives.
#[inline]
fn needs_scan(bytes: &[u8], escape_quotes: bool) -> bool {
    if memchr3(b'<', b'>', b'&', bytes).is_some() {
        return true;
    }
    if escape_quotes && memchr(b'"', bytes).is_some() {
        return true;
    }
    // Control bytes, and 0xEF as the lead byte of U+FFFE/U+FFFF.
    bytes
        .iter()
        .any(|&b| (b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r') || b == 0xEF)
}

/// Collects the positions and kinds of all characters needing substitution
/// in a single pass over the input.
fn scan(input: &str, escape_quotes: bool) -> Vec<Mark> {
    let mut marks = Vec::new();
    for (pos, c) in input.char_indices() {
        let replacement = match c {
            '<' => "&lt;",
            '>' => "&gt;",
            '&' => "&amp;",
            '"' if escape_quotes => "&quot;",
            '\t' | '\n' | '\r' => continue,
            // Illegal XML characters are sanitized to a space. Surrogates
            // cannot occur in a &str, so only the low controls and the two
            // non-characters of the 16-bit range remain.
            c if (c as u32) < 0x20 => " ",
            '\u{FFFE}' | '\u{FFFF}' => " ",
            _ => continue,
        };
        marks.push(Mark {
            pos,
            len: c.len_utf8(),
            replacement,
        });
    }
    marks
}
